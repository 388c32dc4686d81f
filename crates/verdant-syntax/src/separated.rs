//! Read-only list views and the separated-list builder.
//!
//! A list-valued slot holds `None` (empty), a single element, or a flat list
//! node. [`SyntaxListView`] hides that distinction. [`SeparatedListView`]
//! additionally reads the list as `element, separator, element, ...`:
//! even raw positions are elements, odd raw positions are separator tokens.
//!
//! Both views compare by identity of the wrapped node.

use crate::green::GreenNode;
use crate::kind::RawKind;
use crate::pool::PooledBuilder;

#[derive(Clone, Debug, Default)]
pub struct SyntaxListView {
    node: Option<GreenNode>,
}

impl SyntaxListView {
    pub fn new(node: Option<GreenNode>) -> SyntaxListView {
        SyntaxListView { node }
    }

    /// The wrapped node: `None`, a single element, or a list node.
    #[inline]
    pub fn node(&self) -> Option<&GreenNode> {
        self.node.as_ref()
    }

    pub fn len(&self) -> usize {
        match &self.node {
            None => 0,
            Some(node) if node.is_list() => node.slot_count(),
            Some(_) => 1,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    pub fn get(&self, index: usize) -> Option<&GreenNode> {
        let node = self.node.as_ref()?;
        if node.is_list() {
            node.slot(index)
        } else if index == 0 {
            Some(node)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &GreenNode> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    pub fn any(&self, kind: RawKind) -> bool {
        self.iter().any(|node| node.kind() == kind)
    }
}

impl PartialEq for SyntaxListView {
    fn eq(&self, other: &SyntaxListView) -> bool {
        match (&self.node, &other.node) {
            (Some(a), Some(b)) => a.ptr_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Eq for SyntaxListView {}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeparatedListView {
    list: SyntaxListView,
}

impl SeparatedListView {
    /// Wrap `node`, checking the alternating shape in debug builds.
    pub fn new(node: Option<GreenNode>) -> SeparatedListView {
        let view = SeparatedListView {
            list: SyntaxListView::new(node),
        };
        view.validate();
        view
    }

    /// Number of elements: `ceil(raw / 2)`.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len().div_ceil(2)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Number of separators: `floor(raw / 2)`.
    #[inline]
    pub fn separator_count(&self) -> usize {
        self.list.len() / 2
    }

    /// Element at logical position `index` (raw position `2 * index`).
    #[inline]
    pub fn get(&self, index: usize) -> Option<&GreenNode> {
        self.list.get(index * 2)
    }

    /// Separator after element `index` (raw position `2 * index + 1`).
    #[inline]
    pub fn separator(&self, index: usize) -> Option<&GreenNode> {
        self.list.get(index * 2 + 1)
    }

    pub fn elements(&self) -> impl DoubleEndedIterator<Item = &GreenNode> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    pub fn separators(&self) -> impl DoubleEndedIterator<Item = &GreenNode> + '_ {
        (0..self.separator_count()).filter_map(move |i| self.separator(i))
    }

    /// Elements and separators in source order.
    #[inline]
    pub fn with_separators(&self) -> &SyntaxListView {
        &self.list
    }

    /// Whether the list ends with a separator (e.g. a trailing comma).
    pub fn has_trailing_separator(&self) -> bool {
        let raw = self.list.len();
        raw > 0 && raw % 2 == 0
    }

    #[inline]
    pub fn node(&self) -> Option<&GreenNode> {
        self.list.node()
    }

    #[cfg(debug_assertions)]
    fn validate(&self) {
        for (i, item) in self.list.iter().enumerate() {
            if i % 2 == 0 {
                assert!(
                    !item.is_token(),
                    "even elements of a separated list must be nodes, found a token at {i}"
                );
            } else {
                assert!(
                    item.is_token(),
                    "odd elements of a separated list must be separator tokens, found a node at {i}"
                );
            }
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    fn validate(&self) {}
}

/// Builder that accumulates a separated list in alternating order.
pub struct SeparatedListBuilder<'p> {
    builder: PooledBuilder<'p>,
    expect_separator: bool,
}

impl<'p> SeparatedListBuilder<'p> {
    pub fn new(builder: PooledBuilder<'p>) -> SeparatedListBuilder<'p> {
        debug_assert!(builder.is_empty());
        SeparatedListBuilder {
            builder,
            expect_separator: false,
        }
    }

    /// Append an element. The previous item must have been a separator.
    pub fn add(&mut self, element: &GreenNode) {
        debug_assert!(
            !self.expect_separator,
            "expected a separator before the next element"
        );
        debug_assert!(
            !element.is_list(),
            "separated list elements cannot be list nodes"
        );
        self.builder.add(element);
        self.expect_separator = true;
    }

    /// Append a separator token. The previous item must have been an element.
    pub fn add_separator(&mut self, separator: &GreenNode) {
        debug_assert!(
            self.expect_separator,
            "expected an element before the next separator"
        );
        debug_assert!(separator.is_token(), "separators must be tokens");
        self.builder.add(separator);
        self.expect_separator = false;
    }

    /// Number of elements added so far.
    pub fn len(&self) -> usize {
        self.builder.len().div_ceil(2)
    }

    pub fn is_empty(&self) -> bool {
        self.builder.is_empty()
    }

    /// Whether the next item must be a separator.
    #[inline]
    pub fn expects_separator(&self) -> bool {
        self.expect_separator
    }

    /// Freeze the accumulated items through the process-wide node cache.
    pub fn to_list(&self) -> SeparatedListView {
        SeparatedListView::new(self.builder.to_list_node())
    }

    /// Freeze the accumulated items through `cache`.
    pub fn to_list_in(&self, cache: &crate::cache::NodeCache) -> SeparatedListView {
        SeparatedListView::new(self.builder.to_list_node_in(cache))
    }
}

#[cfg(test)]
#[path = "../tests/separated_tests.rs"]
mod tests;
