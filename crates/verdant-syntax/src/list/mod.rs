//! List nodes.
//!
//! A list node is a green node of kind `RawKind::LIST` whose slots are its
//! children. The representation is picked purely by child count:
//!
//! | children | variant | slot lookup by offset |
//! |----------|---------|------------------------|
//! | 0        | no node (`None`) | - |
//! | 1        | the child itself | - |
//! | 2, 3     | `Two`, `Three` (interned) | linear |
//! | 4..=9    | `Many` | linear |
//! | >= 10    | `Lots` | binary search over precomputed offsets |
//!
//! `Five` is a fixed five-child form built only by [`list5`], for call sites
//! that know their shape statically.
//!
//! Lists are flat: no list node holds another list node as a direct child.

mod make;

pub use make::{
    concat, concat_in, list2, list2_in, list3, list3_in, list5, make_list, make_list_in,
};

use crate::flags::NodeFlags;
use crate::green::{GreenNode, GreenNodeData, NodeBody};
use crate::kind::RawKind;

/// Concrete representation of a list node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListVariant {
    Two,
    Three,
    Five,
    /// Compact array, fewer than ten children.
    Many,
    /// Array plus cumulative child offsets.
    Lots,
}

#[derive(Clone)]
pub(crate) enum ListChildren {
    Two([GreenNode; 2]),
    Three([GreenNode; 3]),
    Five([GreenNode; 5]),
    Many(Box<[GreenNode]>),
    Lots {
        children: Box<[GreenNode]>,
        offsets: Box<[u32]>,
    },
}

impl ListChildren {
    #[inline]
    pub(crate) fn as_slice(&self) -> &[GreenNode] {
        match self {
            ListChildren::Two(children) => children,
            ListChildren::Three(children) => children,
            ListChildren::Five(children) => children,
            ListChildren::Many(children) | ListChildren::Lots { children, .. } => children,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub(crate) fn variant(&self) -> ListVariant {
        match self {
            ListChildren::Two(_) => ListVariant::Two,
            ListChildren::Three(_) => ListVariant::Three,
            ListChildren::Five(_) => ListVariant::Five,
            ListChildren::Many(_) => ListVariant::Many,
            ListChildren::Lots { .. } => ListVariant::Lots,
        }
    }

    /// Offsets array for the `Lots` form: `offsets[i]` is the summed full
    /// width of `children[..i]`.
    fn lots(children: Box<[GreenNode]>) -> ListChildren {
        let mut offsets = Vec::with_capacity(children.len());
        let mut accumulated = 0u32;
        for child in children.iter() {
            offsets.push(accumulated);
            accumulated += child.full_width();
        }
        ListChildren::Lots {
            children,
            offsets: offsets.into_boxed_slice(),
        }
    }
}

/// Wrap already-flat children in a list node.
pub(crate) fn new_list(children: ListChildren) -> GreenNode {
    debug_assert!(
        children.as_slice().iter().all(|child| !child.is_list()),
        "list nodes must not contain list nodes as direct children"
    );
    let full_width = children.as_slice().iter().map(GreenNode::full_width).sum();
    let body = NodeBody::List(children);
    let flags: NodeFlags = body.inherited_flags();

    GreenNode::from_data(GreenNodeData {
        kind: RawKind::LIST,
        flags,
        full_width,
        extras: None,
        body,
    })
}

/// Wrap four or more flat children, choosing `Many` or `Lots` by count.
pub(crate) fn new_array_list(children: Box<[GreenNode]>) -> GreenNode {
    debug_assert!(children.len() >= 2);
    if children.len() < verdant_common::limits::LOTS_OF_CHILDREN_THRESHOLD {
        new_list(ListChildren::Many(children))
    } else {
        new_list(ListChildren::lots(children))
    }
}

#[cfg(test)]
#[path = "../../tests/list_tests.rs"]
mod tests;
