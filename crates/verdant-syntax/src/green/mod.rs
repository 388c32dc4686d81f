//! The green node contract.
//!
//! A `GreenNode` is an immutable, position-independent syntax element: a
//! token, a piece of trivia, an interior node with a fixed set of optional
//! slots, or a list node. Handles are cheap `Arc` clones and compare by
//! identity. Nothing here ever mutates a node after construction; attaching
//! diagnostics or annotations forks a new node that shares every child.
//!
//! Construction lives in the submodules:
//! - `token`: tokens and trivia
//! - `node`: interior nodes (interned through the node cache)
//! - `crate::list`: list nodes

mod node;
mod token;

pub use node::{make_node, make_node_in};

use crate::children::{Children, ChildrenRev};
use crate::diagnostics::Diagnostics;
use crate::flags::NodeFlags;
use crate::kind::RawKind;
use crate::list::{ListChildren, ListVariant};
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use verdant_common::{DiagnosticInfo, SyntaxAnnotation};

/// Shared handle to an immutable green node.
#[derive(Clone)]
pub struct GreenNode(pub(crate) Arc<GreenNodeData>);

/// Storage behind a `GreenNode` handle.
pub struct GreenNodeData {
    pub(crate) kind: RawKind,
    pub(crate) flags: NodeFlags,
    pub(crate) full_width: u32,
    pub(crate) extras: Option<Box<NodeExtras>>,
    pub(crate) body: NodeBody,
}

/// Diagnostics and annotations attached directly to one node.
#[derive(Clone, Default)]
pub(crate) struct NodeExtras {
    pub(crate) diagnostics: Box<[DiagnosticInfo]>,
    pub(crate) annotations: Box<[SyntaxAnnotation]>,
}

#[derive(Clone)]
pub(crate) enum NodeBody {
    Token(TokenBody),
    Trivia(Box<str>),
    Interior(Box<[Option<GreenNode>]>),
    List(ListChildren),
}

#[derive(Clone)]
pub(crate) struct TokenBody {
    pub(crate) text: Box<str>,
    pub(crate) leading: Option<GreenNode>,
    pub(crate) trailing: Option<GreenNode>,
}

impl GreenNode {
    #[inline]
    pub(crate) fn from_data(data: GreenNodeData) -> GreenNode {
        GreenNode(Arc::new(data))
    }

    // ============================================================================
    // Kind and flags
    // ============================================================================

    #[inline]
    pub fn kind(&self) -> RawKind {
        self.0.kind
    }

    #[inline]
    pub fn flags(&self) -> NodeFlags {
        self.0.flags
    }

    #[inline]
    pub fn is_token(&self) -> bool {
        matches!(self.0.body, NodeBody::Token(_))
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(self.0.body, NodeBody::Trivia(_))
    }

    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self.0.body, NodeBody::List(_))
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        !self.0.flags.contains(NodeFlags::IS_NOT_MISSING)
    }

    #[inline]
    pub fn contains_diagnostics(&self) -> bool {
        self.0.flags.contains(NodeFlags::CONTAINS_DIAGNOSTICS)
    }

    #[inline]
    pub fn contains_annotations(&self) -> bool {
        self.0.flags.contains(NodeFlags::CONTAINS_ANNOTATIONS)
    }

    /// Whether this node may be interned by the node cache: well formed, no
    /// diagnostics or annotations anywhere below it, and at most
    /// `MAX_CACHED_CHILD_COUNT` slots.
    #[inline]
    pub fn is_cacheable(&self) -> bool {
        self.0.flags.inherited() == NodeFlags::IS_NOT_MISSING
            && self.slot_count() <= verdant_common::limits::MAX_CACHED_CHILD_COUNT
    }

    // ============================================================================
    // Identity
    // ============================================================================

    /// Whether both handles point at the same node.
    #[inline]
    pub fn ptr_eq(&self, other: &GreenNode) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Hash of this node's identity (its address), not of its contents.
    #[inline]
    pub fn identity_hash(&self) -> u32 {
        let mut hasher = FxHasher::default();
        (Arc::as_ptr(&self.0) as usize).hash(&mut hasher);
        hasher.finish() as u32
    }

    // ============================================================================
    // Width and slots
    // ============================================================================

    /// Width of the node's text including all trivia.
    #[inline]
    pub fn full_width(&self) -> u32 {
        self.0.full_width
    }

    /// Width of the node's text without the leading trivia of its first token
    /// and the trailing trivia of its last token.
    pub fn width(&self) -> u32 {
        self.full_width() - self.leading_trivia_width() - self.trailing_trivia_width()
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.0.body.slot_count()
    }

    /// The child at `index`, or `None` for an absent optional slot or an
    /// index past `slot_count()`.
    #[inline]
    pub fn slot(&self, index: usize) -> Option<&GreenNode> {
        self.0.body.slot(index)
    }

    /// Offset of slot `index` from the start of this node's full span.
    pub fn slot_offset(&self, index: usize) -> u32 {
        if let NodeBody::List(ListChildren::Lots { offsets, .. }) = &self.0.body {
            return offsets[index];
        }
        (0..index)
            .filter_map(|i| self.slot(i))
            .map(GreenNode::full_width)
            .sum()
    }

    /// Index of the slot whose full span contains `offset`.
    ///
    /// `offset` is relative to the start of this node and must be less than
    /// `full_width()`. Lists with many children binary-search precomputed
    /// offsets; everything else scans.
    pub fn find_slot_index_containing_offset(&self, offset: u32) -> usize {
        debug_assert!(
            offset < self.full_width(),
            "offset {offset} is outside a node of width {}",
            self.full_width()
        );

        if let NodeBody::List(ListChildren::Lots { offsets, .. }) = &self.0.body {
            return offsets.partition_point(|&start| start <= offset) - 1;
        }

        let mut accumulated = 0;
        for index in 0..self.slot_count() {
            if let Some(child) = self.slot(index) {
                accumulated += child.full_width();
                if offset < accumulated {
                    return index;
                }
            }
        }
        self.slot_count().saturating_sub(1)
    }

    /// Which concrete list representation backs this node, if it is a list.
    pub fn list_variant(&self) -> Option<ListVariant> {
        match &self.0.body {
            NodeBody::List(children) => Some(children.variant()),
            _ => None,
        }
    }

    // ============================================================================
    // Tokens and trivia
    // ============================================================================

    /// Text of a token (without trivia) or of a trivia node.
    pub fn text(&self) -> Option<&str> {
        match &self.0.body {
            NodeBody::Token(token) => Some(&token.text),
            NodeBody::Trivia(text) => Some(text),
            _ => None,
        }
    }

    pub fn leading_trivia(&self) -> Option<&GreenNode> {
        match &self.0.body {
            NodeBody::Token(token) => token.leading.as_ref(),
            _ => None,
        }
    }

    pub fn trailing_trivia(&self) -> Option<&GreenNode> {
        match &self.0.body {
            NodeBody::Token(token) => token.trailing.as_ref(),
            _ => None,
        }
    }

    /// Leading trivia width of the first token in this subtree.
    pub fn leading_trivia_width(&self) -> u32 {
        match self.first_token() {
            Some(token) => token.leading_trivia().map_or(0, GreenNode::full_width),
            None => 0,
        }
    }

    /// Trailing trivia width of the last token in this subtree.
    pub fn trailing_trivia_width(&self) -> u32 {
        match self.last_token() {
            Some(token) => token.trailing_trivia().map_or(0, GreenNode::full_width),
            None => 0,
        }
    }

    /// First token of the subtree that covers any text.
    ///
    /// Absent slots and zero-width children are skipped, so missing tokens
    /// and empty interior nodes never hide a later token. A node whose full
    /// width is zero has no such token, unless it is itself a token.
    pub fn first_token(&self) -> Option<&GreenNode> {
        let mut node = self;
        loop {
            if node.is_token() {
                return Some(node);
            }
            node = (0..node.slot_count())
                .filter_map(move |i| node.slot(i))
                .find(|child| child.full_width() > 0)?;
        }
    }

    /// Last token of the subtree that covers any text. Mirrors
    /// [`GreenNode::first_token`].
    pub fn last_token(&self) -> Option<&GreenNode> {
        let mut node = self;
        loop {
            if node.is_token() {
                return Some(node);
            }
            node = (0..node.slot_count())
                .rev()
                .filter_map(move |i| node.slot(i))
                .find(|child| child.full_width() > 0)?;
        }
    }

    // ============================================================================
    // Diagnostics and annotations
    // ============================================================================

    /// Diagnostics attached directly to this node.
    #[inline]
    pub fn diagnostics(&self) -> &[DiagnosticInfo] {
        self.0.extras.as_deref().map_or(&[], |extras| &extras.diagnostics)
    }

    /// Annotations attached directly to this node.
    #[inline]
    pub fn annotations(&self) -> &[SyntaxAnnotation] {
        self.0.extras.as_deref().map_or(&[], |extras| &extras.annotations)
    }

    /// A new node of the same shape and children carrying `diagnostics`.
    #[must_use]
    pub fn with_diagnostics(&self, diagnostics: Vec<DiagnosticInfo>) -> GreenNode {
        let extras = NodeExtras {
            diagnostics: diagnostics.into_boxed_slice(),
            annotations: self.annotations().into(),
        };
        self.fork(extras)
    }

    /// A new node of the same shape and children carrying `annotations`.
    #[must_use]
    pub fn with_annotations(&self, annotations: Vec<SyntaxAnnotation>) -> GreenNode {
        let extras = NodeExtras {
            diagnostics: self.diagnostics().into(),
            annotations: annotations.into_boxed_slice(),
        };
        self.fork(extras)
    }

    /// A new node with `annotation` added to the existing annotations.
    #[must_use]
    pub fn with_additional_annotation(&self, annotation: SyntaxAnnotation) -> GreenNode {
        let mut annotations = self.annotations().to_vec();
        annotations.push(annotation);
        self.with_annotations(annotations)
    }

    fn fork(&self, extras: NodeExtras) -> GreenNode {
        let own = NodeFlags::CONTAINS_DIAGNOSTICS | NodeFlags::CONTAINS_ANNOTATIONS;
        let mut flags = self.0.flags.difference(own);
        flags |= self.0.body.inherited_flags() & own;
        if !extras.diagnostics.is_empty() {
            flags |= NodeFlags::CONTAINS_DIAGNOSTICS;
        }
        if !extras.annotations.is_empty() {
            flags |= NodeFlags::CONTAINS_ANNOTATIONS;
        }

        let extras = if extras.diagnostics.is_empty() && extras.annotations.is_empty() {
            None
        } else {
            Some(Box::new(extras))
        };

        GreenNode::from_data(GreenNodeData {
            kind: self.0.kind,
            flags,
            full_width: self.0.full_width,
            extras,
            body: self.0.body.clone(),
        })
    }

    // ============================================================================
    // Traversal
    // ============================================================================

    /// Direct children, with list-valued slots expanded in place.
    #[inline]
    pub fn children(&self) -> Children<'_> {
        Children::new(self)
    }

    /// Direct children in reverse order, with list-valued slots expanded.
    #[inline]
    pub fn children_rev(&self) -> ChildrenRev<'_> {
        ChildrenRev::new(self)
    }

    /// Every diagnostic in this subtree, in source order.
    #[inline]
    pub fn all_diagnostics(&self) -> Diagnostics<'_> {
        Diagnostics::new(self)
    }

    /// The full source text covered by this subtree, trivia included.
    pub fn to_full_string(&self) -> String {
        enum Piece<'a> {
            Node(&'a GreenNode),
            Text(&'a str),
        }

        let mut out = String::with_capacity(self.full_width() as usize);
        let mut stack = vec![Piece::Node(self)];
        while let Some(piece) = stack.pop() {
            let node = match piece {
                Piece::Text(text) => {
                    out.push_str(text);
                    continue;
                }
                Piece::Node(node) => node,
            };
            match &node.0.body {
                NodeBody::Token(token) => {
                    stack.extend(token.trailing.as_ref().map(Piece::Node));
                    stack.push(Piece::Text(&token.text));
                    stack.extend(token.leading.as_ref().map(Piece::Node));
                }
                NodeBody::Trivia(text) => out.push_str(text),
                NodeBody::Interior(_) | NodeBody::List(_) => {
                    stack.extend(
                        (0..node.slot_count())
                            .rev()
                            .filter_map(|i| node.slot(i))
                            .map(Piece::Node),
                    );
                }
            }
        }
        out
    }
}

impl NodeBody {
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        match self {
            NodeBody::Token(_) | NodeBody::Trivia(_) => 0,
            NodeBody::Interior(slots) => slots.len(),
            NodeBody::List(children) => children.len(),
        }
    }

    #[inline]
    pub(crate) fn slot(&self, index: usize) -> Option<&GreenNode> {
        match self {
            NodeBody::Token(_) | NodeBody::Trivia(_) => None,
            NodeBody::Interior(slots) => slots.get(index).and_then(Option::as_ref),
            NodeBody::List(children) => children.as_slice().get(index),
        }
    }

    /// OR of the inherited flags of every child (trivia included for tokens).
    pub(crate) fn inherited_flags(&self) -> NodeFlags {
        let mut flags = NodeFlags::empty();
        match self {
            NodeBody::Token(token) => {
                for trivia in [&token.leading, &token.trailing].into_iter().flatten() {
                    flags |= trivia.flags().inherited();
                }
            }
            NodeBody::Trivia(_) => {}
            NodeBody::Interior(slots) => {
                for child in slots.iter().flatten() {
                    flags |= child.flags().inherited();
                }
            }
            NodeBody::List(children) => {
                for child in children.as_slice() {
                    flags |= child.flags().inherited();
                }
            }
        }
        flags
    }
}

impl PartialEq for GreenNode {
    #[inline]
    fn eq(&self, other: &GreenNode) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for GreenNode {}

impl Hash for GreenNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).hash(state);
    }
}

impl fmt::Debug for GreenNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("GreenNode");
        debug
            .field("kind", &self.kind())
            .field("full_width", &self.full_width());
        if let Some(text) = self.text() {
            debug.field("text", &text);
        } else {
            debug.field("slots", &self.slot_count());
        }
        if self.is_missing() {
            debug.field("missing", &true);
        }
        if !self.diagnostics().is_empty() {
            debug.field("diagnostics", &self.diagnostics().len());
        }
        debug.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/green_tests.rs"]
mod tests;
