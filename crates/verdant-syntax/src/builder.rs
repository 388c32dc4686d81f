//! Growable scratch buffer that accumulates children and freezes them into
//! an immutable list node.
//!
//! A builder's logical contents are always flat: adding a list node appends
//! that list's children instead of the list itself.

use crate::cache::NodeCache;
use crate::green::GreenNode;
use crate::kind::RawKind;
use crate::list::make_list_in;
use std::ops::Index;
use tracing::trace;
use verdant_common::limits::{MAX_LIST_CAPACITY, MIN_BUILDER_CAPACITY};

#[derive(Debug, Default)]
pub struct SyntaxListBuilder {
    nodes: Vec<GreenNode>,
    /// Set while the builder is on loan from a pool.
    pub(crate) lease: Option<u64>,
}

impl SyntaxListBuilder {
    pub fn new() -> SyntaxListBuilder {
        SyntaxListBuilder::default()
    }

    pub fn with_capacity(capacity: usize) -> SyntaxListBuilder {
        SyntaxListBuilder {
            nodes: Vec::with_capacity(capacity.min(MAX_LIST_CAPACITY)),
            lease: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Drop all children, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Append `node`; `None` is ignored and lists are flattened.
    ///
    /// ```ignore
    /// builder.add(&token);
    /// builder.add(optional_semicolon.as_ref());
    /// ```
    pub fn add<'n>(&mut self, node: impl Into<Option<&'n GreenNode>>) {
        let Some(node) = node.into() else {
            return;
        };

        if node.is_list() {
            let slot_count = node.slot_count();
            self.ensure_additional_capacity(slot_count);
            for i in 0..slot_count {
                self.add(node.slot(i));
            }
        } else {
            self.ensure_additional_capacity(1);
            self.nodes.push(node.clone());
        }
    }

    /// Append every node of `nodes`, flattening lists.
    pub fn add_range(&mut self, nodes: &[GreenNode]) {
        self.add_range_slice(nodes, 0, nodes.len());
    }

    /// Append `nodes[offset..offset + length]`, flattening lists.
    pub fn add_range_slice(&mut self, nodes: &[GreenNode], offset: usize, length: usize) {
        let start = self.nodes.len();
        self.ensure_additional_capacity(length);
        for node in &nodes[offset..offset + length] {
            self.add(node);
        }
        self.validate_appended(start);
    }

    /// Append slots `offset..offset + length` of `list`.
    ///
    /// A non-list node is treated as a one-element list.
    pub fn add_range_from_list(&mut self, list: &GreenNode, offset: usize, length: usize) {
        if !list.is_list() {
            debug_assert!(offset + length <= 1, "range is outside a single-element list");
            if length == 1 {
                self.add(list);
            }
            return;
        }

        debug_assert!(
            offset + length <= list.slot_count(),
            "range {offset}..{} is outside a list of {} children",
            offset + length,
            list.slot_count()
        );
        let start = self.nodes.len();
        self.ensure_additional_capacity(length);
        for i in offset..offset + length {
            self.add(list.slot(i));
        }
        self.validate_appended(start);
    }

    /// Remove the last child; its reference is released immediately.
    pub fn remove_last(&mut self) {
        debug_assert!(!self.nodes.is_empty(), "remove_last on an empty builder");
        self.nodes.pop();
    }

    /// Keep only the first `len` children.
    pub fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&GreenNode> {
        self.nodes.get(index)
    }

    /// Replace the child at `index`.
    pub fn set(&mut self, index: usize, node: GreenNode) {
        debug_assert!(
            !node.is_list(),
            "a builder slot cannot hold a list node; use add to flatten"
        );
        self.nodes[index] = node;
    }

    #[inline]
    pub fn first(&self) -> Option<&GreenNode> {
        self.nodes.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&GreenNode> {
        self.nodes.last()
    }

    /// Whether any accumulated child has `kind`.
    pub fn any(&self, kind: RawKind) -> bool {
        self.nodes.iter().any(|node| node.kind() == kind)
    }

    #[inline]
    pub fn as_slice(&self) -> &[GreenNode] {
        &self.nodes
    }

    pub fn to_vec(&self) -> Vec<GreenNode> {
        self.nodes.clone()
    }

    /// Freeze the accumulated children into a list node, interning small
    /// lists in the process-wide cache.
    ///
    /// `None` when empty, the child itself when there is exactly one.
    pub fn to_list_node(&self) -> Option<GreenNode> {
        self.to_list_node_in(NodeCache::global())
    }

    /// [`to_list_node`](Self::to_list_node) against an explicit cache.
    pub fn to_list_node_in(&self, cache: &NodeCache) -> Option<GreenNode> {
        make_list_in(cache, &self.nodes)
    }

    /// Grow so that `additional` more children fit: to at least double the
    /// current capacity, never below `MIN_BUILDER_CAPACITY` and never above
    /// `MAX_LIST_CAPACITY`.
    pub fn ensure_additional_capacity(&mut self, additional: usize) {
        let current = self.nodes.capacity();
        let required = self.nodes.len() + additional;
        if required <= current {
            return;
        }

        assert!(
            required <= MAX_LIST_CAPACITY,
            "list of {required} children exceeds the maximum list capacity"
        );
        let new_capacity = required
            .max(current.saturating_mul(2))
            .max(MIN_BUILDER_CAPACITY)
            .min(MAX_LIST_CAPACITY);
        trace!(from = current, to = new_capacity, "grow list builder");
        self.nodes.reserve_exact(new_capacity - self.nodes.len());
    }

    #[inline]
    fn validate_appended(&self, start: usize) {
        debug_assert!(
            self.nodes[start..].iter().all(|node| !node.is_list()),
            "flattening left a list node in the builder"
        );
    }
}

impl Index<usize> for SyntaxListBuilder {
    type Output = GreenNode;

    #[inline]
    fn index(&self, index: usize) -> &GreenNode {
        &self.nodes[index]
    }
}

#[cfg(test)]
#[path = "../tests/builder_tests.rs"]
mod tests;
