//! Interior node construction.

use super::{GreenNode, GreenNodeData, NodeBody};
use crate::cache::{CacheLookup, NodeCache};
use crate::flags::NodeFlags;
use crate::kind::RawKind;

/// Build an interior node, interning it through the process-wide cache.
///
/// `context` carries the factory-context flags the parser was in; they are
/// part of the node's cache identity.
pub fn make_node(kind: RawKind, context: NodeFlags, slots: Vec<Option<GreenNode>>) -> GreenNode {
    make_node_in(NodeCache::global(), kind, context, slots)
}

/// Build an interior node, interning it through `cache`.
///
/// Nodes with at most three slots are looked up first; an equivalent cached
/// node (same kind, flags and identical children) is returned instead of a
/// new allocation.
pub fn make_node_in(
    cache: &NodeCache,
    kind: RawKind,
    context: NodeFlags,
    slots: Vec<Option<GreenNode>>,
) -> GreenNode {
    debug_assert!(
        !kind.is_list(),
        "interior nodes cannot carry the list kind; use make_list"
    );
    debug_assert!(
        (context - NodeFlags::FACTORY_CONTEXT_MASK).is_empty(),
        "only factory-context flags may be passed as node context"
    );

    let flags = NodeFlags::default_node_flags() | context;
    let lookup = {
        let children: smallvec::SmallVec<[Option<&GreenNode>; 3]> =
            slots.iter().map(Option::as_ref).collect();
        cache.try_get(kind, flags, &children)
    };

    let hash = match lookup {
        CacheLookup::Hit(node) => return node,
        CacheLookup::Miss { hash } => Some(hash),
        CacheLookup::Uncacheable => None,
    };

    let node = new_interior(kind, context, slots.into_boxed_slice());
    if let Some(hash) = hash {
        cache.add(&node, hash);
    }
    node
}

fn new_interior(kind: RawKind, context: NodeFlags, slots: Box<[Option<GreenNode>]>) -> GreenNode {
    let full_width = slots.iter().flatten().map(GreenNode::full_width).sum();
    let body = NodeBody::Interior(slots);
    let flags = body.inherited_flags() | context;

    GreenNode::from_data(GreenNodeData {
        kind,
        flags,
        full_width,
        extras: None,
        body,
    })
}
