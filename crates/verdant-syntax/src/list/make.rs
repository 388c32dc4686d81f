//! List construction and concatenation.

use super::{ListChildren, new_array_list, new_list};
use crate::cache::{CacheLookup, NodeCache};
use crate::flags::NodeFlags;
use crate::green::GreenNode;
use crate::kind::RawKind;
use smallvec::SmallVec;

/// Build a list from `children`, interning two- and three-child lists in the
/// process-wide node cache.
///
/// Returns `None` for no children and the child itself for one. List-valued
/// children are flattened into the result.
pub fn make_list(children: &[GreenNode]) -> Option<GreenNode> {
    make_list_in(NodeCache::global(), children)
}

/// [`make_list`] against an explicit cache.
pub fn make_list_in(cache: &NodeCache, children: &[GreenNode]) -> Option<GreenNode> {
    if children.iter().any(GreenNode::is_list) {
        let flat: Vec<GreenNode> = children.iter().flat_map(flatten_one).cloned().collect();
        return make_flat_list(cache, flat.into_boxed_slice());
    }

    match children {
        [] => None,
        [only] => Some(only.clone()),
        [a, b] => Some(list2_in(cache, a, b)),
        [a, b, c] => Some(list3_in(cache, a, b, c)),
        _ => Some(new_array_list(children.into())),
    }
}

/// Count dispatch over children that are already flat and owned.
pub(crate) fn make_flat_list(cache: &NodeCache, children: Box<[GreenNode]>) -> Option<GreenNode> {
    match &*children {
        [] => None,
        [only] => Some(only.clone()),
        [a, b] => Some(list2_in(cache, a, b)),
        [a, b, c] => Some(list3_in(cache, a, b, c)),
        _ => Some(new_array_list(children)),
    }
}

/// The two-child list `[a, b]`, interned in the process-wide cache.
pub fn list2(a: &GreenNode, b: &GreenNode) -> GreenNode {
    list2_in(NodeCache::global(), a, b)
}

/// The two-child list `[a, b]`, interned in `cache`.
pub fn list2_in(cache: &NodeCache, a: &GreenNode, b: &GreenNode) -> GreenNode {
    interned_list(cache, &[a, b], || ListChildren::Two([a.clone(), b.clone()]))
}

/// The three-child list `[a, b, c]`, interned in the process-wide cache.
pub fn list3(a: &GreenNode, b: &GreenNode, c: &GreenNode) -> GreenNode {
    list3_in(NodeCache::global(), a, b, c)
}

/// The three-child list `[a, b, c]`, interned in `cache`.
pub fn list3_in(cache: &NodeCache, a: &GreenNode, b: &GreenNode, c: &GreenNode) -> GreenNode {
    interned_list(cache, &[a, b, c], || {
        ListChildren::Three([a.clone(), b.clone(), c.clone()])
    })
}

/// The fixed five-child list. Never interned.
pub fn list5(children: [GreenNode; 5]) -> GreenNode {
    new_list(ListChildren::Five(children))
}

fn interned_list(
    cache: &NodeCache,
    children: &[&GreenNode],
    build: impl FnOnce() -> ListChildren,
) -> GreenNode {
    debug_assert!(
        children.iter().all(|child| !child.is_list()),
        "list nodes must not contain list nodes as direct children"
    );

    let slots: SmallVec<[Option<&GreenNode>; 3]> = children.iter().map(|c| Some(*c)).collect();
    let hash = match cache.try_get(RawKind::LIST, NodeFlags::default_node_flags(), &slots) {
        CacheLookup::Hit(node) => return node,
        CacheLookup::Miss { hash } => Some(hash),
        CacheLookup::Uncacheable => None,
    };

    let list = new_list(build());
    if let Some(hash) = hash {
        cache.add(&list, hash);
    }
    list
}

/// Concatenate two optional list-or-element operands into one flat list,
/// using the process-wide cache.
///
/// `concat(None, x) == x` and `concat(x, None) == x`.
pub fn concat(left: Option<&GreenNode>, right: Option<&GreenNode>) -> Option<GreenNode> {
    concat_in(NodeCache::global(), left, right)
}

/// [`concat`] against an explicit cache.
pub fn concat_in(
    cache: &NodeCache,
    left: Option<&GreenNode>,
    right: Option<&GreenNode>,
) -> Option<GreenNode> {
    let (left, right) = match (left, right) {
        (None, other) | (other, None) => return other.cloned(),
        (Some(left), Some(right)) => (left, right),
    };

    if !left.is_list() && !right.is_list() {
        return Some(list2_in(cache, left, right));
    }

    let mut children = Vec::with_capacity(flat_len(left) + flat_len(right));
    children.extend(flatten_one(left).cloned());
    children.extend(flatten_one(right).cloned());
    make_flat_list(cache, children.into_boxed_slice())
}

/// A list's children, or the element itself.
fn flatten_one(node: &GreenNode) -> impl Iterator<Item = &GreenNode> {
    let (list, single) = if node.is_list() {
        (Some(node), None)
    } else {
        (None, Some(node))
    };
    list.into_iter()
        .flat_map(|list| (0..list.slot_count()).filter_map(move |i| list.slot(i)))
        .chain(single)
}

#[inline]
fn flat_len(node: &GreenNode) -> usize {
    if node.is_list() { node.slot_count() } else { 1 }
}
