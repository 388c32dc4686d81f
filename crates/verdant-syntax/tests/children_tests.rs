use super::*;
use crate::cache::NodeCache;
use crate::flags::NodeFlags;
use crate::green::make_node_in;
use crate::kind::RawKind;
use crate::list::{list3_in, make_list_in};

const IDENT: RawKind = RawKind(10);
const BLOCK: RawKind = RawKind(20);

fn ident(text: &str) -> GreenNode {
    GreenNode::token(IDENT, text)
}

fn texts<'a>(nodes: impl Iterator<Item = &'a GreenNode>) -> Vec<&'a str> {
    nodes.map(|node| node.text().unwrap_or("?")).collect()
}

#[test]
fn list_slots_are_expanded_in_place() {
    let cache = NodeCache::new();
    let inner = list3_in(&cache, &ident("b"), &ident("c"), &ident("d"));
    let node = make_node_in(
        &cache,
        BLOCK,
        NodeFlags::empty(),
        vec![Some(ident("a")), None, Some(inner), Some(ident("e"))],
    );

    assert_eq!(texts(Children::new(&node)), ["a", "b", "c", "d", "e"]);
    assert_eq!(texts(ChildrenRev::new(&node)), ["e", "d", "c", "b", "a"]);
    assert_eq!(node.children().count(), 5);
    assert_eq!(node.children_rev().count(), 5);
}

#[test]
fn leading_and_trailing_list_slots() {
    let cache = NodeCache::new();
    let first = make_list_in(&cache, &[ident("a"), ident("b")]);
    let last = make_list_in(&cache, &[ident("y"), ident("z")]);
    let node = make_node_in(
        &cache,
        BLOCK,
        NodeFlags::empty(),
        vec![first, None, Some(ident("m")), None, last],
    );

    assert_eq!(texts(node.children()), ["a", "b", "m", "y", "z"]);
    assert_eq!(texts(node.children_rev()), ["z", "y", "m", "b", "a"]);
}

#[test]
fn leaves_and_empty_nodes_have_no_children() {
    let cache = NodeCache::new();
    let token = ident("a");
    assert_eq!(token.children().count(), 0);
    assert_eq!(token.children_rev().count(), 0);

    let empty = make_node_in(&cache, BLOCK, NodeFlags::empty(), vec![None, None]);
    assert!(empty.children().next().is_none());
    assert!(empty.children_rev().next().is_none());
}

#[test]
fn list_root_enumerates_its_own_children() {
    let cache = NodeCache::new();
    let tokens: Vec<_> = (0..12).map(|i| ident(&i.to_string())).collect();
    let list = make_list_in(&cache, &tokens).expect("list");

    assert!(list.children().zip(&tokens).all(|(a, b)| a.ptr_eq(b)));
    assert!(list.children_rev().zip(tokens.iter().rev()).all(|(a, b)| a.ptr_eq(b)));
}

#[test]
fn reverse_is_forward_reversed_for_every_list_size() {
    let cache = NodeCache::new();
    let tokens: Vec<_> = (0..14).map(|i| ident(&i.to_string())).collect();

    for count in 0..=tokens.len() {
        let list = make_list_in(&cache, &tokens[..count]);
        let node = make_node_in(
            &cache,
            BLOCK,
            NodeFlags::empty(),
            vec![Some(ident("head")), list, Some(ident("tail"))],
        );

        let mut forward: Vec<_> = node.children().cloned().collect();
        forward.reverse();
        let backward: Vec<_> = node.children_rev().cloned().collect();
        assert_eq!(forward, backward, "count {count}");
        assert_eq!(backward.len(), count + 2);
    }
}

#[test]
fn clones_advance_independently() {
    let cache = NodeCache::new();
    let inner = list3_in(&cache, &ident("b"), &ident("c"), &ident("d"));
    let node = make_node_in(&cache, BLOCK, NodeFlags::empty(), vec![Some(ident("a")), Some(inner)]);

    let mut original = node.children();
    assert_eq!(original.next().and_then(GreenNode::text), Some("a"));
    assert_eq!(original.next().and_then(GreenNode::text), Some("b"));

    let mut copy = original.clone();
    assert_eq!(copy.next().and_then(GreenNode::text), Some("c"));
    assert_eq!(copy.next().and_then(GreenNode::text), Some("d"));
    assert!(copy.next().is_none());

    assert_eq!(original.next().and_then(GreenNode::text), Some("c"));
}

#[test]
fn enumerators_are_copied_by_value() {
    let cache = NodeCache::new();
    let inner = list3_in(&cache, &ident("b"), &ident("c"), &ident("d"));
    let node = make_node_in(&cache, BLOCK, NodeFlags::empty(), vec![Some(inner), Some(ident("e"))]);

    let mut backward = node.children_rev();
    assert_eq!(backward.next().and_then(GreenNode::text), Some("e"));
    assert_eq!(backward.next().and_then(GreenNode::text), Some("d"));

    let saved = backward;
    assert_eq!(texts(backward), ["c", "b"]);
    assert_eq!(texts(saved), ["c", "b"]);

    let mut forward = node.children();
    let start = forward;
    assert_eq!(forward.next().and_then(GreenNode::text), Some("b"));
    assert_eq!(texts(forward), ["c", "d", "e"]);
    assert_eq!(texts(start), ["b", "c", "d", "e"]);
}

#[test]
fn exhausted_enumerators_stay_exhausted() {
    let token = ident("a");
    let mut forward = Children::new(&token);
    assert!(forward.next().is_none());
    assert!(forward.next().is_none());

    let mut backward = ChildrenRev::new(&token);
    assert!(backward.next().is_none());
    assert!(backward.next().is_none());
}
