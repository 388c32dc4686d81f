use super::*;
use crate::list::{ListVariant, list2_in};

const IDENT: RawKind = RawKind(10);
const COMMA: RawKind = RawKind(11);

fn ident(text: &str) -> GreenNode {
    GreenNode::token(IDENT, text)
}

fn idents(count: usize) -> Vec<GreenNode> {
    (0..count).map(|i| ident(&i.to_string())).collect()
}

#[test]
fn adding_a_list_appends_its_children() {
    let cache = NodeCache::new();
    let a = ident("a");
    let b = ident("bb");
    let c = ident("ccc");
    let d = ident("d");

    let mut builder = SyntaxListBuilder::new();
    builder.add(&a);
    builder.add(&list2_in(&cache, &b, &c));
    builder.add(&d);

    assert_eq!(builder.len(), 4);
    assert_eq!(builder.as_slice(), &[a.clone(), b.clone(), c.clone(), d.clone()]);

    let list = builder.to_list_node_in(&cache).expect("list");
    assert_eq!(list.list_variant(), Some(ListVariant::Many));
    assert_eq!(list.children().cloned().collect::<Vec<_>>(), vec![a, b, c, d]);
    assert_eq!(list.find_slot_index_containing_offset(3), 2);
}

#[test]
fn adding_none_is_a_no_op() {
    let mut builder = SyntaxListBuilder::new();
    builder.add(None::<&GreenNode>);
    assert!(builder.is_empty());
    assert!(builder.to_list_node().is_none());
}

#[test]
fn large_lists_are_flattened_on_add() {
    let cache = NodeCache::new();
    let children = idents(12);
    let list = make_list_in(&cache, &children).expect("list");

    let mut builder = SyntaxListBuilder::new();
    builder.add(&ident("first"));
    builder.add(&list);

    assert_eq!(builder.len(), 13);
    assert!(builder.as_slice().iter().all(|node| !node.is_list()));
    assert_eq!(&builder.as_slice()[1..], children.as_slice());
}

#[test]
fn add_range_flattens_lists_in_the_range() {
    let cache = NodeCache::new();
    let pair = list2_in(&cache, &ident("x"), &ident("y"));
    let nodes = vec![ident("a"), pair, ident("b"), ident("c")];

    let mut builder = SyntaxListBuilder::new();
    builder.add_range_slice(&nodes, 1, 2);
    assert_eq!(builder.len(), 3);

    builder.add_range(&nodes);
    assert_eq!(builder.len(), 8);
}

#[test]
fn add_range_from_list_copies_a_window() {
    let cache = NodeCache::new();
    let children = idents(6);
    let list = make_list_in(&cache, &children).expect("list");

    let mut builder = SyntaxListBuilder::new();
    builder.add_range_from_list(&list, 1, 3);
    assert_eq!(builder.as_slice(), &children[1..4]);

    let single = ident("solo");
    builder.add_range_from_list(&single, 0, 1);
    builder.add_range_from_list(&single, 0, 0);
    assert_eq!(builder.len(), 4);
    assert!(builder.last().expect("last").ptr_eq(&single));
}

#[test]
fn editing_operations() {
    let children = idents(5);
    let mut builder = SyntaxListBuilder::new();
    builder.add_range(&children);

    builder.remove_last();
    assert_eq!(builder.len(), 4);
    assert!(builder.last().expect("last").ptr_eq(&children[3]));

    let comma = GreenNode::token(COMMA, ",");
    builder.set(1, comma.clone());
    assert!(builder[1].ptr_eq(&comma));
    assert!(builder.any(COMMA));

    builder.truncate(1);
    assert_eq!(builder.to_vec(), vec![children[0].clone()]);
    assert!(builder.first().expect("first").ptr_eq(&children[0]));
    assert!(!builder.any(COMMA));
    assert!(builder.get(1).is_none());
}

#[test]
fn freezing_single_child_returns_the_child() {
    let a = ident("a");
    let mut builder = SyntaxListBuilder::new();
    builder.add(&a);
    let frozen = builder.to_list_node().expect("child");
    assert!(frozen.ptr_eq(&a));
}

#[test]
fn freezing_does_not_consume_the_builder() {
    let cache = NodeCache::new();
    let mut builder = SyntaxListBuilder::new();
    builder.add_range(&idents(3));

    let first = builder.to_list_node_in(&cache).expect("list");
    let second = builder.to_list_node_in(&cache).expect("list");
    assert_eq!(builder.len(), 3);
    assert!(first.ptr_eq(&second));
}

#[test]
fn capacity_doubles_from_the_minimum() {
    let mut builder = SyntaxListBuilder::new();
    assert_eq!(builder.capacity(), 0);

    builder.add(&ident("a"));
    assert!(builder.capacity() >= MIN_BUILDER_CAPACITY);

    let before = builder.capacity();
    builder.add_range(&idents(before));
    assert!(builder.capacity() >= before * 2);
}

#[test]
fn clear_keeps_capacity() {
    let mut builder = SyntaxListBuilder::with_capacity(32);
    builder.add_range(&idents(20));
    let capacity = builder.capacity();

    builder.clear();
    assert!(builder.is_empty());
    assert_eq!(builder.capacity(), capacity);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "cannot hold a list node")]
fn set_rejects_list_nodes() {
    let cache = NodeCache::new();
    let mut builder = SyntaxListBuilder::new();
    builder.add(&ident("a"));
    builder.set(0, list2_in(&cache, &ident("b"), &ident("c")));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "remove_last on an empty builder")]
fn remove_last_on_empty_builder_panics() {
    SyntaxListBuilder::new().remove_last();
}

#[test]
#[should_panic(expected = "exceeds the maximum list capacity")]
fn growth_past_the_maximum_is_fatal() {
    SyntaxListBuilder::new().ensure_additional_capacity(MAX_LIST_CAPACITY + 1);
}
