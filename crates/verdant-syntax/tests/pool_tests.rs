use super::*;
use crate::green::GreenNode;
use crate::kind::RawKind;

const IDENT: RawKind = RawKind(10);

fn ident(text: &str) -> GreenNode {
    GreenNode::token(IDENT, text)
}

#[test]
fn allocate_after_free_returns_an_empty_builder() {
    let pool = SyntaxListPool::new();
    {
        let mut builder = pool.allocate();
        builder.add(&ident("a"));
        builder.add(&ident("b"));
        assert_eq!(builder.len(), 2);
    }
    assert_eq!(pool.free_count(), 1);

    let builder = pool.allocate();
    assert_eq!(builder.len(), 0);
    assert!(builder.get(0).is_none());
    assert!(builder.capacity() >= 2);
    assert_eq!(pool.free_count(), 0);
}

#[test]
fn freed_buffers_are_reused() {
    let pool = SyntaxListPool::new();
    let mut builder = pool.take();
    for i in 0..40 {
        builder.add(&ident(&i.to_string()));
    }
    let grown = builder.capacity();
    pool.free(builder);

    let reused = pool.take();
    assert!(reused.is_empty());
    assert_eq!(reused.capacity(), grown);
    pool.free(reused);
}

#[test]
fn empty_pool_creates_default_capacity_builders() {
    let pool = SyntaxListPool::new();
    let first = pool.allocate();
    let second = pool.allocate();
    assert!(first.capacity() >= DEFAULT_BUILDER_CAPACITY);
    assert!(second.capacity() >= DEFAULT_BUILDER_CAPACITY);
    drop(first);
    drop(second);
    assert_eq!(pool.free_count(), 2);
}

#[test]
fn guard_freezes_through_deref() {
    let pool = SyntaxListPool::new();
    let a = ident("a");
    let mut builder = pool.allocate();
    builder.add(&a);
    assert!(builder.to_list_node().expect("child").ptr_eq(&a));
    assert!(std::ptr::eq(builder.pool(), &pool));
}

#[test]
fn separated_builders_come_from_the_pool() {
    let pool = SyntaxListPool::new();
    {
        let separated = pool.allocate_separated();
        assert!(separated.is_empty());
    }
    assert_eq!(pool.free_count(), 1);
}

#[cfg(debug_assertions)]
#[test]
fn leases_are_tracked_until_freed() {
    let pool = SyntaxListPool::new();
    let taken = pool.take();
    let guard = pool.allocate();
    assert_eq!(pool.outstanding_count(), 2);

    pool.free(taken);
    drop(guard);
    assert_eq!(pool.outstanding_count(), 0);
    assert_eq!(pool.free_count(), 2);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "did not lend it")]
fn freeing_a_foreign_builder_panics() {
    let pool = SyntaxListPool::new();
    let other = SyntaxListPool::new();
    let builder = other.take();
    pool.free(builder);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "did not lend it")]
fn freeing_an_unpooled_builder_panics() {
    let pool = SyntaxListPool::new();
    pool.free(SyntaxListBuilder::new());
}
