//! Reuse pool for list builders.
//!
//! Parsing allocates a builder per list-shaped construct; the pool keeps
//! cleared builders around so their buffers are reused across construction
//! episodes. The pool is single-threaded (`!Sync`): each parser owns one.
//!
//! [`SyntaxListPool::allocate`] returns a guard that hands the builder back
//! when dropped. [`SyntaxListPool::take`] / [`SyntaxListPool::free`] are the
//! manual pair; in debug builds the pool tracks outstanding loans and panics
//! when a builder it never lent (or already got back) is freed.

use crate::builder::SyntaxListBuilder;
use crate::separated::SeparatedListBuilder;
use std::cell::RefCell;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;
use verdant_common::limits::DEFAULT_BUILDER_CAPACITY;

#[cfg(debug_assertions)]
use rustc_hash::FxHashSet;

static NEXT_LEASE: AtomicU64 = AtomicU64::new(1);

#[derive(Default)]
pub struct SyntaxListPool {
    free: RefCell<Vec<SyntaxListBuilder>>,
    #[cfg(debug_assertions)]
    outstanding: RefCell<FxHashSet<u64>>,
}

impl SyntaxListPool {
    pub fn new() -> SyntaxListPool {
        SyntaxListPool::default()
    }

    /// Borrow a cleared builder; it returns to the pool when the guard drops.
    pub fn allocate(&self) -> PooledBuilder<'_> {
        PooledBuilder {
            pool: self,
            builder: self.take(),
        }
    }

    /// Borrow a cleared builder wrapped to enforce separated-list shape.
    pub fn allocate_separated(&self) -> SeparatedListBuilder<'_> {
        SeparatedListBuilder::new(self.allocate())
    }

    /// Take a builder out of the pool. It must be handed back with
    /// [`free`](Self::free).
    pub fn take(&self) -> SyntaxListBuilder {
        let mut builder = match self.free.borrow_mut().pop() {
            Some(builder) => builder,
            None => {
                debug!(
                    capacity = DEFAULT_BUILDER_CAPACITY,
                    "list pool empty, creating builder"
                );
                SyntaxListBuilder::with_capacity(DEFAULT_BUILDER_CAPACITY)
            }
        };
        debug_assert!(builder.is_empty(), "pooled builder was not cleared");

        let lease = NEXT_LEASE.fetch_add(1, Ordering::Relaxed);
        builder.lease = Some(lease);
        #[cfg(debug_assertions)]
        {
            let fresh = self.outstanding.borrow_mut().insert(lease);
            debug_assert!(fresh, "builder lease {lease} handed out twice");
        }
        builder
    }

    /// Clear `builder` and return it to the pool.
    pub fn free(&self, mut builder: SyntaxListBuilder) {
        let lease = builder.lease.take();
        #[cfg(debug_assertions)]
        {
            let known = lease.is_some_and(|lease| self.outstanding.borrow_mut().remove(&lease));
            assert!(
                known,
                "builder freed to a pool that did not lend it, or freed twice"
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = lease;

        builder.clear();
        self.free.borrow_mut().push(builder);
    }

    /// Number of idle builders in the pool.
    pub fn free_count(&self) -> usize {
        self.free.borrow().len()
    }

    /// Number of builders currently on loan (debug builds only).
    #[cfg(debug_assertions)]
    pub fn outstanding_count(&self) -> usize {
        self.outstanding.borrow().len()
    }
}

/// A builder on loan from a [`SyntaxListPool`].
pub struct PooledBuilder<'p> {
    pool: &'p SyntaxListPool,
    builder: SyntaxListBuilder,
}

impl PooledBuilder<'_> {
    /// The pool this builder returns to.
    pub fn pool(&self) -> &SyntaxListPool {
        self.pool
    }
}

impl Deref for PooledBuilder<'_> {
    type Target = SyntaxListBuilder;

    fn deref(&self) -> &SyntaxListBuilder {
        &self.builder
    }
}

impl DerefMut for PooledBuilder<'_> {
    fn deref_mut(&mut self) -> &mut SyntaxListBuilder {
        &mut self.builder
    }
}

impl Drop for PooledBuilder<'_> {
    fn drop(&mut self) {
        let builder = std::mem::take(&mut self.builder);
        self.pool.free(builder);
    }
}

#[cfg(test)]
#[path = "../tests/pool_tests.rs"]
mod tests;
