//! Node cache: interning of small, well-formed interior and list nodes.
//!
//! The cache is a fixed power-of-two table of atomically swappable slots
//! indexed by `hash(kind, flags, children-by-identity)`. There is no
//! chaining: a store simply replaces whatever occupied the slot. Every hit is
//! validated structurally (kind, flags, slot count, each child by identity)
//! before it is returned, so a stale or racing slot is only ever a miss.
//!
//! Interning is bottom-up: a node is stored only if each of its children is
//! a token, trivia, absent, or itself the current occupant of its own cache
//! slot. Cache entries therefore never point at non-canonical children.
//!
//! Absence from the cache is always equivalent to a hit, only slower.

use crate::flags::NodeFlags;
use crate::green::{GreenNode, GreenNodeData};
use crate::kind::RawKind;
use arc_swap::ArcSwapOption;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::trace;
use verdant_common::limits::{MAX_CACHED_CHILD_COUNT, NODE_CACHE_SIZE_BITS};

static GLOBAL_CACHE: OnceLock<NodeCache> = OnceLock::new();

/// Multiplier of the order-sensitive hash combine.
const HASH_COMBINE_FACTOR: u32 = 0xA555_5529;

/// Result of a cache lookup.
#[derive(Debug)]
pub enum CacheLookup {
    /// An equivalent node is cached.
    Hit(GreenNode),
    /// Not cached; a node built from the same inputs may be stored under `hash`.
    Miss { hash: u32 },
    /// The inputs are not eligible for interning.
    Uncacheable,
}

pub struct NodeCache {
    slots: Box<[ArcSwapOption<GreenNodeData>]>,
    mask: u32,
    counters: CacheCounters,
}

#[derive(Default)]
struct CacheCounters {
    lookups: AtomicU64,
    cacheable_lookups: AtomicU64,
    hits: AtomicU64,
    stores: AtomicU64,
}

/// Snapshot of a cache's counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub lookups: u64,
    pub cacheable_lookups: u64,
    pub hits: u64,
    pub stores: u64,
}

impl NodeCache {
    /// A private cache of the default size.
    pub fn new() -> NodeCache {
        NodeCache::with_size_bits(NODE_CACHE_SIZE_BITS)
    }

    /// A private cache with `1 << bits` slots.
    pub fn with_size_bits(bits: u32) -> NodeCache {
        assert!(
            (1..=24).contains(&bits),
            "node cache size bits must be in 1..=24, got {bits}"
        );
        let size = 1usize << bits;
        let slots = (0..size).map(|_| ArcSwapOption::empty()).collect();
        NodeCache {
            slots,
            mask: (size - 1) as u32,
            counters: CacheCounters::default(),
        }
    }

    /// The process-wide cache used by the non-`_in` constructors.
    pub fn global() -> &'static NodeCache {
        GLOBAL_CACHE.get_or_init(NodeCache::new)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Look up a node of `kind` and `flags` whose slots are exactly
    /// `children` (compared by identity).
    pub fn try_get(
        &self,
        kind: RawKind,
        flags: NodeFlags,
        children: &[Option<&GreenNode>],
    ) -> CacheLookup {
        self.counters.lookups.fetch_add(1, Ordering::Relaxed);

        if children.len() > MAX_CACHED_CHILD_COUNT
            || !children.iter().flatten().all(|child| child.is_cacheable())
        {
            return CacheLookup::Uncacheable;
        }
        self.counters
            .cacheable_lookups
            .fetch_add(1, Ordering::Relaxed);

        let hash = cache_hash(kind, flags, children.iter().copied());
        let current = self.slot(hash).load_full();
        if let Some(data) = current
            && is_cache_equivalent(&data, kind, flags, children)
        {
            self.counters.hits.fetch_add(1, Ordering::Relaxed);
            trace!(kind = kind.as_u16(), hash, "node cache hit");
            return CacheLookup::Hit(GreenNode(data));
        }

        CacheLookup::Miss { hash }
    }

    /// Offer `node` to the cache under `hash` (from a preceding
    /// [`try_get`](Self::try_get) miss). Ignored unless the node is
    /// cacheable, not missing, and every child is already canonical.
    pub fn add(&self, node: &GreenNode, hash: u32) {
        if !node.is_cacheable() || node.is_missing() || !self.all_children_in_cache(node) {
            return;
        }
        debug_assert_eq!(
            hash,
            node_cache_hash(node),
            "hash does not belong to the node being cached"
        );

        self.slot(hash).store(Some(Arc::clone(&node.0)));
        self.counters.stores.fetch_add(1, Ordering::Relaxed);
        trace!(kind = node.kind().as_u16(), hash, "node cache store");
    }

    /// Whether `node` is the current occupant of its own cache slot.
    pub fn contains(&self, node: &GreenNode) -> bool {
        let guard = self.slot(node_cache_hash(node)).load();
        match &*guard {
            Some(data) => Arc::ptr_eq(data, &node.0),
            None => false,
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            lookups: self.counters.lookups.load(Ordering::Relaxed),
            cacheable_lookups: self.counters.cacheable_lookups.load(Ordering::Relaxed),
            hits: self.counters.hits.load(Ordering::Relaxed),
            stores: self.counters.stores.load(Ordering::Relaxed),
        }
    }

    fn all_children_in_cache(&self, node: &GreenNode) -> bool {
        (0..node.slot_count())
            .filter_map(|i| node.slot(i))
            .all(|child| self.child_in_cache(child))
    }

    /// Tokens and trivia (no slots) are assumed to be deduplicated upstream.
    fn child_in_cache(&self, child: &GreenNode) -> bool {
        child.slot_count() == 0 || self.contains(child)
    }

    #[inline]
    fn slot(&self, hash: u32) -> &ArcSwapOption<GreenNodeData> {
        &self.slots[(hash & self.mask) as usize]
    }
}

impl Default for NodeCache {
    fn default() -> Self {
        NodeCache::new()
    }
}

/// `kind ^ flags`, combined with each present child's identity hash, masked
/// to 31 bits.
fn cache_hash<'a>(
    kind: RawKind,
    flags: NodeFlags,
    children: impl Iterator<Item = Option<&'a GreenNode>>,
) -> u32 {
    let mut code = u32::from(kind.as_u16()) ^ u32::from(flags.bits());
    for child in children.flatten() {
        code = combine(child.identity_hash(), code);
    }
    code & 0x7FFF_FFFF
}

fn node_cache_hash(node: &GreenNode) -> u32 {
    cache_hash(
        node.kind(),
        node.flags(),
        (0..node.slot_count()).map(|i| node.slot(i)),
    )
}

#[inline]
fn combine(new_key: u32, current_key: u32) -> u32 {
    current_key
        .wrapping_mul(HASH_COMBINE_FACTOR)
        .wrapping_add(new_key)
}

fn is_cache_equivalent(
    data: &GreenNodeData,
    kind: RawKind,
    flags: NodeFlags,
    children: &[Option<&GreenNode>],
) -> bool {
    if data.kind != kind || data.flags != flags || data.body.slot_count() != children.len() {
        return false;
    }
    children
        .iter()
        .enumerate()
        .all(|(i, expected)| match (data.body.slot(i), expected) {
            (Some(actual), Some(expected)) => actual.ptr_eq(expected),
            (None, None) => true,
            _ => false,
        })
}

#[cfg(test)]
#[path = "../tests/cache_tests.rs"]
mod tests;
