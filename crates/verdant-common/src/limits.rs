//! Centralized limits and thresholds for green node storage.
//!
//! These values shape allocation and sharing behavior of the syntax crates.
//! Downstream code may rely on the resulting sharing (which nodes come back
//! as the same instance), so treat changes here as behavior changes, not
//! tuning.

// =============================================================================
// Node cache
// =============================================================================

/// Number of index bits of the process-wide node cache.
///
/// The cache holds `1 << NODE_CACHE_SIZE_BITS` slots.
pub const NODE_CACHE_SIZE_BITS: u32 = 16;

/// Largest slot count a node may have and still be interned.
///
/// Nodes with more slots are never looked up in or stored into the cache.
pub const MAX_CACHED_CHILD_COUNT: usize = 3;

// =============================================================================
// List node representation
// =============================================================================

/// Child count at which a list node precomputes child offsets.
///
/// Lists with fewer children locate a slot by a linear width scan; lists
/// with at least this many children binary-search a cumulative offset array.
pub const LOTS_OF_CHILDREN_THRESHOLD: usize = 10;

// =============================================================================
// List builders
// =============================================================================

/// Capacity of a builder created by the pool when its free list is empty.
pub const DEFAULT_BUILDER_CAPACITY: usize = 10;

/// Smallest capacity a builder grows to.
pub const MIN_BUILDER_CAPACITY: usize = 8;

/// Upper bound on the number of children a single list may hold.
///
/// Growth requests beyond this are an unrecoverable resource error.
pub const MAX_LIST_CAPACITY: usize = 0x7FFF_FFC7;
