//! Green syntax node storage for the verdant front end.
//!
//! This crate stores, deduplicates, builds and walks node collections:
//! - The node contract (`GreenNode`, `RawKind`, `NodeFlags`)
//! - List nodes in fixed-arity and array forms (`make_list`, `concat`)
//! - The node cache that interns small, well-formed nodes (`NodeCache`)
//! - Pooled list builders (`SyntaxListBuilder`, `SyntaxListPool`)
//! - List views (`SyntaxListView`, `SeparatedListView`)
//! - Flattening child enumerators and the diagnostic walk
//!
//! It does not parse text and does not decide which nodes to build.

// Node kinds and flag bits
pub mod flags;
pub mod kind;
pub use flags::NodeFlags;
pub use kind::RawKind;

// Green nodes: tokens, trivia, interior nodes
pub mod green;
pub use green::{GreenNode, GreenNodeData, make_node, make_node_in};

// List nodes
pub mod list;
pub use list::{
    ListVariant, concat, concat_in, list2, list2_in, list3, list3_in, list5, make_list,
    make_list_in,
};

// Node interning
pub mod cache;
pub use cache::{CacheLookup, CacheStats, NodeCache};

// Builders and the builder pool
pub mod builder;
pub mod pool;
pub use builder::SyntaxListBuilder;
pub use pool::{PooledBuilder, SyntaxListPool};

// Read-only list views and the separated-list builder
pub mod separated;
pub use separated::{SeparatedListBuilder, SeparatedListView, SyntaxListView};

// Tree walks
pub mod children;
pub mod diagnostics;
pub use children::{Children, ChildrenRev};
pub use diagnostics::Diagnostics;
