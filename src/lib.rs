//! Verdant: immutable, structurally shared syntax node storage.
//!
//! This crate ties the workspace together:
//! - `verdant_common`: diagnostics, annotations and limits
//! - `verdant_syntax`: green nodes, lists, the node cache, builders and walks
//! - `tracing_config`: environment-driven logging setup
//!
//! A front end typically keeps one `SyntaxListPool` per parser, builds lists
//! through pooled builders, and lets the process-wide `NodeCache` share
//! repeated small shapes.

pub use verdant_common as common;
pub use verdant_syntax as syntax;

pub use verdant_common::{DiagnosticInfo, DiagnosticSeverity, SyntaxAnnotation};
pub use verdant_syntax::{
    Children, ChildrenRev, Diagnostics, GreenNode, ListVariant, NodeCache, NodeFlags, RawKind,
    SeparatedListBuilder, SeparatedListView, SyntaxListBuilder, SyntaxListPool, SyntaxListView,
    concat, make_list, make_node,
};

// Tracing configuration (VERDANT_LOG / VERDANT_LOG_FORMAT)
pub mod tracing_config;

// Shared test fixtures
#[cfg(test)]
mod test_fixtures;

#[cfg(test)]
#[path = "tests/front_end_tests.rs"]
mod front_end_tests;
