//! Common types and utilities for the verdant syntax crates.
//!
//! This crate provides the leaf types every other verdant crate builds on:
//! - Diagnostics attached to syntax nodes (`DiagnosticInfo`, `DiagnosticSeverity`)
//! - Syntax annotations (`SyntaxAnnotation`)
//! - Centralized limits and thresholds for node storage

// Diagnostics carried by green nodes
pub mod diagnostics;
pub use diagnostics::{DiagnosticInfo, DiagnosticSeverity, format_message};

// Annotations carried by green nodes
pub mod annotations;
pub use annotations::SyntaxAnnotation;

// Centralized limits and thresholds
pub mod limits;
