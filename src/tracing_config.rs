//! Tracing configuration for inspecting node construction.
//!
//! Supports three output formats controlled by `VERDANT_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Cache hits and stores, builder growth
//! VERDANT_LOG=verdant_syntax=trace VERDANT_LOG_FORMAT=tree my-front-end file.src
//!
//! # Pool allocations only
//! VERDANT_LOG=verdant_syntax::pool=debug my-front-end file.src
//!
//! # JSON for tooling
//! VERDANT_LOG=trace VERDANT_LOG_FORMAT=json my-front-end file.src
//! ```
//!
//! The subscriber is only initialised when `VERDANT_LOG` (or `RUST_LOG`) is
//! set, so there is zero overhead in normal builds.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "VERDANT_LOG";

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "VERDANT_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name; anything unrecognised is `Text`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `VERDANT_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var(LOG_ENV) {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `VERDANT_LOG` nor `RUST_LOG` is set. Calling it
/// again after a subscriber is installed is a no-op.
///
/// All output goes to stderr.
pub fn init_tracing() {
    let has_verdant_log = std::env::var(LOG_ENV).is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_verdant_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    let format = LogFormat::from_env();

    // A subscriber may already be installed by the host.
    let installed = match format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
    if installed.is_ok() {
        tracing::debug!(?format, "tracing initialised");
    }
}
