//! Syntax annotations.
//!
//! An annotation is an opaque marker attached to a node without changing its
//! text. Two annotations are the same annotation only if they share an id;
//! ids are allocated from a process-wide counter.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ANNOTATION_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, Serialize)]
pub struct SyntaxAnnotation {
    id: u64,
    kind: Option<Arc<str>>,
    data: Option<Arc<str>>,
}

impl SyntaxAnnotation {
    /// Create a fresh annotation with no kind or data.
    pub fn new() -> Self {
        Self {
            id: NEXT_ANNOTATION_ID.fetch_add(1, Ordering::Relaxed),
            kind: None,
            data: None,
        }
    }

    /// Create a fresh annotation with a kind and optional payload.
    pub fn with_kind(kind: impl Into<Arc<str>>, data: Option<&str>) -> Self {
        Self {
            kind: Some(kind.into()),
            data: data.map(Arc::from),
            ..Self::new()
        }
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl PartialEq for SyntaxAnnotation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SyntaxAnnotation {}

impl std::hash::Hash for SyntaxAnnotation {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
#[path = "../tests/annotations.rs"]
mod tests;
