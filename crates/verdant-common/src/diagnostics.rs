//! Diagnostic payloads attached to syntax nodes.
//!
//! A `DiagnosticInfo` is positioned relative to the node that carries it:
//! `offset` is measured from the start of that node's full span, so the same
//! diagnostic stays valid when the node is reused at another position.

use serde::Serialize;

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DiagnosticSeverity {
    Hidden = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

/// A diagnostic attached to a green node, token or trivia.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DiagnosticInfo {
    pub code: u32,
    pub severity: DiagnosticSeverity,
    pub message_text: String,
    /// Offset from the start of the owning node's full span.
    pub offset: u32,
    pub width: u32,
}

impl DiagnosticInfo {
    /// Create a new error diagnostic covering the whole owning node.
    #[must_use]
    pub fn error(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: DiagnosticSeverity::Error,
            message_text: message.into(),
            offset: 0,
            width: 0,
        }
    }

    /// Create a new warning diagnostic covering the whole owning node.
    #[must_use]
    pub fn warning(code: u32, message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            ..Self::error(code, message)
        }
    }

    /// Create a diagnostic from a message template with `{0}`, `{1}`, ... placeholders.
    #[must_use]
    pub fn from_template(
        code: u32,
        severity: DiagnosticSeverity,
        template: &str,
        args: &[&str],
    ) -> Self {
        Self {
            code,
            severity,
            message_text: format_message(template, args),
            offset: 0,
            width: 0,
        }
    }

    /// Narrow the diagnostic to a sub-span of the owning node.
    #[must_use]
    pub fn with_span(mut self, offset: u32, width: u32) -> Self {
        self.offset = offset;
        self.width = width;
        self
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

/// Substitute `{i}` placeholders in `message` with `args[i]`.
pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
#[path = "../tests/diagnostics.rs"]
mod tests;
