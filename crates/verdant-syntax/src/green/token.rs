//! Token and trivia constructors.
//!
//! Tokens are leaves with optional leading and trailing trivia. They are
//! never interned by the node cache: the scanner is expected to hand out
//! shared token instances itself, and the cache treats every token as
//! already canonical.

use super::{GreenNode, GreenNodeData, NodeBody, TokenBody};
use crate::flags::NodeFlags;
use crate::kind::RawKind;

impl GreenNode {
    /// A token without trivia.
    pub fn token(kind: RawKind, text: &str) -> GreenNode {
        GreenNode::token_with_trivia(kind, text, None, None)
    }

    /// A token with optional leading and trailing trivia.
    ///
    /// Trivia may be a single trivia node or a list of trivia.
    pub fn token_with_trivia(
        kind: RawKind,
        text: &str,
        leading: Option<GreenNode>,
        trailing: Option<GreenNode>,
    ) -> GreenNode {
        debug_assert!(!kind.is_list(), "a token cannot carry the list kind");
        GreenNode::make_token(kind, text, leading, trailing, NodeFlags::IS_NOT_MISSING)
    }

    /// A zero-width token standing in for one the parser expected but did
    /// not find.
    pub fn missing_token(kind: RawKind) -> GreenNode {
        GreenNode::make_token(kind, "", None, None, NodeFlags::empty())
    }

    /// A missing token that still owns trivia (e.g. skipped text).
    pub fn missing_token_with_trivia(
        kind: RawKind,
        leading: Option<GreenNode>,
        trailing: Option<GreenNode>,
    ) -> GreenNode {
        GreenNode::make_token(kind, "", leading, trailing, NodeFlags::empty())
    }

    fn make_token(
        kind: RawKind,
        text: &str,
        leading: Option<GreenNode>,
        trailing: Option<GreenNode>,
        own: NodeFlags,
    ) -> GreenNode {
        let full_width = leading.as_ref().map_or(0, GreenNode::full_width)
            + text_width(text.len())
            + trailing.as_ref().map_or(0, GreenNode::full_width);
        let body = NodeBody::Token(TokenBody {
            text: text.into(),
            leading,
            trailing,
        });
        // Trivia never makes a token "present"; only its own flag does.
        let flags = own | (body.inherited_flags() - NodeFlags::IS_NOT_MISSING);

        GreenNode::from_data(GreenNodeData {
            kind,
            flags,
            full_width,
            extras: None,
            body,
        })
    }

    /// A trivia node (whitespace, comment, end of line, ...).
    pub fn trivia(kind: RawKind, text: &str) -> GreenNode {
        GreenNode::make_trivia(kind, text, NodeFlags::IS_NOT_MISSING)
    }

    /// Trivia holding source text the parser skipped over.
    pub fn skipped_text_trivia(kind: RawKind, text: &str) -> GreenNode {
        GreenNode::make_trivia(
            kind,
            text,
            NodeFlags::IS_NOT_MISSING | NodeFlags::CONTAINS_SKIPPED_TEXT,
        )
    }

    fn make_trivia(kind: RawKind, text: &str, flags: NodeFlags) -> GreenNode {
        debug_assert!(!kind.is_list(), "trivia cannot carry the list kind");
        GreenNode::from_data(GreenNodeData {
            kind,
            flags,
            full_width: text_width(text.len()),
            extras: None,
            body: NodeBody::Trivia(text.into()),
        })
    }
}

/// Width of a token or trivia text of `len` bytes.
///
/// # Panics
///
/// Panics if `len` exceeds `u32::MAX`, the widest span a node can record.
pub(super) fn text_width(len: usize) -> u32 {
    match u32::try_from(len) {
        Ok(width) => width,
        Err(_) => panic!(
            "text of {len} bytes exceeds the maximum node width of {} bytes",
            u32::MAX
        ),
    }
}
