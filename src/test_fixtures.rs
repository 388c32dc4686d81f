//! Shared test fixtures.
//!
//! A tiny token vocabulary for building trees the way a front end would.
//! Tokens are created once and shared, since the node cache treats every
//! token as canonical and only shares parents of identical token instances.

use once_cell::sync::Lazy;
use verdant_common::DiagnosticInfo;
use verdant_syntax::{GreenNode, NodeCache, NodeFlags, RawKind, make_node_in};

pub const WHITESPACE: RawKind = RawKind(2);
pub const IDENT: RawKind = RawKind(10);
pub const COMMA: RawKind = RawKind(11);
pub const OPEN_PAREN: RawKind = RawKind(12);
pub const CLOSE_PAREN: RawKind = RawKind(13);
pub const ARGUMENT: RawKind = RawKind(30);
pub const ARGUMENT_LIST: RawKind = RawKind(31);
pub const CALL: RawKind = RawKind(32);

pub static SPACE: Lazy<GreenNode> = Lazy::new(|| GreenNode::trivia(WHITESPACE, " "));

/// `,` followed by a space.
pub static COMMA_TOKEN: Lazy<GreenNode> =
    Lazy::new(|| GreenNode::token_with_trivia(COMMA, ",", None, Some(SPACE.clone())));

pub static OPEN_PAREN_TOKEN: Lazy<GreenNode> = Lazy::new(|| GreenNode::token(OPEN_PAREN, "("));

pub static CLOSE_PAREN_TOKEN: Lazy<GreenNode> = Lazy::new(|| GreenNode::token(CLOSE_PAREN, ")"));

pub fn ident(text: &str) -> GreenNode {
    GreenNode::token(IDENT, text)
}

pub fn argument(cache: &NodeCache, name: &GreenNode) -> GreenNode {
    make_node_in(cache, ARGUMENT, NodeFlags::empty(), vec![Some(name.clone())])
}

/// A diagnostic for a token the parser expected but did not find.
pub fn expected(text: &str) -> DiagnosticInfo {
    DiagnosticInfo::from_template(
        1005,
        verdant_common::DiagnosticSeverity::Error,
        "'{0}' expected.",
        &[text],
    )
}
