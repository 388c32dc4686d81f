//! Raw node kinds.
//!
//! Kinds are plain `u16` tags chosen by the language front end. Two values are
//! reserved by this crate: `RawKind::NONE` and `RawKind::LIST`.

use std::fmt;

/// Type tag of a green node, token or trivia.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RawKind(pub u16);

impl RawKind {
    /// No kind. Never carried by a constructed node.
    pub const NONE: RawKind = RawKind(0);

    /// The reserved kind of every list node.
    pub const LIST: RawKind = RawKind(1);

    /// First kind value available to language front ends.
    pub const FIRST_USER_KIND: u16 = 2;

    #[inline]
    pub const fn is_list(self) -> bool {
        self.0 == Self::LIST.0
    }

    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl From<u16> for RawKind {
    #[inline]
    fn from(raw: u16) -> Self {
        RawKind(raw)
    }
}

impl fmt::Debug for RawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NONE => f.write_str("None"),
            Self::LIST => f.write_str("List"),
            RawKind(raw) => write!(f, "Kind({raw})"),
        }
    }
}
