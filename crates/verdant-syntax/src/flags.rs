//! Per-node flag bits.

use bitflags::bitflags;

bitflags! {
    /// Flags stored on every green node.
    ///
    /// The `CONTAINS_*` bits and `IS_NOT_MISSING` are inherited: a parent ORs
    /// in `child.flags() & INHERIT_MASK` for every child it adopts, so a set
    /// bit on the root means "somewhere in this subtree".
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u16 {
        const IS_NOT_MISSING = 1 << 0;
        const CONTAINS_DIAGNOSTICS = 1 << 1;
        const CONTAINS_ANNOTATIONS = 1 << 2;
        const CONTAINS_SKIPPED_TEXT = 1 << 3;

        // Factory context: the parser state a node was created in. Not
        // inherited, but part of a node's cache identity.
        const FACTORY_CONTEXT_IS_IN_ASYNC = 1 << 8;
        const FACTORY_CONTEXT_IS_IN_QUERY = 1 << 9;

        const INHERIT_MASK = Self::IS_NOT_MISSING.bits()
            | Self::CONTAINS_DIAGNOSTICS.bits()
            | Self::CONTAINS_ANNOTATIONS.bits()
            | Self::CONTAINS_SKIPPED_TEXT.bits();

        const FACTORY_CONTEXT_MASK = Self::FACTORY_CONTEXT_IS_IN_ASYNC.bits()
            | Self::FACTORY_CONTEXT_IS_IN_QUERY.bits();
    }
}

impl NodeFlags {
    /// The flags a freshly built, well-formed node without diagnostics or
    /// annotations carries.
    #[inline]
    pub const fn default_node_flags() -> NodeFlags {
        NodeFlags::IS_NOT_MISSING
    }

    /// The bits a parent adopts from `self`.
    #[inline]
    pub fn inherited(self) -> NodeFlags {
        self & NodeFlags::INHERIT_MASK
    }
}
