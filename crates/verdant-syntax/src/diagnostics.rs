//! Lazy, pruned walk over every diagnostic in a subtree.
//!
//! The walk keeps an explicit stack of frames instead of recursing, so tree
//! depth never grows the native stack. Subtrees whose `CONTAINS_DIAGNOSTICS`
//! flag is clear are never entered.
//!
//! Diagnostics come out in source order: for a token, those on its leading
//! trivia, then its own, then those on its trailing trivia; for any other
//! node, its own diagnostics before those of its children in slot order.

use crate::green::GreenNode;
use smallvec::SmallVec;
use std::iter::FusedIterator;
use verdant_common::DiagnosticInfo;

#[derive(Clone, Copy, Debug)]
struct Frame<'a> {
    node: &'a GreenNode,
    diagnostic_index: usize,
    slot_index: usize,
}

#[derive(Clone, Debug)]
pub struct Diagnostics<'a> {
    stack: SmallVec<[Frame<'a>; 8]>,
}

impl<'a> Diagnostics<'a> {
    pub fn new(root: &'a GreenNode) -> Diagnostics<'a> {
        let mut diagnostics = Diagnostics {
            stack: SmallVec::new(),
        };
        if root.contains_diagnostics() {
            diagnostics.push_node_or_token(root);
        }
        diagnostics
    }

    fn push_node_or_token(&mut self, node: &'a GreenNode) {
        if node.is_token() {
            self.push_token(node);
        } else {
            self.push(node);
        }
    }

    /// LIFO: trailing trivia goes in first so that leading trivia comes out
    /// first.
    fn push_token(&mut self, token: &'a GreenNode) {
        if let Some(trailing) = token.trailing_trivia() {
            self.push(trailing);
        }
        self.push(token);
        if let Some(leading) = token.leading_trivia() {
            self.push(leading);
        }
    }

    fn push(&mut self, node: &'a GreenNode) {
        if node.contains_diagnostics() {
            self.stack.push(Frame {
                node,
                diagnostic_index: 0,
                slot_index: 0,
            });
        }
    }
}

impl<'a> Iterator for Diagnostics<'a> {
    type Item = &'a DiagnosticInfo;

    fn next(&mut self) -> Option<&'a DiagnosticInfo> {
        while let Some(frame) = self.stack.last_mut() {
            let node = frame.node;

            if let Some(diagnostic) = node.diagnostics().get(frame.diagnostic_index) {
                frame.diagnostic_index += 1;
                return Some(diagnostic);
            }

            let slot_count = node.slot_count();
            let mut next_child = None;
            while frame.slot_index < slot_count {
                let index = frame.slot_index;
                frame.slot_index += 1;
                if let Some(child) = node.slot(index)
                    && child.contains_diagnostics()
                {
                    next_child = Some(child);
                    break;
                }
            }

            match next_child {
                Some(child) => self.push_node_or_token(child),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl FusedIterator for Diagnostics<'_> {}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
