//! Flattening child enumerators.
//!
//! Both enumerators walk a node's direct slots, skip absent slots, and expand
//! a list-valued slot into that list's children in place. They hold only
//! indices, so copying one yields an independent cursor.

use crate::green::GreenNode;
use std::iter::FusedIterator;

/// Forward enumerator over a node's flattened children.
#[derive(Clone, Copy, Debug)]
pub struct Children<'a> {
    node: &'a GreenNode,
    slot_index: usize,
    /// The list slot being expanded and the next index inside it.
    list: Option<(&'a GreenNode, usize)>,
}

impl<'a> Children<'a> {
    pub fn new(node: &'a GreenNode) -> Children<'a> {
        Children {
            node,
            slot_index: 0,
            list: None,
        }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a GreenNode;

    fn next(&mut self) -> Option<&'a GreenNode> {
        loop {
            if let Some((list, index)) = self.list {
                if let Some(child) = list.slot(index) {
                    self.list = Some((list, index + 1));
                    return Some(child);
                }
                self.list = None;
            }

            let slot_count = self.node.slot_count();
            while self.slot_index < slot_count {
                let index = self.slot_index;
                self.slot_index += 1;
                let Some(child) = self.node.slot(index) else {
                    continue;
                };
                if child.is_list() {
                    self.list = Some((child, 0));
                    break;
                }
                return Some(child);
            }

            self.list.as_ref()?;
        }
    }
}

impl FusedIterator for Children<'_> {}

/// Reverse enumerator over a node's flattened children.
#[derive(Clone, Copy, Debug)]
pub struct ChildrenRev<'a> {
    node: &'a GreenNode,
    /// Number of direct slots not yet visited.
    slot_index: usize,
    /// The list slot being expanded and the number of its children not yet
    /// yielded.
    list: Option<(&'a GreenNode, usize)>,
}

impl<'a> ChildrenRev<'a> {
    pub fn new(node: &'a GreenNode) -> ChildrenRev<'a> {
        ChildrenRev {
            node,
            slot_index: node.slot_count(),
            list: None,
        }
    }
}

impl<'a> Iterator for ChildrenRev<'a> {
    type Item = &'a GreenNode;

    fn next(&mut self) -> Option<&'a GreenNode> {
        loop {
            if let Some((list, remaining)) = self.list {
                if remaining > 0 {
                    self.list = Some((list, remaining - 1));
                    if let Some(child) = list.slot(remaining - 1) {
                        return Some(child);
                    }
                    continue;
                }
                self.list = None;
            }

            while self.slot_index > 0 {
                self.slot_index -= 1;
                let Some(child) = self.node.slot(self.slot_index) else {
                    continue;
                };
                if child.is_list() {
                    self.list = Some((child, child.slot_count()));
                    break;
                }
                return Some(child);
            }

            self.list.as_ref()?;
        }
    }
}

impl FusedIterator for ChildrenRev<'_> {}

#[cfg(test)]
#[path = "../tests/children_tests.rs"]
mod tests;
