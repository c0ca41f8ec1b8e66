//! Tree traversal

use std::iter::FusedIterator;

use crate::arena::{Arena, NodeId};
use crate::node::{Node, NodeRef};

/// Pre-order walk over the descendants of a node (the node itself excluded)
///
/// Walks parent and sibling links directly, so it holds no stack and each
/// step is O(depth) at worst.
#[derive(Clone)]
pub struct Descendants<'a> {
    arena: &'a Arena,
    start: NodeId,
    next: Option<NodeId>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(start: NodeRef<'a>) -> Self {
        Self {
            arena: start.arena,
            start: start.id,
            next: start.arena.children_of(start.id).first().copied(),
        }
    }

    fn advance(&self, from: NodeId) -> Option<NodeId> {
        if let Some(&first) = self.arena.children_of(from).first() {
            return Some(first);
        }
        let mut current = from;
        while current != self.start {
            let raw = self.arena.raw(current);
            let parent = raw.parent?;
            if let Some(&sibling) = self.arena.children_of(parent).get(raw.index as usize + 1) {
                return Some(sibling);
            }
            current = parent;
        }
        None
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.advance(current);
        Some(Node::from_id(self.arena, current))
    }
}

impl FusedIterator for Descendants<'_> {}
