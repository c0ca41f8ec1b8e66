//! Child sequences

use std::fmt;
use std::iter::FusedIterator;

use crate::arena::{Arena, NodeId};
use crate::error::{DomError, Result};
use crate::node::Node;

/// Ordered children of a document or element
///
/// A cheap `Copy` handle: every call to [`Children::iter`] starts a fresh
/// pass, so the sequence can be walked any number of times.
#[derive(Clone, Copy)]
pub struct Children<'a> {
    arena: &'a Arena,
    ids: &'a [NodeId],
}

impl<'a> Children<'a> {
    pub(crate) fn new(arena: &'a Arena, ids: &'a [NodeId]) -> Self {
        Self { arena, ids }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Child at position `index`
    pub fn get(&self, index: usize) -> Result<Node<'a>> {
        self.ids
            .get(index)
            .map(|&id| Node::from_id(self.arena, id))
            .ok_or(DomError::IndexOutOfRange {
                index,
                len: self.ids.len(),
            })
    }

    pub fn first(&self) -> Option<Node<'a>> {
        self.ids.first().map(|&id| Node::from_id(self.arena, id))
    }

    pub fn last(&self) -> Option<Node<'a>> {
        self.ids.last().map(|&id| Node::from_id(self.arena, id))
    }

    pub fn iter(&self) -> ChildIter<'a> {
        ChildIter {
            arena: self.arena,
            ids: self.ids.iter(),
        }
    }

    /// Element children only
    pub fn elements(&self) -> impl Iterator<Item = crate::Element<'a>> + use<'a> {
        self.iter().filter_map(|node| node.as_element())
    }
}

impl<'a> IntoIterator for Children<'a> {
    type Item = Node<'a>;
    type IntoIter = ChildIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &Children<'a> {
    type Item = Node<'a>;
    type IntoIter = ChildIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Children<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over a [`Children`] sequence
#[derive(Clone)]
pub struct ChildIter<'a> {
    arena: &'a Arena,
    ids: std::slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = Node<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.ids.next().map(|&id| Node::from_id(self.arena, id))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.ids.nth(n).map(|&id| Node::from_id(self.arena, id))
    }
}

impl DoubleEndedIterator for ChildIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ids.next_back().map(|&id| Node::from_id(self.arena, id))
    }
}

impl ExactSizeIterator for ChildIter<'_> {}

impl FusedIterator for ChildIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArenaBuilder, Namespace};

    fn list() -> Arena {
        let mut b = ArenaBuilder::new();
        let ul = b.create_element("ul", Namespace::Html, false, 0);
        b.append(b.document(), ul);
        for (i, offset) in [4usize, 13, 22].into_iter().enumerate() {
            let li = b.create_element("li", Namespace::Html, false, offset);
            b.append(ul, li);
            b.append_text(li, &i.to_string(), offset + 4);
        }
        b.finish()
    }

    #[test]
    fn test_len_and_get() {
        let arena = list();
        let children = arena.root().children().unwrap();
        assert_eq!(children.len(), 3);
        assert!(!children.is_empty());
        assert_eq!(children.get(2).unwrap().offset(), 22);
        assert_eq!(
            children.get(3).unwrap_err(),
            DomError::IndexOutOfRange { index: 3, len: 3 }
        );
    }

    #[test]
    fn test_restartable_iteration() {
        let arena = list();
        let children = arena.root().children().unwrap();
        let first: Vec<_> = children.iter().collect();
        let second: Vec<_> = children.into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_iter_matches_get() {
        let arena = list();
        let children = arena.root().children().unwrap();
        for (i, child) in children.iter().enumerate() {
            assert_eq!(child, children.get(i).unwrap());
            assert_eq!(child.index_within_parent(), i);
        }
        let reversed: Vec<_> = children.iter().rev().map(|n| n.offset()).collect();
        assert_eq!(reversed, [22, 13, 4]);
        assert_eq!(children.iter().len(), 3);
    }

    #[test]
    fn test_empty_children() {
        let arena = ArenaBuilder::new().finish();
        let children = arena.document().children().unwrap();
        assert!(children.is_empty());
        assert_eq!(children.iter().next(), None);
        assert!(children.first().is_none());
    }
}
