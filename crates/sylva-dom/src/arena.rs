//! Parse arena (index-based node storage)
//!
//! All nodes of one parsed document live in a single `Vec`, addressed by
//! [`NodeId`]. Names are interned; text and attribute values are owned by
//! the arena. Once built the arena is never mutated again.

use crate::interner::{InternedString, StringInterner};
use crate::namespace::{AttrNamespace, Namespace};
use crate::node::Node;
use crate::document::QuirksMode;

/// Node identifier (index into the arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The document node is always the first node of an arena
    pub const DOCUMENT: NodeId = NodeId(0);

    /// Position of the node in arena storage
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One arena slot
#[derive(Debug, Clone)]
pub(crate) struct RawNode {
    /// Parent node (None for the document and for detached nodes)
    pub(crate) parent: Option<NodeId>,
    /// Position within the parent's child list
    pub(crate) index: u32,
    /// Byte offset in the source
    pub(crate) offset: u32,
    pub(crate) data: RawData,
}

/// Kind-specific payload
#[derive(Debug, Clone)]
pub(crate) enum RawData {
    Document(DocumentData),
    Element(ElementData),
    Text(String),
    CData(String),
    Comment(String),
    Whitespace(String),
}

impl RawData {
    /// Child list, for the kinds that have one
    #[inline]
    pub(crate) fn children(&self) -> Option<&[NodeId]> {
        match self {
            RawData::Document(doc) => Some(&doc.children),
            RawData::Element(elem) => Some(&elem.children),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<NodeId>> {
        match self {
            RawData::Document(doc) => Some(&mut doc.children),
            RawData::Element(elem) => Some(&mut elem.children),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct DocumentData {
    pub(crate) doctype: Option<DoctypeData>,
    pub(crate) quirks_mode: QuirksMode,
    pub(crate) children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub(crate) struct DoctypeData {
    pub(crate) name: String,
    pub(crate) public_id: String,
    pub(crate) system_id: String,
}

#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    pub(crate) tag: InternedString,
    pub(crate) namespace: Namespace,
    pub(crate) template: bool,
    pub(crate) attrs: Vec<RawAttribute>,
    pub(crate) children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub(crate) struct RawAttribute {
    pub(crate) name: InternedString,
    pub(crate) value: String,
    pub(crate) namespace: AttrNamespace,
}

/// Immutable parse arena
///
/// Produced by [`ArenaBuilder::finish`](crate::ArenaBuilder::finish). Every
/// view handed out by the arena borrows it, so the borrow checker rejects any
/// use of a view after the arena is dropped.
#[derive(Debug, Clone)]
pub struct Arena {
    pub(crate) nodes: Vec<RawNode>,
    pub(crate) interner: StringInterner,
    pub(crate) root: NodeId,
}

impl Arena {
    /// The document node
    pub fn document(&self) -> Node<'_> {
        Node::from_id(self, NodeId::DOCUMENT)
    }

    /// The root element (`<html>`), or the document when there is none
    pub fn root(&self) -> Node<'_> {
        Node::from_id(self, self.root)
    }

    /// Get a node by ID
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        (id.index() < self.nodes.len()).then(|| Node::from_id(self, id))
    }

    /// Number of nodes in the arena (detached nodes included)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Interned tag and attribute names
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Approximate heap usage in bytes
    pub fn memory_usage(&self) -> usize {
        let payload: usize = self
            .nodes
            .iter()
            .map(|node| match &node.data {
                RawData::Document(doc) => {
                    doc.children.capacity() * std::mem::size_of::<NodeId>()
                        + doc.doctype.as_ref().map_or(0, |d| {
                            d.name.capacity() + d.public_id.capacity() + d.system_id.capacity()
                        })
                }
                RawData::Element(elem) => {
                    elem.children.capacity() * std::mem::size_of::<NodeId>()
                        + elem.attrs.capacity() * std::mem::size_of::<RawAttribute>()
                        + elem.attrs.iter().map(|a| a.value.capacity()).sum::<usize>()
                }
                RawData::Text(s) | RawData::CData(s) | RawData::Comment(s) | RawData::Whitespace(s) => {
                    s.capacity()
                }
            })
            .sum();
        self.nodes.capacity() * std::mem::size_of::<RawNode>() + payload + self.interner.memory_usage()
    }

    /// Slot for an ID handed out by this arena
    #[inline]
    pub(crate) fn raw(&self, id: NodeId) -> &RawNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.raw(id).data.children().unwrap_or(&[])
    }
}
