//! Node views
//!
//! A [`Node`] is a borrowed, `Copy` view of one arena slot. Its variant is
//! chosen once, when the view is created, from the slot's raw kind; the
//! variant-specific views ([`Document`], [`Element`], [`TextNode`]) carry only
//! the fields that make sense for that kind.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::arena::{Arena, NodeId, RawData};
use crate::attributes::Attributes;
use crate::children::Children;
use crate::document::Document;
use crate::element::Element;
use crate::error::{DomError, Result};
use crate::text::{TextKind, TextNode};
use crate::traverse::Descendants;

/// Node type names indexed by [`NodeType`] code
pub const NODE_TYPES: [&str; 7] = [
    "document",
    "element",
    "text",
    "cdata",
    "comment",
    "whitespace",
    "template",
];

/// Kind of a node
///
/// `Template` is an element sub-kind: template elements are [`Element`]
/// views and behave like any other element for tree purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum NodeType {
    Document = 0,
    Element = 1,
    Text = 2,
    CData = 3,
    Comment = 4,
    Whitespace = 5,
    Template = 6,
}

impl NodeType {
    /// Small integer code (index into [`NODE_TYPES`])
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Lower-case name, e.g. `"element"`
    #[inline]
    pub fn as_str(self) -> &'static str {
        NODE_TYPES[self as usize]
    }

    /// Whether nodes of this kind have a child sequence
    #[inline]
    pub fn has_children(self) -> bool {
        matches!(self, NodeType::Document | NodeType::Element | NodeType::Template)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arena position shared by every view: the navigation half of a node
#[derive(Clone, Copy)]
pub(crate) struct NodeRef<'a> {
    pub(crate) arena: &'a Arena,
    pub(crate) id: NodeId,
}

impl<'a> NodeRef<'a> {
    #[inline]
    pub(crate) fn parent(self) -> Option<Node<'a>> {
        self.arena
            .raw(self.id)
            .parent
            .map(|parent| Node::from_id(self.arena, parent))
    }

    #[inline]
    pub(crate) fn offset(self) -> usize {
        self.arena.raw(self.id).offset as usize
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.arena.raw(self.id).index as usize
    }

    fn siblings(self) -> &'a [NodeId] {
        match self.arena.raw(self.id).parent {
            Some(parent) => self.arena.children_of(parent),
            None => &[],
        }
    }

    pub(crate) fn next_sibling(self) -> Option<Node<'a>> {
        let siblings = self.siblings();
        siblings
            .get(self.index() + 1)
            .map(|&id| Node::from_id(self.arena, id))
    }

    pub(crate) fn previous_sibling(self) -> Option<Node<'a>> {
        if self.arena.raw(self.id).parent.is_none() {
            return None;
        }
        let index = self.index().checked_sub(1)?;
        self.siblings()
            .get(index)
            .map(|&id| Node::from_id(self.arena, id))
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl Hash for NodeRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.arena, state);
        self.id.hash(state);
    }
}

/// A node of the parsed tree
///
/// Equality and hashing are by identity: two views are equal when they point
/// at the same node of the same arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node<'a> {
    Document(Document<'a>),
    Element(Element<'a>),
    Text(TextNode<'a>),
    CData(TextNode<'a>),
    Comment(TextNode<'a>),
    Whitespace(TextNode<'a>),
}

impl<'a> Node<'a> {
    /// Build the view matching the raw kind of arena slot `id`
    pub(crate) fn from_id(arena: &'a Arena, id: NodeId) -> Node<'a> {
        let at = NodeRef { arena, id };
        match &arena.raw(id).data {
            RawData::Document(data) => Node::Document(Document::new(at, data)),
            RawData::Element(data) => Node::Element(Element::new(at, data)),
            RawData::Text(content) => Node::Text(TextNode::new(at, TextKind::Text, content)),
            RawData::CData(content) => Node::CData(TextNode::new(at, TextKind::CData, content)),
            RawData::Comment(content) => Node::Comment(TextNode::new(at, TextKind::Comment, content)),
            RawData::Whitespace(content) => {
                Node::Whitespace(TextNode::new(at, TextKind::Whitespace, content))
            }
        }
    }

    #[inline]
    pub(crate) fn at(&self) -> NodeRef<'a> {
        match self {
            Node::Document(doc) => doc.at,
            Node::Element(elem) => elem.at,
            Node::Text(text) | Node::CData(text) | Node::Comment(text) | Node::Whitespace(text) => text.at,
        }
    }

    /// Arena slot of this node
    #[inline]
    pub fn id(&self) -> NodeId {
        self.at().id
    }

    /// The arena this view borrows
    #[inline]
    pub fn arena(&self) -> &'a Arena {
        self.at().arena
    }

    /// Node kind
    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Document(_) => NodeType::Document,
            Node::Element(elem) => elem.node_type(),
            Node::Text(_) => NodeType::Text,
            Node::CData(_) => NodeType::CData,
            Node::Comment(_) => NodeType::Comment,
            Node::Whitespace(_) => NodeType::Whitespace,
        }
    }

    /// Parent node; `None` for the document
    pub fn parent(&self) -> Option<Node<'a>> {
        self.at().parent()
    }

    /// Byte offset of the node in the source (0 for the document)
    pub fn offset(&self) -> usize {
        self.at().offset()
    }

    /// Position among the parent's children (0 for the document)
    pub fn index_within_parent(&self) -> usize {
        self.at().index()
    }

    /// Next node in the parent's child sequence
    pub fn next_sibling(&self) -> Option<Node<'a>> {
        self.at().next_sibling()
    }

    /// Previous node in the parent's child sequence
    pub fn previous_sibling(&self) -> Option<Node<'a>> {
        self.at().previous_sibling()
    }

    /// True for the document and elements (the kinds with children)
    pub fn is_tag(&self) -> bool {
        matches!(self, Node::Document(_) | Node::Element(_))
    }

    /// True for text, CDATA, comment and whitespace nodes
    pub fn is_text(&self) -> bool {
        !self.is_tag()
    }

    /// Child sequence of a document or element
    pub fn children(&self) -> Result<Children<'a>> {
        match self {
            Node::Document(doc) => Ok(doc.children()),
            Node::Element(elem) => Ok(elem.children()),
            _ => Err(DomError::NotIterable { kind: self.node_type() }),
        }
    }

    /// Attributes of an element
    pub fn attributes(&self) -> Result<Attributes<'a>> {
        match self {
            Node::Element(elem) => Ok(elem.attributes()),
            _ => Err(DomError::NotATag { kind: self.node_type() }),
        }
    }

    /// Tag name of an element
    pub fn tag_name(&self) -> Result<&'a str> {
        match self {
            Node::Element(elem) => Ok(elem.tag_name()),
            _ => Err(DomError::NotATag { kind: self.node_type() }),
        }
    }

    /// Content of a text-like node
    pub fn text(&self) -> Result<&'a str> {
        match self {
            Node::Text(text) | Node::CData(text) | Node::Comment(text) | Node::Whitespace(text) => {
                Ok(text.text())
            }
            _ => Err(DomError::NotText { kind: self.node_type() }),
        }
    }

    pub fn as_document(&self) -> Option<Document<'a>> {
        match self {
            Node::Document(doc) => Some(*doc),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<Element<'a>> {
        match self {
            Node::Element(elem) => Some(*elem),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<TextNode<'a>> {
        match self {
            Node::Text(text) | Node::CData(text) | Node::Comment(text) | Node::Whitespace(text) => Some(*text),
            _ => None,
        }
    }

    /// Lazy pre-order walk over every node below this one
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants::new(self.at())
    }
}

impl<'a> From<Document<'a>> for Node<'a> {
    fn from(doc: Document<'a>) -> Self {
        Node::Document(doc)
    }
}

impl<'a> From<Element<'a>> for Node<'a> {
    fn from(elem: Element<'a>) -> Self {
        Node::Element(elem)
    }
}

impl<'a> From<TextNode<'a>> for Node<'a> {
    fn from(text: TextNode<'a>) -> Self {
        text.as_node()
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Document(doc) => fmt::Display::fmt(doc, f),
            Node::Element(elem) => fmt::Display::fmt(elem, f),
            Node::Text(text) | Node::CData(text) | Node::Comment(text) | Node::Whitespace(text) => {
                fmt::Display::fmt(text, f)
            }
        }
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Document(doc) => fmt::Debug::fmt(doc, f),
            Node::Element(elem) => fmt::Debug::fmt(elem, f),
            Node::Text(text) | Node::CData(text) | Node::Comment(text) | Node::Whitespace(text) => {
                fmt::Debug::fmt(text, f)
            }
        }
    }
}
