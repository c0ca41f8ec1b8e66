//! Arena builder
//!
//! The mutable side of the arena, driven by a parser's tree sink. The tree
//! builder may move nodes around while parsing (adoption agency, foster
//! parenting), so nodes can be detached and re-attached until
//! [`ArenaBuilder::finish`] freezes the tree.

use crate::arena::{Arena, DoctypeData, DocumentData, ElementData, NodeId, RawAttribute, RawData, RawNode};
use crate::document::QuirksMode;
use crate::interner::StringInterner;
use crate::namespace::{AttrNamespace, Namespace};

/// Mutable arena under construction
#[derive(Debug)]
pub struct ArenaBuilder {
    nodes: Vec<RawNode>,
    interner: StringInterner,
}

impl ArenaBuilder {
    /// Create a builder holding only the document node
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a builder with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(RawNode {
            parent: None,
            index: 0,
            offset: 0,
            data: RawData::Document(DocumentData::default()),
        });
        Self {
            nodes,
            interner: StringInterner::new(),
        }
    }

    /// The document node
    #[inline]
    pub fn document(&self) -> NodeId {
        NodeId::DOCUMENT
    }

    /// Number of nodes created so far
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the document node exists from the start
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, offset: usize, data: RawData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(RawNode {
            parent: None,
            index: 0,
            offset: u32::try_from(offset).unwrap_or(u32::MAX),
            data,
        });
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str, namespace: Namespace, template: bool, offset: usize) -> NodeId {
        let tag = self.interner.intern(tag);
        self.push(
            offset,
            RawData::Element(ElementData {
                tag,
                namespace,
                template,
                attrs: Vec::new(),
                children: Vec::new(),
            }),
        )
    }

    /// Add an attribute unless the element already has one with that name.
    ///
    /// Returns false when the attribute was already present or `element`
    /// is not an element.
    pub fn add_attribute(&mut self, element: NodeId, name: &str, value: &str, namespace: AttrNamespace) -> bool {
        let name = self.interner.intern(name);
        let Some(RawData::Element(elem)) = self.nodes.get_mut(element.index()).map(|n| &mut n.data) else {
            return false;
        };
        if elem.attrs.iter().any(|a| a.name == name) {
            return false;
        }
        elem.attrs.push(RawAttribute {
            name,
            value: value.to_string(),
            namespace,
        });
        true
    }

    /// Create a detached comment
    pub fn create_comment(&mut self, content: &str, offset: usize) -> NodeId {
        self.push(offset, RawData::Comment(content.to_string()))
    }

    /// Create a detached CDATA section (never merged with neighbouring text)
    pub fn create_cdata(&mut self, content: &str, offset: usize) -> NodeId {
        self.push(offset, RawData::CData(content.to_string()))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str, offset: usize) -> NodeId {
        self.push(offset, RawData::Text(content.to_string()))
    }

    /// Parent of a node, if attached
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.index()).and_then(|n| n.parent)
    }

    /// Check whether a node is an element
    pub fn is_element(&self, node: NodeId) -> bool {
        matches!(self.nodes.get(node.index()).map(|n| &n.data), Some(RawData::Element(_)))
    }

    /// Children of a node (empty for text-like nodes)
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.index())
            .and_then(|n| n.data.children())
            .unwrap_or(&[])
    }

    /// Remove a node from its parent's child list
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        if let Some(children) = self.nodes[parent.index()].data.children_mut() {
            children.retain(|&c| c != node);
        }
        self.nodes[node.index()].parent = None;
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || parent.index() >= self.nodes.len() || child.index() >= self.nodes.len() {
            return;
        }
        self.detach(child);
        if let Some(children) = self.nodes[parent.index()].data.children_mut() {
            children.push(child);
        } else {
            return;
        }
        self.nodes[child.index()].parent = Some(parent);
    }

    /// Insert `child` immediately before `sibling`, detaching it first.
    /// Does nothing when `sibling` has no parent.
    pub fn insert_before(&mut self, sibling: NodeId, child: NodeId) {
        if sibling == child || child.index() >= self.nodes.len() {
            return;
        }
        self.detach(child);
        let Some(parent) = self.parent(sibling) else {
            return;
        };
        if let Some(children) = self.nodes[parent.index()].data.children_mut() {
            let position = children.iter().position(|&c| c == sibling).unwrap_or(children.len());
            children.insert(position, child);
        } else {
            return;
        }
        self.nodes[child.index()].parent = Some(parent);
    }

    /// Append text to `parent`, merging into a trailing text node.
    /// Returns the node that holds the text.
    pub fn append_text(&mut self, parent: NodeId, text: &str, offset: usize) -> NodeId {
        if let Some(&last) = self.children(parent).last() {
            if let RawData::Text(existing) = &mut self.nodes[last.index()].data {
                existing.push_str(text);
                return last;
            }
        }
        let id = self.create_text(text, offset);
        self.append(parent, id);
        id
    }

    /// Insert text before `sibling`, merging into a preceding text node.
    /// Returns the node that holds the text.
    pub fn insert_text_before(&mut self, sibling: NodeId, text: &str, offset: usize) -> NodeId {
        let previous = self.parent(sibling).and_then(|parent| {
            let children = self.children(parent);
            let position = children.iter().position(|&c| c == sibling)?;
            position.checked_sub(1).map(|p| children[p])
        });
        if let Some(previous) = previous {
            if let RawData::Text(existing) = &mut self.nodes[previous.index()].data {
                existing.push_str(text);
                return previous;
            }
        }
        let id = self.create_text(text, offset);
        self.insert_before(sibling, id);
        id
    }

    /// Extend the content of a text-like node in place.
    /// Returns false when `node` has no text content.
    pub fn push_text(&mut self, node: NodeId, text: &str) -> bool {
        match self.nodes.get_mut(node.index()).map(|n| &mut n.data) {
            Some(RawData::Text(s) | RawData::CData(s) | RawData::Comment(s) | RawData::Whitespace(s)) => {
                s.push_str(text);
                true
            }
            _ => false,
        }
    }

    /// Move all children of `node` to the end of `new_parent`
    pub fn reparent_children(&mut self, node: NodeId, new_parent: NodeId) {
        if node == new_parent {
            return;
        }
        let moved = match self.nodes.get_mut(node.index()).and_then(|n| n.data.children_mut()) {
            Some(children) => std::mem::take(children),
            None => return,
        };
        for child in &moved {
            self.nodes[child.index()].parent = None;
        }
        for child in moved {
            self.append(new_parent, child);
        }
    }

    /// Record the document's doctype
    pub fn set_doctype(&mut self, name: &str, public_id: &str, system_id: &str) {
        if let RawData::Document(doc) = &mut self.nodes[NodeId::DOCUMENT.index()].data {
            doc.doctype = Some(DoctypeData {
                name: name.to_string(),
                public_id: public_id.to_string(),
                system_id: system_id.to_string(),
            });
        }
    }

    /// Record the quirks mode chosen by the tree builder
    pub fn set_quirks_mode(&mut self, mode: QuirksMode) {
        if let RawData::Document(doc) = &mut self.nodes[NodeId::DOCUMENT.index()].data {
            doc.quirks_mode = mode;
        }
    }

    /// Freeze the tree.
    ///
    /// Sibling indexes are assigned, whitespace-only text nodes become
    /// `Whitespace` nodes, and the first element child of the document
    /// becomes the root.
    pub fn finish(mut self) -> Arena {
        let mut positions = Vec::with_capacity(self.nodes.len());
        for node in &mut self.nodes {
            if matches!(&node.data, RawData::Text(content) if is_whitespace_only(content)) {
                if let RawData::Text(content) = std::mem::replace(&mut node.data, RawData::Whitespace(String::new())) {
                    node.data = RawData::Whitespace(content);
                }
            }
            if let Some(children) = node.data.children() {
                positions.extend(children.iter().enumerate().map(|(i, &c)| (c, i as u32)));
            }
        }
        for (child, index) in positions {
            self.nodes[child.index()].index = index;
        }

        let root = self
            .children(NodeId::DOCUMENT)
            .iter()
            .copied()
            .find(|&c| self.is_element(c))
            .unwrap_or(NodeId::DOCUMENT);

        Arena {
            nodes: self.nodes,
            interner: self.interner,
            root,
        }
    }
}

impl Default for ArenaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// HTML whitespace: space, tab, LF, FF, CR
#[inline]
fn is_whitespace_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\x0C' | b'\r'))
}
