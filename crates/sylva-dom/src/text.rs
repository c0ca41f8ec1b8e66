//! Text-like node views

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::node::{Node, NodeRef, NodeType};

/// Which of the four text-like kinds a [`TextNode`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Text,
    CData,
    Comment,
    Whitespace,
}

impl TextKind {
    pub fn node_type(self) -> NodeType {
        match self {
            TextKind::Text => NodeType::Text,
            TextKind::CData => NodeType::CData,
            TextKind::Comment => NodeType::Comment,
            TextKind::Whitespace => NodeType::Whitespace,
        }
    }
}

/// Text, CDATA, comment or whitespace node
#[derive(Clone, Copy)]
pub struct TextNode<'a> {
    pub(crate) at: NodeRef<'a>,
    kind: TextKind,
    content: &'a str,
}

impl<'a> TextNode<'a> {
    pub(crate) fn new(at: NodeRef<'a>, kind: TextKind, content: &'a str) -> Self {
        Self { at, kind, content }
    }

    /// Decoded content (character references resolved; comment delimiters
    /// stripped)
    #[inline]
    pub fn text(&self) -> &'a str {
        self.content
    }

    #[inline]
    pub fn kind(&self) -> TextKind {
        self.kind
    }

    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    pub fn offset(&self) -> usize {
        self.at.offset()
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.at.parent()
    }

    pub fn index_within_parent(&self) -> usize {
        self.at.index()
    }

    pub fn as_node(&self) -> Node<'a> {
        match self.kind {
            TextKind::Text => Node::Text(*self),
            TextKind::CData => Node::CData(*self),
            TextKind::Comment => Node::Comment(*self),
            TextKind::Whitespace => Node::Whitespace(*self),
        }
    }
}

impl PartialEq for TextNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl Eq for TextNode<'_> {}

impl Hash for TextNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.at.hash(state);
    }
}

impl fmt::Display for TextNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TextKind::Text => f.write_str(self.content),
            TextKind::CData => write!(f, "<![CDATA[{}]]>", self.content),
            TextKind::Comment => write!(f, "<!--{}-->", self.content),
            TextKind::Whitespace => write!(f, "<whitespace {:?}>", self.content),
        }
    }
}

impl fmt::Debug for TextNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextNode")
            .field("kind", &self.kind)
            .field("content", &self.content)
            .field("offset", &self.offset())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ArenaBuilder, Namespace, NodeType, TextKind};

    #[test]
    fn test_display_per_kind() {
        let mut b = ArenaBuilder::new();
        let svg = b.create_element("svg", Namespace::Svg, false, 0);
        b.append(b.document(), svg);
        b.append_text(svg, "plain", 5);
        let cdata = b.create_cdata("x<y", 10);
        b.append(svg, cdata);
        let comment = b.create_comment(" c ", 30);
        b.append(svg, comment);
        b.append_text(svg, "\n  ", 40);
        let arena = b.finish();

        let rendered: Vec<String> = arena
            .root()
            .children()
            .unwrap()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(
            rendered,
            ["plain", "<![CDATA[x<y]]>", "<!-- c -->", "<whitespace \"\\n  \">"]
        );
    }

    #[test]
    fn test_kind_round_trip() {
        let mut b = ArenaBuilder::new();
        let div = b.create_element("div", Namespace::Html, false, 0);
        b.append(b.document(), div);
        let comment = b.create_comment("note", 5);
        b.append(div, comment);
        let arena = b.finish();

        let node = arena.root().children().unwrap().get(0).unwrap();
        let text = node.as_text().unwrap();
        assert_eq!(text.kind(), TextKind::Comment);
        assert_eq!(text.node_type(), NodeType::Comment);
        assert_eq!(text.as_node(), node);
        assert_eq!(text.offset(), 5);
        assert_eq!(text.parent(), Some(arena.root()));
    }
}
