//! Element view

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::arena::ElementData;
use crate::attributes::Attributes;
use crate::children::Children;
use crate::namespace::Namespace;
use crate::node::{Node, NodeRef, NodeType};

/// An element (a `<template>` element included)
#[derive(Clone, Copy)]
pub struct Element<'a> {
    pub(crate) at: NodeRef<'a>,
    data: &'a ElementData,
    tag_name: &'a str,
}

impl<'a> Element<'a> {
    pub(crate) fn new(at: NodeRef<'a>, data: &'a ElementData) -> Self {
        let tag_name = at.arena.interner.resolve(data.tag);
        Self { at, data, tag_name }
    }

    /// `Element`, or `Template` for a `<template>` element
    pub fn node_type(&self) -> NodeType {
        if self.data.template {
            NodeType::Template
        } else {
            NodeType::Element
        }
    }

    /// Tag name as normalized by the parser (lower case for HTML,
    /// case-corrected for SVG)
    #[inline]
    pub fn tag_name(&self) -> &'a str {
        self.tag_name
    }

    #[inline]
    pub fn namespace(&self) -> Namespace {
        self.data.namespace
    }

    #[inline]
    pub fn is_template(&self) -> bool {
        self.data.template
    }

    pub fn attributes(&self) -> Attributes<'a> {
        Attributes::new(self.at.arena, &self.data.attrs)
    }

    /// Child sequence; for a template these are the template contents
    pub fn children(&self) -> Children<'a> {
        Children::new(self.at.arena, &self.data.children)
    }

    /// Text of the element when its only child is a text node
    pub fn text(&self) -> Option<&'a str> {
        match self.data.children.as_slice() {
            [only] => match Node::from_id(self.at.arena, *only) {
                Node::Text(text) => Some(text.text()),
                _ => None,
            },
            _ => None,
        }
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
        Node::Element(*self)
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl Eq for Element<'_> {}

impl Hash for Element<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.at.hash(state);
    }
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.tag_name)
    }
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag_name)
            .field("namespace", &self.data.namespace)
            .field("offset", &self.offset())
            .field("attributes", &self.data.attrs.len())
            .field("children", &self.data.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ArenaBuilder, AttrNamespace, Namespace, NodeType};

    #[test]
    fn test_template_is_an_element() {
        let mut b = ArenaBuilder::new();
        let template = b.create_element("template", Namespace::Html, true, 0);
        let p = b.create_element("p", Namespace::Html, false, 10);
        b.append(b.document(), template);
        b.append(template, p);
        let arena = b.finish();

        let root = arena.root();
        assert_eq!(root.node_type(), NodeType::Template);
        assert!(root.is_tag());
        let children = root.children().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children.get(0).unwrap().tag_name().unwrap(), "p");
    }

    #[test]
    fn test_text_heuristic() {
        let mut b = ArenaBuilder::new();
        let h1 = b.create_element("h1", Namespace::Html, false, 0);
        let div = b.create_element("div", Namespace::Html, false, 20);
        let em = b.create_element("em", Namespace::Html, false, 26);
        b.append(b.document(), h1);
        b.append_text(h1, "Lorem Ipsum", 4);
        b.append(h1, div);
        b.append_text(div, "a", 25);
        b.append(div, em);
        let arena = b.finish();

        let h1 = arena.root().as_element().unwrap();
        assert_eq!(h1.text(), None);
        let div = h1.children().get(1).unwrap().as_element().unwrap();
        assert_eq!(div.text(), None);
        let em = div.children().get(1).unwrap().as_element().unwrap();
        assert_eq!(em.text(), None);

        let mut b = ArenaBuilder::new();
        let h1 = b.create_element("h1", Namespace::Html, false, 0);
        b.append(b.document(), h1);
        b.append_text(h1, "Lorem Ipsum", 4);
        let arena = b.finish();
        assert_eq!(arena.root().as_element().unwrap().text(), Some("Lorem Ipsum"));
    }

    #[test]
    fn test_namespace_and_display() {
        let mut b = ArenaBuilder::new();
        let svg = b.create_element("svg", Namespace::Svg, false, 3);
        b.add_attribute(svg, "xlink:href", "#a", AttrNamespace::XLink);
        b.append(b.document(), svg);
        let arena = b.finish();

        let svg = arena.root().as_element().unwrap();
        assert_eq!(svg.namespace(), Namespace::Svg);
        assert_eq!(svg.offset(), 3);
        assert_eq!(svg.to_string(), "<svg>");
        assert_eq!(svg.attributes().len(), 1);
    }
}
