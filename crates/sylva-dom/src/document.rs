//! Document view

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::arena::DocumentData;
use crate::children::Children;
use crate::element::Element;
use crate::node::{Node, NodeRef};

/// Document compatibility mode picked by the tree builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum QuirksMode {
    #[default]
    NoQuirks,
    LimitedQuirks,
    Quirks,
}

/// DOCTYPE fields; each may be empty but none is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Doctype<'a> {
    pub name: &'a str,
    pub public_id: &'a str,
    pub system_id: &'a str,
}

/// The document node: parent of `<html>` and of top-level comments
#[derive(Clone, Copy)]
pub struct Document<'a> {
    pub(crate) at: NodeRef<'a>,
    data: &'a DocumentData,
}

impl<'a> Document<'a> {
    pub(crate) fn new(at: NodeRef<'a>, data: &'a DocumentData) -> Self {
        Self { at, data }
    }

    /// Whether the source had a DOCTYPE
    pub fn has_doctype(&self) -> bool {
        self.data.doctype.is_some()
    }

    /// DOCTYPE fields, when the source had one
    pub fn doctype(&self) -> Option<Doctype<'a>> {
        self.data.doctype.as_ref().map(|d| Doctype {
            name: &d.name,
            public_id: &d.public_id,
            system_id: &d.system_id,
        })
    }

    /// DOCTYPE name (empty without a DOCTYPE)
    pub fn name(&self) -> &'a str {
        self.data.doctype.as_ref().map_or("", |d| d.name.as_str())
    }

    /// DOCTYPE public identifier (empty without a DOCTYPE)
    pub fn public_identifier(&self) -> &'a str {
        self.data.doctype.as_ref().map_or("", |d| d.public_id.as_str())
    }

    /// DOCTYPE system identifier (empty without a DOCTYPE)
    pub fn system_identifier(&self) -> &'a str {
        self.data.doctype.as_ref().map_or("", |d| d.system_id.as_str())
    }

    pub fn quirks_mode(&self) -> QuirksMode {
        self.data.quirks_mode
    }

    pub fn children(&self) -> Children<'a> {
        Children::new(self.at.arena, &self.data.children)
    }

    /// First element child (the `<html>` element)
    pub fn root_element(&self) -> Option<Element<'a>> {
        self.children().iter().find_map(|child| child.as_element())
    }

    /// Always 0
    pub fn offset(&self) -> usize {
        0
    }

    pub fn as_node(&self) -> Node<'a> {
        Node::Document(*self)
    }
}

impl PartialEq for Document<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl Eq for Document<'_> {}

impl Hash for Document<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.at.hash(state);
    }
}

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.doctype {
            Some(doctype) => write!(f, "<!DOCTYPE {}>", doctype.name),
            None => f.write_str("<Document>"),
        }
    }
}

impl fmt::Debug for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("doctype", &self.doctype())
            .field("children", &self.data.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{ArenaBuilder, Namespace, QuirksMode};

    #[test]
    fn test_doctype_fields() {
        let mut b = ArenaBuilder::new();
        b.set_doctype("html", "-//W3C//DTD XHTML 1.1//EN", "");
        b.set_quirks_mode(QuirksMode::LimitedQuirks);
        let arena = b.finish();
        let doc = arena.document().as_document().unwrap();

        assert!(doc.has_doctype());
        assert_eq!(doc.name(), "html");
        assert_eq!(doc.public_identifier(), "-//W3C//DTD XHTML 1.1//EN");
        assert_eq!(doc.system_identifier(), "");
        assert_eq!(doc.quirks_mode(), QuirksMode::LimitedQuirks);
        assert_eq!(doc.to_string(), "<!DOCTYPE html>");
    }

    #[test]
    fn test_no_doctype() {
        let mut b = ArenaBuilder::new();
        let html = b.create_element("html", Namespace::Html, false, 0);
        b.append(b.document(), html);
        let arena = b.finish();
        let doc = arena.document().as_document().unwrap();

        assert!(!doc.has_doctype());
        assert_eq!(doc.doctype(), None);
        assert_eq!(doc.name(), "");
        assert_eq!(doc.to_string(), "<Document>");
        assert_eq!(doc.root_element().unwrap().tag_name(), "html");
    }
}
