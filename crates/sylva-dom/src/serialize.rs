//! serde support: materialize a view (and its subtree) as plain data

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::attributes::Attributes;
use crate::children::Children;
use crate::node::Node;

impl Serialize for Node<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.node_type())?;
        map.serialize_entry("offset", &self.offset())?;
        match self {
            Node::Document(doc) => {
                map.serialize_entry("doctype", &doc.doctype())?;
                map.serialize_entry("quirks_mode", &doc.quirks_mode())?;
                map.serialize_entry("children", &doc.children())?;
            }
            Node::Element(elem) => {
                map.serialize_entry("tag", elem.tag_name())?;
                map.serialize_entry("namespace", &elem.namespace())?;
                map.serialize_entry("attributes", &elem.attributes())?;
                map.serialize_entry("children", &elem.children())?;
            }
            Node::Text(text) | Node::CData(text) | Node::Comment(text) | Node::Whitespace(text) => {
                map.serialize_entry("text", text.text())?;
            }
        }
        map.end()
    }
}

impl Serialize for Children<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for child in self.iter() {
            seq.serialize_element(&child)?;
        }
        seq.end()
    }
}

impl Serialize for Attributes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for attr in self.iter() {
            seq.serialize_element(&attr)?;
        }
        seq.end()
    }
}
