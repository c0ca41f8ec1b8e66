//! Sylva DOM - read-only views over a parse arena
//!
//! A parser fills an [`ArenaBuilder`]; [`ArenaBuilder::finish`] freezes it
//! into an [`Arena`]. Everything else in this crate is a borrowed, `Copy`
//! view into that arena: [`Node`] and its per-kind views, [`Children`],
//! [`Attributes`] and [`Descendants`]. Views are materialized one node at a
//! time on demand; nothing walks a subtree unless asked to.
//!
//! ```
//! use sylva_dom::{ArenaBuilder, AttrNamespace, Namespace, NodeType};
//!
//! let mut builder = ArenaBuilder::new();
//! let p = builder.create_element("p", Namespace::Html, false, 0);
//! builder.add_attribute(p, "class", "lead", AttrNamespace::None);
//! builder.append(builder.document(), p);
//! builder.append_text(p, "hello", 15);
//! let arena = builder.finish();
//!
//! let root = arena.root();
//! assert_eq!(root.tag_name().unwrap(), "p");
//! assert_eq!(root.attributes().unwrap().get("class"), Some("lead"));
//! let text = root.children().unwrap().get(0).unwrap();
//! assert_eq!(text.node_type(), NodeType::Text);
//! assert_eq!(text.offset(), 15);
//! ```

mod arena;
mod attributes;
mod builder;
mod children;
mod document;
mod element;
mod error;
mod interner;
mod namespace;
mod node;
#[cfg(feature = "serde")]
mod serialize;
mod text;
mod traverse;

pub use arena::{Arena, NodeId};
pub use attributes::{Attribute, Attributes};
pub use builder::ArenaBuilder;
pub use children::{ChildIter, Children};
pub use document::{Doctype, Document, QuirksMode};
pub use element::Element;
pub use error::{DomError, Result};
pub use interner::{InternedString, StringInterner};
pub use namespace::{
    ATTR_NAMESPACE_URLS, ATTR_NAMESPACE_VALUES, AttrNamespace, Namespace, TAG_NAMESPACES, UnknownNamespace,
};
pub use node::{NODE_TYPES, Node, NodeType};
pub use text::{TextKind, TextNode};
pub use traverse::Descendants;
