//! Sylva HTML Parser
//!
//! HTML5 parsing built on html5ever, producing a read-only parse arena.
//! Markup never fails to parse; only input that cannot be handed to the
//! parser at all (invalid UTF-8, more than 4 GiB) is rejected.
//!
//! ```
//! let output = sylva_html::parse("<!DOCTYPE html><p class=lead>Hello</p>").unwrap();
//!
//! let body = output.root().children().unwrap().get(1).unwrap();
//! let p = body.children().unwrap().get(0).unwrap();
//! assert_eq!(p.tag_name().unwrap(), "p");
//! assert_eq!(p.attributes().unwrap().get("class"), Some("lead"));
//! assert_eq!(p.offset(), 15);
//! assert_eq!(p.as_element().unwrap().text(), Some("Hello"));
//! ```

mod context;
mod locator;
mod options;
mod output;
mod parser;
mod sink;

pub use context::{FragmentContext, canonical_tag};
pub use options::ParseOptions;
pub use output::{ParseIssue, ParseOutput};
pub use parser::HtmlParser;

pub use sylva_dom::{
    ATTR_NAMESPACE_URLS, ATTR_NAMESPACE_VALUES, Arena, AttrNamespace, Attribute, Attributes, ChildIter, Children,
    Descendants, Doctype, Document, DomError, Element, NODE_TYPES, Namespace, Node, NodeId, NodeType, QuirksMode,
    TAG_NAMESPACES, TextKind, TextNode,
};

/// Parse error
///
/// Only raised when the parser cannot be invoked; malformed markup is
/// always recovered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("input of {len} bytes is too large")]
    InputTooLarge { len: usize },

    #[error("unknown context tag: {0}")]
    UnknownContextTag(String),

    #[error("unknown namespace: {0}")]
    UnknownNamespace(String),
}

/// Parse an HTML document with default options
pub fn parse(html: impl AsRef<[u8]>) -> Result<ParseOutput, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse an HTML document
pub fn parse_with_options(html: impl AsRef<[u8]>, options: ParseOptions) -> Result<ParseOutput, ParseError> {
    HtmlParser::with_options(options).parse(html)
}

/// Parse a fragment as the content of `context_tag` in `context_namespace`
/// (`"html"`, `"svg"`, `"mathml"` or their URIs)
pub fn parse_fragment(
    html: impl AsRef<[u8]>,
    context_tag: &str,
    context_namespace: &str,
) -> Result<ParseOutput, ParseError> {
    let context = FragmentContext::new(context_tag, context_namespace)?;
    HtmlParser::new().parse_fragment(html, context)
}

/// Parse a fragment as the content of a `<div>`
pub fn parse_fragment_default(html: impl AsRef<[u8]>) -> Result<ParseOutput, ParseError> {
    HtmlParser::new().parse_fragment(html, FragmentContext::default())
}

/// Parse a fragment with custom options
pub fn parse_fragment_with_options(
    html: impl AsRef<[u8]>,
    context: FragmentContext,
    options: ParseOptions,
) -> Result<ParseOutput, ParseError> {
    HtmlParser::with_options(options).parse_fragment(html, context)
}
