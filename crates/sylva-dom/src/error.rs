//! View errors

use crate::node::NodeType;

/// Error returned by node, child and attribute views
///
/// Every variant is a caller mistake that leaves the tree untouched; check
/// [`Node::node_type`](crate::Node::node_type) or
/// [`Node::is_tag`](crate::Node::is_tag) first to avoid the capability
/// errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node type '{kind}' is not a tag")]
    NotATag { kind: NodeType },

    #[error("node type '{kind}' is not iterable")]
    NotIterable { kind: NodeType },

    #[error("node type '{kind}' has no text")]
    NotText { kind: NodeType },

    #[error("attribute not found: {name}")]
    AttributeNotFound { name: String },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result alias for view operations
pub type Result<T> = std::result::Result<T, DomError>;
