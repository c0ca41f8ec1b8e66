//! Parse output handle

use std::fmt;

use sylva_dom::{Arena, Node};

/// A markup error reported by the tree builder.
///
/// Markup errors never fail a parse; html5ever recovers from every one of
/// them. They are kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// 1-based source line the tokenizer was on
    pub line: u64,
    pub message: String,
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Result of parsing HTML
///
/// Owns the parse arena. Every node view borrows the output, so views cannot
/// be used once it is dropped:
///
/// ```compile_fail
/// let root = {
///     let output = sylva_html::parse("<p>hi</p>").unwrap();
///     output.root()
/// };
/// println!("{}", root);
/// ```
#[derive(Debug, Clone)]
pub struct ParseOutput {
    arena: Arena,
    errors: Vec<ParseIssue>,
}

impl ParseOutput {
    pub(crate) fn new(arena: Arena, errors: Vec<ParseIssue>) -> Self {
        Self { arena, errors }
    }

    /// The `<html>` element
    pub fn root(&self) -> Node<'_> {
        self.arena.root()
    }

    /// The document node
    pub fn document(&self) -> Node<'_> {
        self.arena.document()
    }

    /// Parse errors reported by the tree builder, in source order
    pub fn errors(&self) -> &[ParseIssue] {
        &self.errors
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Number of arena nodes
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Every node reachable from the document, ordered by source offset.
    ///
    /// Nodes sharing an offset keep tree order.
    pub fn nodes_by_offset(&self) -> Vec<Node<'_>> {
        let mut nodes: Vec<Node<'_>> = self.document().descendants().collect();
        nodes.sort_by_key(|node| node.offset());
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = ParseIssue {
            line: 3,
            message: "Unexpected token".into(),
        };
        assert_eq!(issue.to_string(), "line 3: Unexpected token");
    }
}
