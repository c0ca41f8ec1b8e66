//! Parser Configuration

use html5ever::ParseOpts;
use html5ever::tokenizer::TokenizerOpts;
use html5ever::tree_builder::TreeBuilderOpts;

/// Parser configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Parse `<noscript>` content as raw text, as a scripting browser would
    pub scripting_enabled: bool,

    /// Parse as an `<iframe srcdoc>` document (never quirks mode)
    pub iframe_srcdoc: bool,

    /// Do not record the DOCTYPE on the document
    pub drop_doctype: bool,

    /// Ask html5ever for detailed error messages
    pub exact_errors: bool,

    /// Maximum number of parse errors kept (None = all)
    pub max_errors: Option<usize>,

    /// Recover source byte offsets for every node.
    ///
    /// When false the input is handed to html5ever in one piece, every
    /// offset reads 0 and `<![CDATA[` sections in foreign content come back
    /// as ordinary text.
    pub track_offsets: bool,

    /// Replace invalid UTF-8 with U+FFFD instead of failing
    pub replace_invalid_utf8: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            scripting_enabled: false,
            iframe_srcdoc: false,
            drop_doctype: false,
            exact_errors: false,
            max_errors: None,
            track_offsets: true,
            replace_invalid_utf8: false,
        }
    }
}

impl ParseOptions {
    pub(crate) fn to_html5ever(&self) -> ParseOpts {
        ParseOpts {
            tokenizer: TokenizerOpts {
                exact_errors: self.exact_errors,
                ..TokenizerOpts::default()
            },
            tree_builder: TreeBuilderOpts {
                exact_errors: self.exact_errors,
                scripting_enabled: self.scripting_enabled,
                iframe_srcdoc: self.iframe_srcdoc,
                drop_doctype: self.drop_doctype,
                ..TreeBuilderOpts::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ParseOptions::default();
        assert!(!opts.scripting_enabled);
        assert!(opts.track_offsets);
        assert_eq!(opts.max_errors, None);

        let html5ever = opts.to_html5ever();
        assert!(!html5ever.tree_builder.scripting_enabled);
        assert!(!html5ever.tree_builder.drop_doctype);
    }

    #[test]
    fn test_flags_reach_html5ever() {
        let opts = ParseOptions {
            scripting_enabled: true,
            drop_doctype: true,
            exact_errors: true,
            ..ParseOptions::default()
        };
        let html5ever = opts.to_html5ever();
        assert!(html5ever.tree_builder.scripting_enabled);
        assert!(html5ever.tree_builder.drop_doctype);
        assert!(html5ever.tree_builder.exact_errors);
        assert!(html5ever.tokenizer.exact_errors);
    }
}
