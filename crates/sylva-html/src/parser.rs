//! HTML5 Parser implementation
//!
//! Drives html5ever with [`ArenaSink`] so the tree is built straight into a
//! parse arena, with no intermediate DOM.

use std::borrow::Cow;
use std::rc::Rc;

use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{Parser, parse_document, parse_fragment};

use crate::context::FragmentContext;
use crate::locator::{Locator, chunk_bounds};
use crate::options::ParseOptions;
use crate::output::ParseOutput;
use crate::sink::ArenaSink;
use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Clone, Default)]
pub struct HtmlParser {
    options: ParseOptions,
}

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a complete document
    pub fn parse(&self, html: impl AsRef<[u8]>) -> Result<ParseOutput, ParseError> {
        let source = self.decode(html.as_ref())?;
        tracing::debug!("Parsing HTML document ({} bytes)", source.len());

        let locator = Rc::new(Locator::new(&source, self.options.track_offsets));
        let sink = ArenaSink::new(Rc::clone(&locator), self.options.max_errors, source.len());
        let parser = parse_document(sink, self.options.to_html5ever());
        Ok(self.drive(parser, &locator, &source))
    }

    /// Parse a fragment as the content of a `context` element
    pub fn parse_fragment(&self, html: impl AsRef<[u8]>, context: FragmentContext) -> Result<ParseOutput, ParseError> {
        let source = self.decode(html.as_ref())?;
        tracing::debug!(
            "Parsing HTML fragment ({} bytes) in <{}> ({})",
            source.len(),
            context.tag,
            context.namespace
        );

        let locator = Rc::new(Locator::new(&source, self.options.track_offsets));
        let sink = ArenaSink::new(Rc::clone(&locator), self.options.max_errors, source.len());
        let parser = parse_fragment(
            sink,
            self.options.to_html5ever(),
            context.qual_name(),
            Vec::new(),
            self.options.scripting_enabled,
        );
        Ok(self.drive(parser, &locator, &source))
    }

    fn decode<'b>(&self, bytes: &'b [u8]) -> Result<Cow<'b, str>, ParseError> {
        if bytes.len() > u32::MAX as usize {
            return Err(ParseError::InputTooLarge { len: bytes.len() });
        }
        match std::str::from_utf8(bytes) {
            Ok(source) => Ok(Cow::Borrowed(source)),
            Err(_) if self.options.replace_invalid_utf8 => Ok(String::from_utf8_lossy(bytes)),
            Err(e) => Err(ParseError::InvalidUtf8 {
                valid_up_to: e.valid_up_to(),
            }),
        }
    }

    fn drive(&self, mut parser: Parser<ArenaSink<'_>>, locator: &Locator<'_>, source: &str) -> ParseOutput {
        if locator.enabled() {
            for (start, end) in chunk_bounds(source) {
                locator.enter(start, end);
                parser.process(StrTendril::from_slice(&source[start..end]));
            }
            locator.enter(source.len(), source.len());
        } else {
            parser.process(StrTendril::from_slice(source));
        }
        let output = parser.finish();

        tracing::debug!(
            "Parsed {} nodes, {} errors",
            output.len(),
            output.errors().len()
        );
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylva_dom::NodeType;

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let output = HtmlParser::new().parse(html).unwrap();

        assert!(output.len() > 1, "Expected more than 1 node, got {}", output.len());
        assert_eq!(output.root().tag_name().unwrap(), "html");
    }

    #[test]
    fn test_parse_fragment() {
        let output = HtmlParser::new()
            .parse_fragment("<p>Lorem ipsum</p>", FragmentContext::default())
            .unwrap();

        let children = output.root().children().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children.get(0).unwrap().tag_name().unwrap(), "p");
    }

    #[test]
    fn test_untracked_offsets_are_zero() {
        let parser = HtmlParser::with_options(ParseOptions {
            track_offsets: false,
            ..ParseOptions::default()
        });
        let output = parser.parse("<p>a</p><p>b</p>").unwrap();
        assert!(output.document().descendants().all(|n| n.offset() == 0));
        assert_eq!(output.document().descendants().filter(|n| n.node_type() == NodeType::Text).count(), 2);
    }

    #[test]
    fn test_text_only_input_memory() {
        let html = "x".repeat(1_000_000);
        let output = HtmlParser::new().parse(&html).unwrap();

        // document, html, head, body, text
        assert_eq!(output.len(), 5);
        let usage = output.arena().memory_usage();
        assert!(usage >= html.len());
        assert!(usage < 3 * html.len(), "{} bytes for {} input bytes", usage, html.len());
    }

    #[test]
    fn test_invalid_utf8() {
        let bytes = b"<p>ok\xff</p>";
        assert_eq!(
            HtmlParser::new().parse(bytes).unwrap_err(),
            ParseError::InvalidUtf8 { valid_up_to: 5 }
        );

        let lossy = HtmlParser::with_options(ParseOptions {
            replace_invalid_utf8: true,
            ..ParseOptions::default()
        });
        let output = lossy.parse(bytes).unwrap();
        let text: String = output
            .document()
            .descendants()
            .filter_map(|n| n.as_text())
            .map(|t| t.text())
            .collect();
        assert_eq!(text, "ok\u{FFFD}");
    }
}
