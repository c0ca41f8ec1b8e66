//! Fragment parsing context
//!
//! A fragment is parsed as if it were the content of a context element.
//! Only names of real HTML, SVG and MathML elements are accepted.

use std::str::FromStr;

use html5ever::{LocalName, Namespace as NsUrl, QualName, ns};
use sylva_dom::Namespace;

use crate::ParseError;

const HTML_TAGS: &[&str] = &[
    "a", "abbr", "acronym", "address", "applet", "area", "article", "aside", "audio", "b", "base",
    "basefont", "bdi", "bdo", "bgsound", "big", "blink", "blockquote", "body", "br", "button",
    "canvas", "caption", "center", "cite", "code", "col", "colgroup", "data", "datalist", "dd",
    "del", "details", "dfn", "dialog", "dir", "div", "dl", "dt", "em", "embed", "fieldset",
    "figcaption", "figure", "font", "footer", "form", "frame", "frameset", "h1", "h2", "h3", "h4",
    "h5", "h6", "head", "header", "hgroup", "hr", "html", "i", "iframe", "image", "img", "input",
    "ins", "isindex", "kbd", "keygen", "label", "legend", "li", "link", "listing", "main", "map",
    "mark", "marquee", "menu", "menuitem", "meta", "meter", "multicol", "nav", "nextid", "nobr",
    "noembed", "noframes", "noscript", "object", "ol", "optgroup", "option", "output", "p",
    "param", "picture", "plaintext", "pre", "progress", "q", "rb", "rp", "rt", "rtc", "ruby", "s",
    "samp", "script", "search", "section", "select", "slot", "small", "source", "spacer", "span",
    "strike", "strong", "style", "sub", "summary", "sup", "table", "tbody", "td", "template",
    "textarea", "tfoot", "th", "thead", "time", "title", "tr", "track", "tt", "u", "ul", "var",
    "video", "wbr", "xmp",
];

/// SVG element names in their case-adjusted spelling
const SVG_TAGS: &[&str] = &[
    "a", "altGlyph", "altGlyphDef", "altGlyphItem", "animate", "animateColor", "animateMotion",
    "animateTransform", "circle", "clipPath", "defs", "desc", "ellipse", "feBlend",
    "feColorMatrix", "feComponentTransfer", "feComposite", "feConvolveMatrix",
    "feDiffuseLighting", "feDisplacementMap", "feDistantLight", "feDropShadow", "feFlood",
    "feFuncA", "feFuncB", "feFuncG", "feFuncR", "feGaussianBlur", "feImage", "feMerge",
    "feMergeNode", "feMorphology", "feOffset", "fePointLight", "feSpecularLighting",
    "feSpotLight", "feTile", "feTurbulence", "filter", "font", "foreignObject", "g", "glyph",
    "glyphRef", "image", "line", "linearGradient", "marker", "mask", "metadata", "mpath", "path",
    "pattern", "polygon", "polyline", "radialGradient", "rect", "script", "set", "stop", "style",
    "svg", "switch", "symbol", "text", "textPath", "title", "tspan", "use", "view",
];

const MATHML_TAGS: &[&str] = &[
    "annotation", "annotation-xml", "maction", "math", "menclose", "merror", "mfenced", "mfrac",
    "mglyph", "mi", "mlabeledtr", "mmultiscripts", "mn", "mo", "mover", "mpadded", "mphantom",
    "mprescripts", "mroot", "mrow", "ms", "mspace", "msqrt", "mstyle", "msub", "msubsup", "msup",
    "mtable", "mtd", "mtext", "mtr", "munder", "munderover", "none", "semantics",
];

fn known_tags(namespace: Namespace) -> &'static [&'static str] {
    match namespace {
        Namespace::Html => HTML_TAGS,
        Namespace::Svg => SVG_TAGS,
        Namespace::MathMl => MATHML_TAGS,
    }
}

/// Canonical spelling of a known element name, matched case-insensitively
pub fn canonical_tag(tag: &str, namespace: Namespace) -> Option<&'static str> {
    known_tags(namespace)
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(tag))
}

/// Context element a fragment is parsed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentContext {
    /// Canonical tag name
    pub tag: &'static str,
    pub namespace: Namespace,
}

impl FragmentContext {
    /// Resolve a tag name and a namespace given by name (`"svg"`) or URI
    pub fn new(tag: &str, namespace: &str) -> Result<Self, ParseError> {
        let namespace =
            Namespace::from_str(namespace).map_err(|_| ParseError::UnknownNamespace(namespace.to_string()))?;
        Self::with_namespace(tag, namespace)
    }

    pub fn with_namespace(tag: &str, namespace: Namespace) -> Result<Self, ParseError> {
        let tag = canonical_tag(tag, namespace).ok_or_else(|| ParseError::UnknownContextTag(tag.to_string()))?;
        Ok(Self { tag, namespace })
    }

    pub(crate) fn qual_name(&self) -> QualName {
        let ns: NsUrl = match self.namespace {
            Namespace::Html => ns!(html),
            Namespace::Svg => ns!(svg),
            Namespace::MathMl => ns!(mathml),
        };
        QualName::new(None, ns, LocalName::from(self.tag))
    }
}

impl Default for FragmentContext {
    fn default() -> Self {
        Self {
            tag: "div",
            namespace: Namespace::Html,
        }
    }
}
