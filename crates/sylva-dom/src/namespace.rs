//! Namespace tables
//!
//! Element namespaces (HTML, SVG, MathML) and attribute namespaces
//! (none, xlink, xml, xmlns), each with a small integer code, a short
//! label and a URI.

use std::fmt;
use std::str::FromStr;

/// Namespace URIs indexed by [`Namespace`] code
pub const TAG_NAMESPACES: [&str; 3] = [
    "http://www.w3.org/1999/xhtml",
    "http://www.w3.org/2000/svg",
    "http://www.w3.org/1998/Math/MathML",
];

/// Attribute namespace labels indexed by [`AttrNamespace`] code
pub const ATTR_NAMESPACE_VALUES: [&str; 4] = ["none", "xlink", "xml", "xmlns"];

/// Attribute namespace URIs indexed by [`AttrNamespace`] code (`None` has no URI)
pub const ATTR_NAMESPACE_URLS: [Option<&str>; 4] = [
    None,
    Some("http://www.w3.org/1999/xlink"),
    Some("http://www.w3.org/XML/1998/namespace"),
    Some("http://www.w3.org/2000/xmlns"),
];

/// Element namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Namespace {
    #[default]
    Html = 0,
    Svg = 1,
    MathMl = 2,
}

impl Namespace {
    /// All namespaces, in code order
    pub const ALL: [Namespace; 3] = [Namespace::Html, Namespace::Svg, Namespace::MathMl];

    /// Small integer code (index into [`TAG_NAMESPACES`])
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Namespace URI
    #[inline]
    pub fn url(self) -> &'static str {
        TAG_NAMESPACES[self as usize]
    }

    /// Short name: `html`, `svg` or `mathml`
    pub fn name(self) -> &'static str {
        match self {
            Namespace::Html => "html",
            Namespace::Svg => "svg",
            Namespace::MathMl => "mathml",
        }
    }

    /// Map a namespace URI to a namespace
    pub fn from_url(url: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.url() == url)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known namespace
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown namespace: {0}")]
pub struct UnknownNamespace(pub String);

impl FromStr for Namespace {
    type Err = UnknownNamespace;

    /// Accepts the short names (`html`, `svg`, `mathml`, any case) or the URIs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|ns| ns.name().eq_ignore_ascii_case(trimmed) || ns.url() == trimmed)
            .ok_or_else(|| UnknownNamespace(s.to_string()))
    }
}

/// Attribute namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum AttrNamespace {
    #[default]
    None = 0,
    XLink = 1,
    Xml = 2,
    XmlNs = 3,
}

impl AttrNamespace {
    /// All attribute namespaces, in code order
    pub const ALL: [AttrNamespace; 4] = [
        AttrNamespace::None,
        AttrNamespace::XLink,
        AttrNamespace::Xml,
        AttrNamespace::XmlNs,
    ];

    /// Small integer code (index into [`ATTR_NAMESPACE_VALUES`])
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Label: `none`, `xlink`, `xml` or `xmlns`
    #[inline]
    pub fn label(self) -> &'static str {
        ATTR_NAMESPACE_VALUES[self as usize]
    }

    /// Namespace URI, `None` for plain attributes
    #[inline]
    pub fn url(self) -> Option<&'static str> {
        ATTR_NAMESPACE_URLS[self as usize]
    }

    /// Map an attribute namespace URI to an attribute namespace.
    ///
    /// The empty URI maps to [`AttrNamespace::None`]; a trailing slash is
    /// tolerated since parsers disagree on the xmlns URI spelling.
    pub fn from_url(url: &str) -> Option<Self> {
        if url.is_empty() {
            return Some(AttrNamespace::None);
        }
        let url = url.strip_suffix('/').unwrap_or(url);
        Self::ALL.into_iter().find(|ns| ns.url() == Some(url))
    }
}

impl fmt::Display for AttrNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_urls() {
        assert_eq!(Namespace::Html.url(), "http://www.w3.org/1999/xhtml");
        assert_eq!(TAG_NAMESPACES[Namespace::Svg.code() as usize], "http://www.w3.org/2000/svg");
        assert_eq!(
            Namespace::from_url("http://www.w3.org/1998/Math/MathML"),
            Some(Namespace::MathMl)
        );
        assert_eq!(Namespace::from_url("urn:nothing"), None);
    }

    #[test]
    fn test_namespace_from_str() {
        assert_eq!("html".parse::<Namespace>(), Ok(Namespace::Html));
        assert_eq!("SVG".parse::<Namespace>(), Ok(Namespace::Svg));
        assert_eq!("http://www.w3.org/1998/Math/MathML".parse::<Namespace>(), Ok(Namespace::MathMl));
        assert_eq!(
            "xul".parse::<Namespace>(),
            Err(UnknownNamespace("xul".to_string()))
        );
    }

    #[test]
    fn test_attr_namespace_tables() {
        assert_eq!(AttrNamespace::None.label(), "none");
        assert_eq!(AttrNamespace::None.url(), None);
        assert_eq!(AttrNamespace::XLink.url(), Some("http://www.w3.org/1999/xlink"));
        assert_eq!(ATTR_NAMESPACE_VALUES[AttrNamespace::XmlNs.code() as usize], "xmlns");
    }

    #[test]
    fn test_attr_namespace_from_url() {
        assert_eq!(AttrNamespace::from_url(""), Some(AttrNamespace::None));
        assert_eq!(
            AttrNamespace::from_url("http://www.w3.org/2000/xmlns/"),
            Some(AttrNamespace::XmlNs)
        );
        assert_eq!(
            AttrNamespace::from_url("http://www.w3.org/XML/1998/namespace"),
            Some(AttrNamespace::Xml)
        );
        assert_eq!(AttrNamespace::from_url("urn:other"), None);
    }
}
