//! String Interner - tag and attribute names stored once per arena
//!
//! Element and attribute names repeat heavily ("div", "p", "class"), so the
//! arena keeps a single copy of each and nodes refer to it by a 4-byte code.

use std::collections::HashMap;

/// Interned string ID - just 4 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct InternedString(pub(crate) u32);

impl InternedString {
    /// Empty string
    pub const EMPTY: InternedString = InternedString(0);
}

/// String interner for deduplicating names
///
/// Memory layout:
/// - All strings stored in a single contiguous buffer
/// - Each InternedString indexes a (start, end) span into that buffer
#[derive(Debug, Clone)]
pub struct StringInterner {
    buffer: String,
    map: HashMap<Box<str>, u32>,
    spans: Vec<(u32, u32)>,
}

impl StringInterner {
    /// Create a new interner with common HTML names pre-interned
    pub fn new() -> Self {
        let mut interner = Self {
            buffer: String::with_capacity(1024),
            map: HashMap::with_capacity(128),
            spans: Vec::with_capacity(128),
        };

        // Index 0 is always the empty string
        interner.intern("");

        const COMMON_TAGS: &[&str] = &[
            "html", "head", "body", "title", "meta", "link", "script", "style",
            "div", "span", "p", "a", "img", "br", "ul", "ol", "li",
            "table", "tbody", "tr", "td", "th", "form", "input", "button",
            "h1", "h2", "h3", "h4", "h5", "h6", "strong", "em", "b", "i",
            "svg", "math", "template",
        ];

        const COMMON_ATTRS: &[&str] = &[
            "id", "class", "style", "href", "src", "alt", "title", "type",
            "name", "value", "lang", "rel", "charset", "content",
        ];

        for name in COMMON_TAGS.iter().chain(COMMON_ATTRS) {
            interner.intern(name);
        }

        interner
    }

    /// Intern a string, returning its ID.
    /// If the string is already interned, returns the existing ID.
    pub fn intern(&mut self, s: &str) -> InternedString {
        if let Some(&id) = self.map.get(s) {
            return InternedString(id);
        }

        let id = self.spans.len() as u32;
        let start = self.buffer.len() as u32;
        self.buffer.push_str(s);
        self.spans.push((start, self.buffer.len() as u32));
        self.map.insert(s.into(), id);

        InternedString(id)
    }

    /// Look up a string without interning it
    pub fn lookup(&self, s: &str) -> Option<InternedString> {
        self.map.get(s).map(|&id| InternedString(id))
    }

    /// Get the string for an interned ID (empty for unknown IDs)
    #[inline]
    pub fn resolve(&self, id: InternedString) -> &str {
        match self.spans.get(id.0 as usize) {
            Some(&(start, end)) => &self.buffer[start as usize..end as usize],
            None => "",
        }
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total memory used by the interner
    pub fn memory_usage(&self) -> usize {
        self.buffer.capacity()
            + self.map.capacity() * (std::mem::size_of::<Box<str>>() + std::mem::size_of::<u32>())
            + self.spans.capacity() * std::mem::size_of::<(u32, u32)>()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
