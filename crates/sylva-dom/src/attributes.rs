//! Element attributes
//!
//! Read-only access to one element's attribute list. Names are compared
//! exactly; the parser has already lower-cased HTML attribute names and
//! case-corrected foreign ones.

use std::collections::HashMap;
use std::fmt;

use crate::arena::{Arena, RawAttribute};
use crate::error::{DomError, Result};
use crate::interner::InternedString;
use crate::namespace::AttrNamespace;

/// Single attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute<'a> {
    /// Qualified name (`xlink:href` for prefixed foreign attributes)
    pub name: &'a str,
    pub value: &'a str,
    pub namespace: AttrNamespace,
}

impl<'a> From<Attribute<'a>> for (&'a str, &'a str) {
    fn from(attr: Attribute<'a>) -> Self {
        (attr.name, attr.value)
    }
}

/// Attribute collection of one element
#[derive(Clone, Copy)]
pub struct Attributes<'a> {
    arena: &'a Arena,
    attrs: &'a [RawAttribute],
}

impl<'a> Attributes<'a> {
    pub(crate) fn new(arena: &'a Arena, attrs: &'a [RawAttribute]) -> Self {
        Self { arena, attrs }
    }

    fn find(&self, name: &str) -> Option<&'a RawAttribute> {
        // A name the interner never saw cannot be on any element.
        let id: InternedString = self.arena.interner.lookup(name)?;
        self.attrs.iter().find(|a| a.name == id)
    }

    fn view(&self, raw: &'a RawAttribute) -> Attribute<'a> {
        Attribute {
            name: self.arena.interner.resolve(raw.name),
            value: &raw.value,
            namespace: raw.namespace,
        }
    }

    /// Get attribute value
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.find(name).map(|a| a.value.as_str())
    }

    /// Get attribute value, failing when it is absent
    pub fn get_required(&self, name: &str) -> Result<&'a str> {
        self.get(name).ok_or_else(|| DomError::AttributeNotFound { name: name.to_string() })
    }

    /// Namespace of an attribute
    pub fn get_namespace(&self, name: &str) -> Result<AttrNamespace> {
        self.find(name)
            .map(|a| a.namespace)
            .ok_or_else(|| DomError::AttributeNotFound { name: name.to_string() })
    }

    pub fn attribute(&self, name: &str) -> Option<Attribute<'a>> {
        self.find(name).map(|a| self.view(a))
    }

    /// Check if an attribute exists
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Owned name → value snapshot
    pub fn as_map(&self) -> HashMap<String, String> {
        self.iter()
            .map(|a| (a.name.to_string(), a.value.to_string()))
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Attribute by source position
    pub fn get_index(&self, index: usize) -> Result<Attribute<'a>> {
        self.attrs
            .get(index)
            .map(|a| self.view(a))
            .ok_or(DomError::IndexOutOfRange {
                index,
                len: self.attrs.len(),
            })
    }

    /// Attributes in source order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Attribute<'a>> + ExactSizeIterator + use<'a> {
        let this = *self;
        self.attrs.iter().map(move |a| this.view(a))
    }
}

impl fmt::Debug for Attributes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|a| (a.name, a.value)))
            .finish()
    }
}
