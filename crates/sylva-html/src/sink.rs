//! html5ever tree sink that builds a parse arena
//!
//! Handles are arena [`NodeId`]s. html5ever asks for element names while
//! building, so the qualified name of every element is kept in a side table
//! until the parse finishes.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use html5ever::tendril::StrTendril;
use html5ever::interface::{ElemName, ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute, LocalName, QualName, local_name, ns};
use sylva_dom::{ArenaBuilder, AttrNamespace, Namespace, NodeId, QuirksMode as DocumentMode};

use crate::locator::Locator;
use crate::output::{ParseIssue, ParseOutput};

/// Owned element name handed back to the tree builder
#[derive(Debug, Clone)]
pub(crate) struct OwnedElemName(QualName);

impl ElemName for OwnedElemName {
    fn ns(&self) -> &html5ever::Namespace {
        &self.0.ns
    }

    fn local_name(&self) -> &LocalName {
        &self.0.local
    }
}

/// TreeSink implementation for building the arena
pub(crate) struct ArenaSink<'s> {
    builder: RefCell<ArenaBuilder>,
    /// Qualified names of created elements
    names: RefCell<HashMap<NodeId, QualName>>,
    /// MathML `annotation-xml` elements that are HTML integration points
    integration_points: RefCell<HashSet<NodeId>>,
    errors: RefCell<Vec<ParseIssue>>,
    max_errors: Option<usize>,
    line: Cell<u64>,
    locator: Rc<Locator<'s>>,
    /// CDATA node being filled: (section index, node)
    open_cdata: Cell<Option<(usize, NodeId)>>,
}

impl<'s> ArenaSink<'s> {
    pub(crate) fn new(locator: Rc<Locator<'s>>, max_errors: Option<usize>, size_hint: usize) -> Self {
        Self {
            builder: RefCell::new(ArenaBuilder::with_capacity(reserved_nodes(size_hint))),
            names: RefCell::new(HashMap::new()),
            integration_points: RefCell::new(HashSet::new()),
            errors: RefCell::new(Vec::new()),
            max_errors,
            line: Cell::new(1),
            locator,
            open_cdata: Cell::new(None),
        }
    }

    fn is_foreign(&self, node: NodeId) -> bool {
        self.names
            .borrow()
            .get(&node)
            .is_some_and(|name| name.ns != ns!(html))
    }

    fn append_text(&self, parent: NodeId, text: &str) {
        if self.is_foreign(parent) {
            if let Some((section, offset)) = self.locator.cdata_section() {
                self.append_cdata(parent, section, offset, text);
                return;
            }
        }
        let offset = self.locator.text(text);
        self.builder.borrow_mut().append_text(parent, text, offset);
    }

    fn append_cdata(&self, parent: NodeId, section: usize, offset: usize, text: &str) {
        let mut builder = self.builder.borrow_mut();
        if let Some((open, node)) = self.open_cdata.get() {
            if open == section && builder.children(parent).last() == Some(&node) {
                builder.push_text(node, text);
                return;
            }
        }
        let node = builder.create_cdata(text, offset);
        builder.append(parent, node);
        self.open_cdata.set(Some((section, node)));
    }

    fn add_attributes(&self, element: NodeId, attrs: Vec<Attribute>) {
        let mut builder = self.builder.borrow_mut();
        for attr in attrs {
            let namespace = AttrNamespace::from_url(&attr.name.ns).unwrap_or_default();
            let added = match &attr.name.prefix {
                Some(prefix) => {
                    let name = format!("{}:{}", prefix, attr.name.local);
                    builder.add_attribute(element, &name, &attr.value, namespace)
                }
                None => builder.add_attribute(element, &attr.name.local, &attr.value, namespace),
            };
            if !added {
                tracing::trace!("Duplicate attribute dropped: {}", attr.name.local);
            }
        }
    }
}

/// Upper bound on nodes reserved before parsing
const MAX_RESERVED_NODES: usize = 1 << 16;

/// Nodes to reserve for `len` input bytes
fn reserved_nodes(len: usize) -> usize {
    (len / 64).clamp(64, MAX_RESERVED_NODES)
}

fn document_mode(mode: QuirksMode) -> DocumentMode {
    match mode {
        QuirksMode::Quirks => DocumentMode::Quirks,
        QuirksMode::LimitedQuirks => DocumentMode::LimitedQuirks,
        QuirksMode::NoQuirks => DocumentMode::NoQuirks,
    }
}

impl TreeSink for ArenaSink<'_> {
    type Handle = NodeId;
    type Output = ParseOutput;
    type ElemName<'a>
        = OwnedElemName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        let arena = self.builder.into_inner().finish();
        ParseOutput::new(arena, self.errors.into_inner())
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        let line = self.line.get();
        tracing::trace!("Parse error at line {}: {}", line, msg);
        let mut errors = self.errors.borrow_mut();
        if self.max_errors.is_none_or(|max| errors.len() < max) {
            errors.push(ParseIssue {
                line,
                message: msg.into_owned(),
            });
        }
    }

    fn get_document(&self) -> Self::Handle {
        NodeId::DOCUMENT
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        self.builder.borrow_mut().set_quirks_mode(document_mode(mode));
    }

    fn same_node(&self, a: &Self::Handle, b: &Self::Handle) -> bool {
        a == b
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> OwnedElemName {
        let name = self.names.borrow().get(target).cloned();
        OwnedElemName(name.unwrap_or_else(|| QualName::new(None, ns!(), local_name!(""))))
    }

    fn create_element(&self, name: QualName, attrs: Vec<Attribute>, flags: ElementFlags) -> Self::Handle {
        self.locator.touch();
        let offset = self.locator.element(&name.local);
        let namespace = Namespace::from_url(&name.ns).unwrap_or_default();
        let id = self
            .builder
            .borrow_mut()
            .create_element(&name.local, namespace, flags.template, offset);
        self.add_attributes(id, attrs);
        if flags.mathml_annotation_xml_integration_point {
            self.integration_points.borrow_mut().insert(id);
        }
        self.names.borrow_mut().insert(id, name);
        id
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        self.locator.touch();
        let offset = self.locator.comment();
        self.builder.borrow_mut().create_comment(&text, offset)
    }

    fn create_pi(&self, target: StrTendril, data: StrTendril) -> Self::Handle {
        self.locator.touch();
        let offset = self.locator.comment();
        let content = format!("?{} {}", target, data);
        self.builder.borrow_mut().create_comment(&content, offset)
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        self.locator.touch();
        match child {
            NodeOrText::AppendNode(node) => self.builder.borrow_mut().append(*parent, node),
            NodeOrText::AppendText(text) => self.append_text(*parent, &text),
        }
    }

    fn append_before_sibling(&self, sibling: &Self::Handle, new_node: NodeOrText<Self::Handle>) {
        self.locator.touch();
        match new_node {
            NodeOrText::AppendNode(node) => self.builder.borrow_mut().insert_before(*sibling, node),
            NodeOrText::AppendText(text) => {
                let offset = self.locator.text(&text);
                self.builder.borrow_mut().insert_text_before(*sibling, &text, offset);
            }
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let has_parent = self.builder.borrow().parent(*element).is_some();
        if has_parent {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(&self, name: StrTendril, public_id: StrTendril, system_id: StrTendril) {
        self.locator.touch();
        self.builder.borrow_mut().set_doctype(&name, &public_id, &system_id);
    }

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        // Template contents are the template's own children
        *target
    }

    fn add_attrs_if_missing(&self, target: &Self::Handle, attrs: Vec<Attribute>) {
        self.locator.touch();
        self.add_attributes(*target, attrs);
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.builder.borrow_mut().detach(*target);
    }

    fn reparent_children(&self, node: &Self::Handle, new_parent: &Self::Handle) {
        self.builder.borrow_mut().reparent_children(*node, *new_parent);
    }

    fn pop(&self, _node: &Self::Handle) {
        self.locator.touch();
    }

    fn is_mathml_annotation_xml_integration_point(&self, handle: &Self::Handle) -> bool {
        self.integration_points.borrow().contains(handle)
    }

    fn set_current_line(&self, line_number: u64) {
        self.line.set(line_number);
    }
}
