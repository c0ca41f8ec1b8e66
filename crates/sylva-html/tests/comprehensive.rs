//! Comprehensive tests for sylva-html
//!
//! Walks a complete XHTML-flavoured document and checks every view kind.

use sylva_html::{AttrNamespace, DomError, Namespace, Node, NodeType, ParseOutput, TAG_NAMESPACES, parse};

const HTML: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN"
    "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">
<!-- top-level-comment -->
<html xmlns="http://www.w3.org/1999/xhtml/" xml:lang="en" lang="en-us">
<head>
    <meta charset="UTF-8">
    <title>Lorem Ipsum</title>
</head>
<body>
    <!-- body comment -->
    <h1>Lorem Ipsum</h1>
    <p id="p1" class="foo">Lorem ipsum dolor sit amet, consectetur adipiscing elit.</p>
    <p id="p2" class="bar">
        <strong>Fusce sed enim ac urna<br>tincidunt egestas sed nec urna.</strong>
    </p>
    <p id="p3" class="cdata"><![CDATA[Sed efficitur bibendum euismod.]]></p>
    <p xmlns:xlink="http://www.w3.org/xlink" class="namespace" xlink:href="http://www.google.com">
        This is used to test attribute namespaces.
    </p>
</body>
</html>"#;

fn output() -> ParseOutput {
    parse(HTML).expect("fixture parses")
}

fn child<'a>(node: Node<'a>, index: usize) -> Node<'a> {
    node.children().unwrap().get(index).unwrap()
}

// ============================================================================
// Document
// ============================================================================

#[test]
fn test_document() {
    let output = output();
    let document = output.document();

    assert_eq!(document.parent(), None);
    assert!(document.is_tag());
    assert_eq!(document.node_type(), NodeType::Document);
    assert_eq!(document.offset(), 0);
    assert_eq!(document.to_string(), "<!DOCTYPE html>");

    let doc = document.as_document().unwrap();
    assert!(doc.has_doctype());
    assert_eq!(doc.name(), "html");
    assert_eq!(doc.public_identifier(), "-//W3C//DTD XHTML 1.1//EN");
    assert_eq!(doc.system_identifier(), "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd");
}

#[test]
fn test_document_children() {
    let output = output();
    let children = output.document().children().unwrap();

    // The doctype is not a child node
    assert_eq!(children.len(), 2);
    let comment = children.get(0).unwrap();
    assert_eq!(comment.node_type(), NodeType::Comment);
    assert_eq!(comment.text().unwrap(), " top-level-comment ");
    assert_eq!(comment.offset(), 102);
    assert_eq!(children.get(1).unwrap(), output.root());
}

// ============================================================================
// Root element
// ============================================================================

#[test]
fn test_tag() {
    let output = output();
    let root = output.root();

    assert_eq!(root.parent(), Some(output.document()));
    assert!(root.is_tag());
    assert_eq!(root.node_type(), NodeType::Element);
    assert_eq!(root.tag_name().unwrap(), "html");
    assert!(!root.attributes().unwrap().is_empty());
    assert!(!root.children().unwrap().is_empty());
    assert_eq!(root.offset(), 129);
    assert_eq!(root.to_string(), "<html>");

    let element = root.as_element().unwrap();
    assert_eq!(element.namespace(), Namespace::Html);
    assert_eq!(TAG_NAMESPACES[element.namespace().code() as usize], "http://www.w3.org/1999/xhtml");
}

#[test]
fn test_attributes() {
    let output = output();
    let attributes = output.root().attributes().unwrap();

    let lang = attributes.attribute("lang").unwrap();
    assert_eq!(lang.name, "lang");
    assert_eq!(lang.value, "en-us");
    assert_eq!(lang.namespace, AttrNamespace::None);
    assert!(attributes.contains("lang"));
    assert!(!attributes.contains("foo"));
    assert_eq!(
        attributes.get_required("foo").unwrap_err(),
        DomError::AttributeNotFound { name: "foo".into() }
    );
    assert_eq!(attributes.len(), 3);
    assert!(attributes.iter().next().is_some());

    let map = attributes.as_map();
    assert_eq!(map.len(), 3);
    assert_eq!(map["xmlns"], "http://www.w3.org/1999/xhtml/");
    assert_eq!(map["xml:lang"], "en");
    assert_eq!(map["lang"], "en-us");
}

#[test]
fn test_children() {
    let output = output();
    let children = output.root().children().unwrap();

    // head, whitespace, body
    assert_eq!(children.len(), 3);
    assert_eq!(children.get(1).unwrap().node_type(), NodeType::Whitespace);
    assert!(children.iter().next().is_some());
    assert_eq!(children.get(0).unwrap().offset(), 201);
    assert_eq!(children.get(2).unwrap().offset(), 274);
}

// ============================================================================
// Head
// ============================================================================

#[test]
fn test_head_elements() {
    let output = output();
    let head = child(output.root(), 0);
    let tags: Vec<_> = head
        .children()
        .unwrap()
        .iter()
        .filter(|n| n.is_tag())
        .map(|n| (n.tag_name().unwrap(), n.offset()))
        .collect();
    assert_eq!(tags, [("meta", 212), ("title", 239)]);

    let title = head.children().unwrap().elements().nth(1).unwrap();
    assert_eq!(title.text(), Some("Lorem Ipsum"));
    assert_eq!(title.children().get(0).unwrap().offset(), 246);
}

// ============================================================================
// Body content
// ============================================================================

#[test]
fn test_text() {
    let output = output();
    let body = child(output.root(), 2);
    let h1 = child(body, 3);
    let text = child(h1, 0);

    assert!(text.parent().is_some());
    assert!(!text.is_tag());
    assert_eq!(text.node_type(), NodeType::Text);
    assert_eq!(text.text().unwrap(), "Lorem Ipsum");
    assert_eq!(text.to_string(), "Lorem Ipsum");
    assert_eq!(text.offset(), 315);
    assert_eq!(h1.offset(), 311);
    assert_eq!(h1.as_element().unwrap().text(), Some("Lorem Ipsum"));
}

#[test]
fn test_comment() {
    let output = output();
    let comment = child(child(output.root(), 2), 1);

    assert_eq!(comment.node_type(), NodeType::Comment);
    assert_eq!(comment.text().unwrap(), " body comment ");
    assert_eq!(comment.to_string(), "<!-- body comment -->");
    assert_eq!(comment.offset(), 285);
}

#[test]
fn test_cdata_in_html_content_is_a_comment() {
    let output = output();
    let p3 = child(child(output.root(), 2), 9);
    assert_eq!(p3.attributes().unwrap().get("id"), Some("p3"));

    let bogus = child(p3, 0);
    assert_eq!(bogus.node_type(), NodeType::Comment);
    assert_eq!(bogus.text().unwrap(), "[CDATA[Sed efficitur bibendum euismod.]]");
    assert_eq!(bogus.offset(), 569);
}

#[test]
fn test_attributes_with_namespace() {
    let output = output();
    let p = child(child(output.root(), 2), 11);
    let attributes = p.attributes().unwrap();

    assert_eq!(attributes.len(), 3);
    let names: Vec<_> = attributes.iter().map(|a| a.name).collect();
    assert_eq!(names, ["xmlns:xlink", "class", "xlink:href"]);
    // Attributes of HTML elements are never namespace-adjusted
    assert!(attributes.iter().all(|a| a.namespace == AttrNamespace::None));
    assert_eq!(p.offset(), 621);
    assert_eq!(child(p, 0).offset(), 715);
}

#[test]
fn test_nested_inline() {
    let output = output();
    let p2 = child(child(output.root(), 2), 7);
    let strong = p2.children().unwrap().elements().next().unwrap();
    assert_eq!(strong.tag_name(), "strong");
    assert_eq!(strong.offset(), 456);

    let parts: Vec<_> = strong.children().iter().map(|n| n.to_string()).collect();
    assert_eq!(parts, ["Fusce sed enim ac urna", "<br>", "tincidunt egestas sed nec urna."]);
    assert_eq!(strong.children().get(0).unwrap().offset(), 464);
    assert_eq!(strong.children().get(1).unwrap().offset(), 486);
    // More than one child: no single text
    assert_eq!(strong.text(), None);
}

// ============================================================================
// Whole-tree views
// ============================================================================

#[test]
fn test_nodes_by_offset() {
    let output = output();
    let nodes = output.nodes_by_offset();

    assert_eq!(nodes.len(), output.document().descendants().count());
    assert!(nodes.windows(2).all(|w| w[0].offset() <= w[1].offset()));
    assert_eq!(nodes[0].node_type(), NodeType::Comment);
    assert_eq!(nodes[1], output.root());
}

#[test]
fn test_markup_errors_are_recorded() {
    let output = output();
    // The XHTML 1.1 doctype is legal markup but not the HTML5 doctype
    assert!(!output.errors().is_empty());
    assert!(output.errors().iter().all(|e| e.line >= 1 && !e.message.is_empty()));
}
