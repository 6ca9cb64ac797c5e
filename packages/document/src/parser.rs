//! # Markup Parser
//!
//! Reads markup text with `roxmltree` and copies it into the owned, mutable
//! [`Document`] arena. `roxmltree` is read-only, so the parsed tree is only
//! kept long enough to walk it once.
//!
//! Whitespace-only text between elements is indentation and is dropped; the
//! serializer regenerates it. Whitespace-only text in an element that has no
//! element children is data (an all-blank cell) and is kept.

use crate::error::ParseResult;
use crate::node::{Attribute, Document, ElementData, NodeKind};
use indextree::NodeId;
use roxmltree::NodeType;

/// Parse markup text into a document tree
pub fn parse(source: &str) -> ParseResult<Document> {
    Parser::new(source).parse_document()
}

/// Converts a `roxmltree` tree into a [`Document`]
pub struct Parser<'src> {
    source: &'src str,
    options: roxmltree::ParsingOptions,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            options: roxmltree::ParsingOptions {
                allow_dtd: true,
                ..roxmltree::ParsingOptions::default()
            },
        }
    }

    /// Parse a complete document
    pub fn parse_document(self) -> ParseResult<Document> {
        let xml = roxmltree::Document::parse_with_options(self.source, self.options)?;

        let mut doc = Document::new();
        doc.set_declaration(has_declaration(self.source));

        let document_node = doc.document_node();
        for child in xml.root().children() {
            copy_node(&mut doc, document_node, child);
        }

        Ok(doc)
    }
}

fn copy_node(doc: &mut Document, parent: NodeId, node: roxmltree::Node) {
    let kind = match node.node_type() {
        NodeType::Element => NodeKind::Element(element_data(node)),
        NodeType::Text => {
            let text = node.text().unwrap_or_default();
            if is_indentation(node, text) {
                return;
            }
            NodeKind::Text(text.to_string())
        }
        NodeType::Comment => NodeKind::Comment(node.text().unwrap_or_default().to_string()),
        NodeType::PI => match node.pi() {
            Some(pi) => NodeKind::ProcessingInstruction {
                target: pi.target.to_string(),
                value: pi.value.map(str::to_string),
            },
            None => return,
        },
        NodeType::Root => return,
    };

    let id = doc.create_node(kind);
    doc.append_child(parent, id);

    for child in node.children() {
        copy_node(doc, id, child);
    }
}

/// Whitespace between sibling elements, as opposed to a blank text value
fn is_indentation(node: roxmltree::Node, text: &str) -> bool {
    if !text.trim().is_empty() {
        return false;
    }
    match node.parent() {
        // Mixed content keeps every text node, whitespace included
        Some(parent) if parent.is_element() => {
            parent.children().any(|c| c.is_element())
                && !parent
                    .children()
                    .any(|c| c.is_text() && !c.text().unwrap_or_default().trim().is_empty())
        }
        _ => true,
    }
}

fn element_data(node: roxmltree::Node) -> ElementData {
    let tag = node.tag_name();
    let mut data = ElementData::new(qualified_name(node, tag.namespace(), tag.name()));

    // Namespace declarations introduced on this element
    let inherited: Vec<(Option<&str>, &str)> = node
        .parent_element()
        .map(|parent| parent.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
        .unwrap_or_default();
    for ns in node.namespaces() {
        if ns.name() == Some("xml") || inherited.contains(&(ns.name(), ns.uri())) {
            continue;
        }
        let name = match ns.name() {
            Some(prefix) => format!("xmlns:{prefix}"),
            None => "xmlns".to_string(),
        };
        data.attributes.push(Attribute::new(name, ns.uri()));
    }

    for attr in node.attributes() {
        data.attributes.push(Attribute::new(
            qualified_name(node, attr.namespace(), attr.name()),
            attr.value(),
        ));
    }

    data
}

fn qualified_name(node: roxmltree::Node, namespace: Option<&str>, local: &str) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}

fn has_declaration(source: &str) -> bool {
    let rest = source.trim_start_matches('\u{feff}').trim_start();
    match rest.strip_prefix("<?xml") {
        Some(after) => after.starts_with(|c: char| c.is_whitespace() || c == '?'),
        None => false,
    }
}
