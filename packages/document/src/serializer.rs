use crate::node::{Document, ElementData, NodeKind};
use indextree::NodeId;

/// Serializer renders a Document back to markup text
///
/// Output formatting is fixed and independent of the source layout:
/// - each element starts on its own line, nested by `indent_string`
/// - elements holding any non-whitespace text are written inline with their
///   whole subtree untouched (`<cell>1</cell>`, `<cell>a<b>y</b>c</cell>`)
/// - childless elements are self-closing (`<cell/>`)
///
/// Comments and processing instructions are written where they were found.
pub struct Serializer {
    indent_string: String,
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer {
    pub fn new() -> Self {
        Self::with_indent_width(4)
    }

    pub fn with_indent_width(width: usize) -> Self {
        Self {
            indent_string: " ".repeat(width),
        }
    }

    /// Serialize a Document to markup text
    pub fn serialize(&self, doc: &Document) -> String {
        let mut output = String::new();

        if doc.has_declaration() {
            output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        }

        for child in doc.children(doc.document_node()) {
            self.serialize_node(doc, child, 0, &mut output);
        }

        output
    }

    fn serialize_node(&self, doc: &Document, id: NodeId, depth: usize, output: &mut String) {
        match doc.kind(id) {
            NodeKind::Document => {}
            NodeKind::Element(data) => self.serialize_element(doc, id, data, depth, output),
            // Only indentation reaches block layout
            NodeKind::Text(_) => {}
            NodeKind::Comment(text) => {
                self.write_indent(depth, output);
                output.push_str("<!--");
                output.push_str(text);
                output.push_str("-->\n");
            }
            NodeKind::ProcessingInstruction { target, value } => {
                self.write_indent(depth, output);
                output.push_str("<?");
                output.push_str(target);
                if let Some(value) = value {
                    output.push(' ');
                    output.push_str(value);
                }
                output.push_str("?>\n");
            }
        }
    }

    fn serialize_element(
        &self,
        doc: &Document,
        id: NodeId,
        data: &ElementData,
        depth: usize,
        output: &mut String,
    ) {
        self.write_indent(depth, output);
        write_start_tag(data, output);

        let children: Vec<NodeId> = doc.children(id).collect();
        if children.is_empty() {
            output.push_str("/>\n");
            return;
        }

        output.push('>');
        if writes_inline(doc, &children) {
            // Text content is data; indentation here would change it on reload
            for child in children {
                write_inline(doc, child, output);
            }
        } else {
            output.push('\n');
            for child in children {
                self.serialize_node(doc, child, depth + 1, output);
            }
            self.write_indent(depth, output);
        }

        output.push_str("</");
        output.push_str(&data.tag);
        output.push_str(">\n");
    }

    fn write_indent(&self, depth: usize, output: &mut String) {
        for _ in 0..depth {
            output.push_str(&self.indent_string);
        }
    }
}

/// Serialize a Document with the default 4-space indentation
pub fn serialize(doc: &Document) -> String {
    Serializer::new().serialize(doc)
}

/// Inline unless the element has element children and no real text.
/// Whitespace-only text between elements is dropped by the parser, so the
/// block layout reparses to the same tree.
fn writes_inline(doc: &Document, children: &[NodeId]) -> bool {
    let mut has_element = false;
    for &child in children {
        match doc.kind(child) {
            NodeKind::Text(text) if !text.trim().is_empty() => return true,
            NodeKind::Element(_) => has_element = true,
            _ => {}
        }
    }
    !has_element
}

fn write_start_tag(data: &ElementData, output: &mut String) {
    output.push('<');
    output.push_str(&data.tag);
    for attr in &data.attributes {
        output.push(' ');
        output.push_str(&attr.name);
        output.push_str("=\"");
        escape_attribute(&attr.value, output);
        output.push('"');
    }
}

/// Write a node and its subtree exactly, with no added whitespace
fn write_inline(doc: &Document, id: NodeId, output: &mut String) {
    match doc.kind(id) {
        NodeKind::Document => {}
        NodeKind::Element(data) => {
            write_start_tag(data, output);
            let mut children = doc.children(id).peekable();
            if children.peek().is_none() {
                output.push_str("/>");
                return;
            }
            output.push('>');
            for child in children {
                write_inline(doc, child, output);
            }
            output.push_str("</");
            output.push_str(&data.tag);
            output.push('>');
        }
        NodeKind::Text(text) => escape_text(text, output),
        NodeKind::Comment(text) => {
            output.push_str("<!--");
            output.push_str(text);
            output.push_str("-->");
        }
        NodeKind::ProcessingInstruction { target, value } => {
            output.push_str("<?");
            output.push_str(target);
            if let Some(value) = value {
                output.push(' ');
                output.push_str(value);
            }
            output.push_str("?>");
        }
    }
}

fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '\r' => output.push_str("&#13;"),
            _ => output.push(c),
        }
    }
}

fn escape_attribute(value: &str, output: &mut String) {
    for c in value.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\n' => output.push_str("&#10;"),
            '\t' => output.push_str("&#9;"),
            '\r' => output.push_str("&#13;"),
            _ => output.push(c),
        }
    }
}
