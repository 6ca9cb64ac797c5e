//! # Document Tree
//!
//! Arena-backed markup tree. Every node lives in one `indextree::Arena`;
//! parents and children refer to each other by `NodeId`, so removing a row is
//! a detach from the parent's child list rather than pointer surgery.
//!
//! ```text
//! (document)                 ← invisible, owns prolog/epilog + root
//! ├── <!-- comment -->
//! └── <database>             ← root element
//!     └── <table name="…">
//!         └── <row> → <cell name="…">text</cell>
//! ```

use indextree::{Arena, NodeId};

/// Attribute on an element (name is the qualified name as written)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Element data (tag + ordered attributes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    pub tag: String,
    pub attributes: Vec<Attribute>,
}

impl ElementData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Set an attribute, replacing the value in place if the key exists
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|attr| attr.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute::new(name, value)),
        }
    }
}

/// What goes in each arena slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Document node (invisible parent of the root element and misc nodes)
    Document,
    Element(ElementData),
    Text(String),
    Comment(String),
    ProcessingInstruction {
        target: String,
        value: Option<String>,
    },
}

/// In-memory markup document
#[derive(Debug, Clone)]
pub struct Document {
    arena: Arena<NodeKind>,
    document: NodeId,
    declaration: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document with no root element
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let document = arena.new_node(NodeKind::Document);
        Self {
            arena,
            document,
            declaration: false,
        }
    }

    /// The invisible document node
    pub fn document_node(&self) -> NodeId {
        self.document
    }

    /// The single root element, if any
    pub fn root(&self) -> Option<NodeId> {
        self.children(self.document)
            .find(|&id| matches!(self.kind(id), NodeKind::Element(_)))
    }

    /// Whether the source carried an `<?xml …?>` declaration
    pub fn has_declaration(&self) -> bool {
        self.declaration
    }

    pub fn set_declaration(&mut self, declaration: bool) {
        self.declaration = declaration;
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        self.arena[id].get()
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.kind(id) {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match self.arena[id].get_mut() {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|data| data.tag.as_str())
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|data| data.attribute(name))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent()
    }

    /// Direct children in document order
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.arena)
    }

    /// All descendants in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.descendants(&self.arena).skip(1)
    }

    /// Descendant elements with the given tag, in document order
    pub fn elements_by_tag<'a>(
        &'a self,
        id: NodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(id)
            .filter(move |&child| self.tag(child) == Some(tag))
    }

    /// Concatenation of the node's direct text children
    pub fn text(&self, id: NodeId) -> String {
        self.children(id)
            .filter_map(|child| match self.kind(child) {
                NodeKind::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn create_element(&mut self, data: ElementData) -> NodeId {
        self.arena.new_node(NodeKind::Element(data))
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.arena.new_node(NodeKind::Text(text.into()))
    }

    pub fn create_node(&mut self, kind: NodeKind) -> NodeId {
        self.arena.new_node(kind)
    }

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        parent.append(child, &mut self.arena);
    }

    /// Detach a node (and its subtree) from its parent and free its slots
    pub fn remove(&mut self, id: NodeId) {
        id.remove_subtree(&mut self.arena);
    }

    /// Number of live nodes, including the document node
    pub fn node_count(&self) -> usize {
        self.arena.iter().filter(|node| !node.is_removed()).count()
    }
}
