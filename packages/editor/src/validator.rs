//! Minimal structural checks run after every successful parse.
//!
//! Only a missing root element is fatal. A document without any table
//! sections is valid; the engine logs it and exposes an empty table list.

use crate::errors::{EditorError, EditorResult};
use crate::locator::table_sections;
use crate::schema::ROOT_TAG;
use tablexml_document::{Document, NodeId};
use tracing::debug;

/// Outcome of a successful structural check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub root: NodeId,
    pub root_tag: String,
    pub table_count: usize,
}

impl Validation {
    pub fn has_tables(&self) -> bool {
        self.table_count > 0
    }
}

pub fn validate(doc: &Document) -> EditorResult<Validation> {
    let root = doc
        .root()
        .ok_or_else(|| EditorError::Structure("no root element found".to_string()))?;
    let root_tag = doc.tag(root).unwrap_or_default().to_string();

    if root_tag != ROOT_TAG {
        debug!(root = %root_tag, expected = ROOT_TAG, "Accepting non-standard root element");
    }

    Ok(Validation {
        root,
        root_tag,
        table_count: table_sections(doc).count(),
    })
}
