//! # tablexml Document
//!
//! Markup document model, parser and serializer.
//!
//! ```text
//! text ──parse──▶ Document (arena tree) ──serialize──▶ text
//! ```
//!
//! The tree is fully owned and mutable; the table engine in
//! `tablexml-editor` edits it in place between load and save.

pub mod error;
pub mod node;
pub mod parser;
pub mod serializer;

pub use error::{ParseError, ParseResult};
pub use indextree::NodeId;
pub use node::{Attribute, Document, ElementData, NodeKind};
pub use parser::{parse, Parser};
pub use serializer::{serialize, Serializer};
