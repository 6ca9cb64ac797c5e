//! # tablexml Editor
//!
//! Table editing engine over markup documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: text ⇄ arena tree                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: tables over the tree                │
//! │  - validator: root present, tables counted  │
//! │  - locator: <table name="…"> by name        │
//! │  - extractor: section → Grid                │
//! │  - synthesizer: Grid → rebuilt rows         │
//! │  - engine: load / edit / save lifecycle     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tablexml_editor::Engine;
//!
//! let mut engine = Engine::new();
//! engine.load("database.xml")?;
//!
//! let mut grid = engine.get_table("Users")?;
//! grid.push_row(vec!["3".into(), "Cy".into()]);
//! engine.replace_table("Users", &grid)?;
//!
//! engine.save()?;
//! ```

mod engine;
mod errors;
mod grid;

pub mod extractor;
pub mod locator;
pub mod schema;
pub mod synthesizer;
pub mod validator;

pub use engine::{Engine, SaveOptions};
pub use errors::{EditorError, EditorResult};
pub use grid::{Grid, GridError};
pub use validator::Validation;

// Re-export document types for convenience
pub use tablexml_document::{Document, NodeId};
