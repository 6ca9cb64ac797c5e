//! # Document Engine
//!
//! Owns the single open document and coordinates parse, validation, table
//! lookup, extraction, synthesis and serialization.
//!
//! ## Lifecycle
//!
//! ```text
//!            load ok                 load ok (replaces document)
//! NoDocument ───────▶ Loaded ◀──────┐
//!     ▲ load err          │ load err └─ state and document unchanged
//!     └───────────────────┘
//! ```
//!
//! Edits (`replace_table`, `add_row`, `delete_row`) only touch the in-memory
//! tree; `save` writes the whole document back to the path it came from.

use crate::errors::{EditorError, EditorResult};
use crate::extractor::{extract_grid, extract_headers};
use crate::grid::Grid;
use crate::locator::{find_table, row_sections, table_names};
use crate::schema::placeholder_header;
use crate::synthesizer::{build_row, synthesize};
use crate::validator::validate;
use std::io::Write;
use std::path::{Path, PathBuf};
use tablexml_document::{parse, Document, NodeId, Serializer};
use tracing::{debug, info, instrument, warn};

/// How `save` writes the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// Spaces per nesting level
    pub indent_width: usize,

    /// Write to a temporary file and rename it over the target
    pub atomic: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            atomic: true,
        }
    }
}

/// The currently open document
#[derive(Debug)]
struct OpenDocument {
    /// Source path; `None` for documents loaded from a string
    path: Option<PathBuf>,
    document: Document,
    tables: Vec<String>,
    dirty: bool,
}

/// Table editing engine
#[derive(Debug, Default)]
pub struct Engine {
    open: Option<OpenDocument>,
    options: SaveOptions,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SaveOptions) -> Self {
        Self {
            open: None,
            options,
        }
    }

    /// Load and validate a file, replacing any open document
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(&mut self, path: impl AsRef<Path>) -> EditorResult<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(EditorError::EmptyPath);
        }

        let source = std::fs::read_to_string(path).map_err(|e| EditorError::io(path, e))?;
        let open = Self::open(&source, Some(path.to_path_buf()))?;

        info!(tables = open.tables.len(), "Loaded document");
        self.open = Some(open);
        Ok(())
    }

    /// Load a memory-backed document from markup text
    pub fn load_str(&mut self, source: &str) -> EditorResult<()> {
        let open = Self::open(source, None)?;

        info!(tables = open.tables.len(), "Loaded document from memory");
        self.open = Some(open);
        Ok(())
    }

    fn open(source: &str, path: Option<PathBuf>) -> EditorResult<OpenDocument> {
        let document = parse(source).inspect_err(|e| {
            warn!(line = e.line, column = e.column, message = %e.message, "Markup parsing failed");
        })?;

        let validation = validate(&document)?;
        debug!(root = %validation.root_tag, "Structure validation passed");
        if !validation.has_tables() {
            warn!("No table elements found");
        }

        let tables = table_names(&document);
        debug!(?tables, "Indexed tables");

        Ok(OpenDocument {
            path,
            document,
            tables,
            dirty: false,
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.open.is_some()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.open.as_ref().and_then(|open| open.path.as_deref())
    }

    /// Whether the open document has edits not yet saved
    pub fn is_dirty(&self) -> bool {
        self.open.as_ref().is_some_and(|open| open.dirty)
    }

    /// Names of all named tables, in document order (empty when nothing is loaded)
    pub fn list_tables(&self) -> &[String] {
        self.open
            .as_ref()
            .map(|open| open.tables.as_slice())
            .unwrap_or_default()
    }

    /// The open document tree
    pub fn document(&self) -> Option<&Document> {
        self.open.as_ref().map(|open| &open.document)
    }

    /// Extract a table as a grid snapshot
    pub fn get_table(&self, name: &str) -> EditorResult<Grid> {
        let open = self.open.as_ref().ok_or(EditorError::NotLoaded)?;
        let section = locate(&open.document, name)?;

        let grid = extract_grid(&open.document, section);
        debug!(table = name, columns = grid.column_count(), rows = grid.row_count(), "Extracted table");
        Ok(grid)
    }

    /// Rebuild a table's rows from a grid
    pub fn replace_table(&mut self, name: &str, grid: &Grid) -> EditorResult<()> {
        let open = self.open.as_mut().ok_or(EditorError::NotLoaded)?;
        let section = locate(&open.document, name)?;

        synthesize(&mut open.document, section, grid);
        open.dirty = true;

        debug!(table = name, columns = grid.column_count(), rows = grid.row_count(), "Replaced table");
        Ok(())
    }

    /// Append one row, shaped by the table's current headers
    pub fn add_row(&mut self, name: &str, values: &[String]) -> EditorResult<()> {
        let open = self.open.as_mut().ok_or(EditorError::NotLoaded)?;
        let section = locate(&open.document, name)?;

        let mut headers = extract_headers(&open.document, section);
        if headers.is_empty() {
            headers = (0..values.len()).map(placeholder_header).collect();
        }

        let row = build_row(&mut open.document, &headers, values);
        open.document.append_child(section, row);
        open.dirty = true;

        debug!(table = name, columns = headers.len(), "Added row");
        Ok(())
    }

    /// Delete the `index`-th row (0-based, document order)
    pub fn delete_row(&mut self, name: &str, index: usize) -> EditorResult<()> {
        let open = self.open.as_mut().ok_or(EditorError::NotLoaded)?;
        let section = locate(&open.document, name)?;

        let rows: Vec<NodeId> = row_sections(&open.document, section).collect();
        let row = rows
            .get(index)
            .copied()
            .ok_or_else(|| EditorError::RowOutOfRange {
                table: name.to_string(),
                index,
                len: rows.len(),
            })?;

        open.document.remove(row);
        open.dirty = true;

        debug!(table = name, index, "Deleted row");
        Ok(())
    }

    /// Render the open document as markup without touching disk
    pub fn to_markup(&self) -> EditorResult<String> {
        let open = self.open.as_ref().ok_or(EditorError::NotLoaded)?;
        Ok(self.serializer().serialize(&open.document))
    }

    /// Write the open document back to its source path
    #[instrument(skip_all, fields(path = ?self.current_path()))]
    pub fn save(&mut self) -> EditorResult<()> {
        let options = self.options;
        let markup = self.to_markup()?;
        let open = self.open.as_mut().ok_or(EditorError::NotLoaded)?;
        let path = open.path.as_deref().ok_or(EditorError::NotFileBacked)?;

        if options.atomic {
            write_atomic(path, markup.as_bytes())?;
        } else {
            std::fs::write(path, &markup).map_err(|e| EditorError::io(path, e))?;
        }

        open.dirty = false;
        info!(bytes = markup.len(), "Saved document");
        Ok(())
    }

    fn serializer(&self) -> Serializer {
        Serializer::with_indent_width(self.options.indent_width)
    }
}

fn locate(doc: &Document, name: &str) -> EditorResult<NodeId> {
    find_table(doc, name).ok_or_else(|| {
        warn!(table = name, "Table not found");
        EditorError::NotFound(name.to_string())
    })
}

/// Write to a sibling temporary file, then rename it over `path`
fn write_atomic(path: &Path, contents: &[u8]) -> EditorResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| EditorError::io(path, e))?;
    if let Ok(metadata) = std::fs::metadata(path) {
        file.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| EditorError::io(path, e))?;
    }
    file.write_all(contents)
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| EditorError::io(path, e))?;
    file.persist(path).map_err(|e| EditorError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const USERS: &str = r#"<database>
        <table name="Users">
            <row><cell name="ID">1</cell><cell name="Name">Ann</cell></row>
        </table>
    </database>"#;

    fn loaded() -> Engine {
        let mut engine = Engine::new();
        engine.load_str(USERS).unwrap();
        engine
    }

    #[test]
    fn test_new_engine_has_no_document() {
        let engine = Engine::new();
        assert!(!engine.is_loaded());
        assert!(engine.current_path().is_none());
        assert!(engine.list_tables().is_empty());
        assert!(!engine.is_dirty());
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let mut engine = Engine::new();
        assert!(matches!(engine.load(""), Err(EditorError::EmptyPath)));
    }

    #[test]
    fn test_operations_require_a_document() {
        let mut engine = Engine::new();
        assert!(matches!(engine.get_table("Users"), Err(EditorError::NotLoaded)));
        assert!(matches!(
            engine.replace_table("Users", &Grid::default()),
            Err(EditorError::NotLoaded)
        ));
        assert!(matches!(engine.add_row("Users", &[]), Err(EditorError::NotLoaded)));
        assert!(matches!(engine.delete_row("Users", 0), Err(EditorError::NotLoaded)));
        assert!(matches!(engine.save(), Err(EditorError::NotLoaded)));
        assert!(!engine.is_loaded());
    }

    #[test]
    fn test_memory_document_cannot_be_saved() {
        let mut engine = loaded();
        assert!(matches!(engine.save(), Err(EditorError::NotFileBacked)));
    }

    #[test]
    fn test_failed_load_keeps_previous_document() {
        let mut engine = loaded();
        let err = engine.load_str("<database><table></database>").unwrap_err();
        assert!(matches!(err, EditorError::Parse { line: 1, .. }));

        assert!(engine.is_loaded());
        assert_eq!(engine.list_tables(), ["Users"]);
    }

    #[test]
    fn test_edits_mark_dirty() {
        let mut engine = loaded();
        assert!(!engine.is_dirty());

        engine.add_row("Users", &["2".into(), "Bo".into()]).unwrap();
        assert!(engine.is_dirty());

        engine.load_str(USERS).unwrap();
        assert!(!engine.is_dirty());
    }

    #[test]
    fn test_not_found_does_not_mutate() {
        let mut engine = loaded();
        let before = engine.to_markup().unwrap();

        let grid = Grid::new(vec!["X".into()]);
        assert!(matches!(
            engine.replace_table("Orders", &grid),
            Err(EditorError::NotFound(name)) if name == "Orders"
        ));
        assert_eq!(engine.to_markup().unwrap(), before);
        assert!(!engine.is_dirty());
    }

    #[test]
    fn test_add_row_uses_existing_headers() {
        let mut engine = loaded();
        engine.add_row("Users", &["2".into()]).unwrap();

        let grid = engine.get_table("Users").unwrap();
        assert_eq!(grid.headers, vec!["ID", "Name"]);
        assert_eq!(grid.rows[1], vec!["2", ""]);
    }

    #[test]
    fn test_add_row_to_empty_table_uses_placeholders() {
        let mut engine = Engine::new();
        engine.load_str(r#"<database><table name="T"/></database>"#).unwrap();
        engine.add_row("T", &["a".into(), "b".into()]).unwrap();

        let grid = engine.get_table("T").unwrap();
        assert_eq!(grid.headers, vec!["Column_1", "Column_2"]);
        assert_eq!(grid.rows, vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_delete_row() {
        let mut engine = loaded();
        engine.add_row("Users", &["2".into(), "Bo".into()]).unwrap();

        engine.delete_row("Users", 0).unwrap();
        let grid = engine.get_table("Users").unwrap();
        assert_eq!(grid.rows, vec![vec!["2", "Bo"]]);

        assert!(matches!(
            engine.delete_row("Users", 1),
            Err(EditorError::RowOutOfRange { index: 1, len: 1, .. })
        ));
    }

    #[test]
    fn test_indent_width_option() {
        let mut engine = Engine::with_options(SaveOptions {
            indent_width: 2,
            atomic: false,
        });
        engine.load_str("<database><table name=\"T\"/></database>").unwrap();
        assert_eq!(
            engine.to_markup().unwrap(),
            "<database>\n  <table name=\"T\"/>\n</database>\n"
        );
    }
}
