//! Error types for the table engine

use std::path::PathBuf;
use tablexml_document::ParseError;
use thiserror::Error;

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("No file path provided")]
    EmptyPath,

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        line: u32,
        column: u32,
        message: String,
    },

    #[error("Invalid structure: {0}")]
    Structure(String),

    #[error("Table not found: {0}")]
    NotFound(String),

    #[error("No document loaded")]
    NotLoaded,

    #[error("Document is not file-backed")]
    NotFileBacked,

    #[error("Row {index} is out of range for table {table} ({len} rows)")]
    RowOutOfRange {
        table: String,
        index: usize,
        len: usize,
    },
}

impl EditorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EditorError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ParseError> for EditorError {
    fn from(e: ParseError) -> Self {
        EditorError::Parse {
            line: e.line,
            column: e.column,
            message: e.message,
        }
    }
}
