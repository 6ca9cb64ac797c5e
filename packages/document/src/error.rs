use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Markup syntax error, positioned at the first offending character
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}, column {column}: {message}")]
pub struct ParseError {
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
    pub message: String,
}

impl ParseError {
    pub fn new(line: u32, column: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}

impl From<roxmltree::Error> for ParseError {
    fn from(err: roxmltree::Error) -> Self {
        let pos = err.pos();
        Self::new(pos.row, pos.col, err.to_string())
    }
}
