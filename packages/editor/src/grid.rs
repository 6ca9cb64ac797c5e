//! # Grid
//!
//! The caller-facing tabular projection of a table section. A Grid is a
//! snapshot: editing it never touches the document until it is written back
//! with `Engine::replace_table`.
//!
//! Rows may be shorter than the header list. Missing trailing cells read as
//! empty and are written back as empty cells; cells past the header count are
//! ignored on write-back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Column headers in positional order
    #[serde(default)]
    pub headers: Vec<String>,

    /// Row values, each in positional order
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Row {index} is out of range ({len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("Column {index} is out of range ({len} columns)")]
    ColumnOutOfRange { index: usize, len: usize },
}

impl Grid {
    /// Create an empty grid with the given headers
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell value; `Some("")` for a position a short row does not reach
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        if column >= self.column_count() {
            return None;
        }
        let values = self.rows.get(row)?;
        Some(values.get(column).map(String::as_str).unwrap_or(""))
    }

    /// Append a row
    pub fn push_row(&mut self, values: Vec<String>) {
        self.rows.push(values);
    }

    /// Remove and return the row at `index`
    pub fn remove_row(&mut self, index: usize) -> Result<Vec<String>, GridError> {
        if index >= self.rows.len() {
            return Err(GridError::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        Ok(self.rows.remove(index))
    }

    /// Set a cell value, padding a short row with empty cells first
    pub fn set_cell(
        &mut self,
        row: usize,
        column: usize,
        value: impl Into<String>,
    ) -> Result<(), GridError> {
        let column_count = self.column_count();
        if column >= column_count {
            return Err(GridError::ColumnOutOfRange {
                index: column,
                len: column_count,
            });
        }
        let len = self.rows.len();
        let values = self
            .rows
            .get_mut(row)
            .ok_or(GridError::RowOutOfRange { index: row, len })?;
        if values.len() <= column {
            values.resize(column + 1, String::new());
        }
        values[column] = value.into();
        Ok(())
    }

    /// Position of the first header equal to `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Grid {
        Grid::with_rows(
            vec!["ID".into(), "Name".into()],
            vec![vec!["1".into(), "Ann".into()], vec!["2".into()]],
        )
    }

    #[test]
    fn test_cell_reads_short_rows_as_empty() {
        let grid = users();
        assert_eq!(grid.cell(0, 1), Some("Ann"));
        assert_eq!(grid.cell(1, 1), Some(""));
        assert_eq!(grid.cell(1, 2), None);
        assert_eq!(grid.cell(5, 0), None);
    }

    #[test]
    fn test_set_cell_pads_short_row() {
        let mut grid = users();
        grid.set_cell(1, 1, "Bo").unwrap();
        assert_eq!(grid.rows[1], vec!["2".to_string(), "Bo".to_string()]);
    }

    #[test]
    fn test_set_cell_rejects_out_of_range() {
        let mut grid = users();
        assert_eq!(
            grid.set_cell(0, 2, "x"),
            Err(GridError::ColumnOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            grid.set_cell(2, 0, "x"),
            Err(GridError::RowOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_push_and_remove_rows() {
        let mut grid = users();
        grid.push_row(vec!["3".into(), "Cy".into()]);
        assert_eq!(grid.row_count(), 3);

        let removed = grid.remove_row(0).unwrap();
        assert_eq!(removed, vec!["1".to_string(), "Ann".to_string()]);
        assert_eq!(grid.cell(1, 1), Some("Cy"));
        assert!(grid.remove_row(2).is_err());
    }

    #[test]
    fn test_json_shape() {
        let grid = users();
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "headers": ["ID", "Name"],
                "rows": [["1", "Ann"], ["2"]]
            })
        );

        let partial: Grid = serde_json::from_str(r#"{ "headers": ["A"] }"#).unwrap();
        assert_eq!(partial, Grid::new(vec!["A".into()]));
    }
}
