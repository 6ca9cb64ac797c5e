//! # Table Extractor
//!
//! Read-only projection of a table section into a [`Grid`].
//!
//! Headers come from the first row only. Every row, including the first,
//! contributes values up to the header count; extra cells are dropped and
//! short rows are left short.

use crate::grid::Grid;
use crate::locator::{cell_sections, row_sections};
use crate::schema::{placeholder_header, NAME_ATTR};
use tablexml_document::{Document, NodeId};

/// Column headers from the first row of the section
pub fn extract_headers(doc: &Document, section: NodeId) -> Vec<String> {
    let Some(first_row) = row_sections(doc, section).next() else {
        return Vec::new();
    };

    cell_sections(doc, first_row)
        .enumerate()
        .map(|(index, cell)| match doc.attribute(cell, NAME_ATTR) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => placeholder_header(index),
        })
        .collect()
}

/// Cell values of every row, truncated to `column_count`
pub fn extract_rows(doc: &Document, section: NodeId, column_count: usize) -> Vec<Vec<String>> {
    row_sections(doc, section)
        .map(|row| {
            cell_sections(doc, row)
                .take(column_count)
                .map(|cell| doc.text(cell))
                .collect()
        })
        .collect()
}

pub fn extract_grid(doc: &Document, section: NodeId) -> Grid {
    let headers = extract_headers(doc, section);
    let rows = extract_rows(doc, section, headers.len());
    Grid::with_rows(headers, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::find_table;
    use tablexml_document::parse;

    fn grid_of(source: &str) -> Grid {
        let doc = parse(source).unwrap();
        let table = find_table(&doc, "T").unwrap();
        extract_grid(&doc, table)
    }

    #[test]
    fn test_headers_from_first_row_only() {
        let grid = grid_of(
            r#"<db><table name="T">
                <row><cell name="A">1</cell><cell name="B">2</cell></row>
                <row><cell name="X">3</cell><cell name="Y">4</cell></row>
            </table></db>"#,
        );
        assert_eq!(grid.headers, vec!["A", "B"]);
        assert_eq!(grid.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn test_unnamed_cells_get_placeholders() {
        let grid = grid_of(
            r#"<db><table name="T"><row><cell>1</cell><cell name="">2</cell><cell name="C">3</cell></row></table></db>"#,
        );
        assert_eq!(grid.headers, vec!["Column_1", "Column_2", "C"]);
    }

    #[test]
    fn test_ragged_rows() {
        let grid = grid_of(
            r#"<db><table name="T">
                <row><cell name="A">1</cell><cell name="B">2</cell></row>
                <row><cell>3</cell></row>
                <row><cell>4</cell><cell>5</cell><cell>6</cell></row>
            </table></db>"#,
        );
        assert_eq!(grid.rows[1], vec!["3"]);
        assert_eq!(grid.rows[2], vec!["4", "5"]);
        assert_eq!(grid.cell(1, 1), Some(""));
    }

    #[test]
    fn test_no_rows_means_no_headers() {
        let grid = grid_of(r#"<db><table name="T"/></db>"#);
        assert!(grid.headers.is_empty());
        assert!(grid.rows.is_empty());
    }

    #[test]
    fn test_missing_text_reads_as_empty() {
        let grid = grid_of(r#"<db><table name="T"><row><cell name="A"/></row></table></db>"#);
        assert_eq!(grid.rows, vec![vec![String::new()]]);
    }
}
