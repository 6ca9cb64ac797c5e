//! # Table Synthesizer
//!
//! Rebuilds a table section's rows from a [`Grid`]. This is a full replace:
//! every existing row is removed and one new row is created per grid row.
//! The section element itself (tag, attributes, non-row children) is left
//! alone.

use crate::grid::Grid;
use crate::locator::row_sections;
use crate::schema::{placeholder_header, CELL_TAG, NAME_ATTR, ROW_TAG};
use tablexml_document::{Document, ElementData, NodeId};

/// Headers to write: the grid's own, with empty ones replaced by placeholders
pub fn resolve_headers(grid: &Grid) -> Vec<String> {
    grid.headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            if header.is_empty() {
                placeholder_header(index)
            } else {
                header.clone()
            }
        })
        .collect()
}

/// Remove every row in the section's subtree; returns how many were removed
pub fn clear_rows(doc: &mut Document, section: NodeId) -> usize {
    let rows: Vec<NodeId> = row_sections(doc, section).collect();
    // A row nested in another row goes away with its ancestor
    let outermost: Vec<NodeId> = rows
        .iter()
        .copied()
        .filter(|&row| !has_row_ancestor(doc, row, section))
        .collect();
    for row in outermost {
        doc.remove(row);
    }
    rows.len()
}

fn has_row_ancestor(doc: &Document, node: NodeId, section: NodeId) -> bool {
    let mut current = doc.parent(node);
    while let Some(id) = current {
        if id == section {
            return false;
        }
        if doc.tag(id) == Some(ROW_TAG) {
            return true;
        }
        current = doc.parent(id);
    }
    false
}

/// Create a detached row with one named cell per header
pub fn build_row(doc: &mut Document, headers: &[String], values: &[String]) -> NodeId {
    let row = doc.create_element(ElementData::new(ROW_TAG));

    for (index, header) in headers.iter().enumerate() {
        let mut data = ElementData::new(CELL_TAG);
        data.set_attribute(NAME_ATTR, header.as_str());
        let cell = doc.create_element(data);

        let value = values.get(index).map(String::as_str).unwrap_or("");
        if !value.is_empty() {
            let text = doc.create_text(value);
            doc.append_child(cell, text);
        }
        doc.append_child(row, cell);
    }

    row
}

/// Replace the section's rows with the grid's content
pub fn synthesize(doc: &mut Document, section: NodeId, grid: &Grid) {
    let headers = resolve_headers(grid);
    clear_rows(doc, section);

    for values in &grid.rows {
        let row = build_row(doc, &headers, values);
        doc.append_child(section, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract_grid;
    use crate::locator::find_table;
    use tablexml_document::{parse, serialize};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_resolve_headers_fills_blanks() {
        let grid = Grid::new(strings(&["ID", "", "Name"]));
        assert_eq!(resolve_headers(&grid), strings(&["ID", "Column_2", "Name"]));
    }

    #[test]
    fn test_build_row_pads_missing_values() {
        let mut doc = Document::new();
        let row = build_row(&mut doc, &strings(&["A", "B"]), &strings(&["1"]));
        let cells: Vec<_> = doc.children(row).collect();
        assert_eq!(cells.len(), 2);
        assert_eq!(doc.attribute(cells[1], "name"), Some("B"));
        assert_eq!(doc.text(cells[1]), "");
    }

    #[test]
    fn test_clear_rows_removes_all_rows() {
        let mut doc = parse(
            r#"<db><table name="T"><row/><row/><rows><row/></rows><note>keep</note></table></db>"#,
        )
        .unwrap();
        let table = find_table(&doc, "T").unwrap();

        assert_eq!(clear_rows(&mut doc, table), 3);
        assert_eq!(row_sections(&doc, table).count(), 0);
        assert!(doc.elements_by_tag(table, "note").next().is_some());
    }

    #[test]
    fn test_synthesize_keeps_section_identity() {
        let mut doc = parse(
            r#"<db><table name="T" owner="ops"><row><cell name="Old">x</cell></row></table></db>"#,
        )
        .unwrap();
        let table = find_table(&doc, "T").unwrap();
        let grid = Grid::with_rows(strings(&["A", "B"]), vec![strings(&["1", "2"])]);

        synthesize(&mut doc, table, &grid);

        assert_eq!(
            serialize(&doc),
            "<db>\n    <table name=\"T\" owner=\"ops\">\n        <row>\n            <cell name=\"A\">1</cell>\n            <cell name=\"B\">2</cell>\n        </row>\n    </table>\n</db>\n"
        );
        assert_eq!(extract_grid(&doc, table), grid);
    }

    #[test]
    fn test_synthesize_drops_values_past_header_count() {
        let mut doc = parse(r#"<db><table name="T"/></db>"#).unwrap();
        let table = find_table(&doc, "T").unwrap();
        let grid = Grid::with_rows(strings(&["A"]), vec![strings(&["1", "extra"])]);

        synthesize(&mut doc, table, &grid);

        assert_eq!(extract_grid(&doc, table).rows, vec![strings(&["1"])]);
    }
}
