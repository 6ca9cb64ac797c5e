//! # Table Locator
//!
//! Tag-based lookup over the whole tree. Table sections may sit at any depth
//! below the root, and rows and cells are found anywhere inside their
//! section or row, always in document order.

use crate::schema::{CELL_TAG, NAME_ATTR, ROW_TAG, TABLE_TAG};
use tablexml_document::{Document, NodeId};

/// Every table section in the document, named or not
pub fn table_sections(doc: &Document) -> impl Iterator<Item = NodeId> + '_ {
    doc.elements_by_tag(doc.document_node(), TABLE_TAG)
}

/// First table section whose `name` matches exactly (case-sensitive).
/// An empty name never matches, so unnamed sections stay hidden.
pub fn find_table(doc: &Document, name: &str) -> Option<NodeId> {
    if name.is_empty() {
        return None;
    }
    table_sections(doc).find(|&id| doc.attribute(id, NAME_ATTR) == Some(name))
}

/// Names of all named table sections in document order, duplicates kept.
/// Sections without a name, or with an empty one, are skipped.
pub fn table_names(doc: &Document) -> Vec<String> {
    table_sections(doc)
        .filter_map(|id| doc.attribute(id, NAME_ATTR))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Row sections of a table, in document order
pub fn row_sections(doc: &Document, section: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    doc.elements_by_tag(section, ROW_TAG)
}

/// Cell sections of a row, in positional order
pub fn cell_sections(doc: &Document, row: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    doc.elements_by_tag(row, CELL_TAG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablexml_document::parse;

    const NESTED: &str = r#"
        <database>
            <table name="Users"/>
            <table/>
            <table name=""/>
            <group>
                <table name="Orders"/>
                <table name="Users"><row/></table>
            </group>
        </database>
    "#;

    #[test]
    fn test_names_in_document_order_with_duplicates() {
        let doc = parse(NESTED).unwrap();
        assert_eq!(table_names(&doc), vec!["Users", "Orders", "Users"]);
    }

    #[test]
    fn test_find_returns_first_match() {
        let doc = parse(NESTED).unwrap();
        let users = find_table(&doc, "Users").unwrap();
        assert_eq!(row_sections(&doc, users).count(), 0);
        assert_eq!(find_table(&doc, "Users"), Some(users));
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let doc = parse(NESTED).unwrap();
        assert!(find_table(&doc, "users").is_none());
        assert!(find_table(&doc, "Missing").is_none());
    }

    #[test]
    fn test_empty_name_finds_nothing() {
        let doc = parse(NESTED).unwrap();
        assert!(find_table(&doc, "").is_none());
    }

    #[test]
    fn test_finds_nested_tables() {
        let doc = parse(NESTED).unwrap();
        let orders = find_table(&doc, "Orders").unwrap();
        assert_eq!(doc.tag(doc.parent(orders).unwrap()), Some("group"));
    }

    #[test]
    fn test_cells_found_through_wrappers() {
        let doc = parse(
            r#"<database><table name="T"><row><cell>a</cell><wrap><cell>b</cell></wrap></row></table></database>"#,
        )
        .unwrap();
        let table = find_table(&doc, "T").unwrap();
        let row = row_sections(&doc, table).next().unwrap();
        let values: Vec<_> = cell_sections(&doc, row).map(|c| doc.text(c)).collect();
        assert_eq!(values, vec!["a", "b"]);
    }
}
