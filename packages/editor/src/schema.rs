//! Element and attribute names that make up the table vocabulary.

/// Conventional root element; any root is accepted
pub const ROOT_TAG: &str = "database";
pub const TABLE_TAG: &str = "table";
pub const ROW_TAG: &str = "row";
pub const CELL_TAG: &str = "cell";

/// Table name on `table`, column header on `cell`
pub const NAME_ATTR: &str = "name";

/// Header for an unnamed column at a 0-based position (`Column_1`, …)
pub fn placeholder_header(index: usize) -> String {
    format!("Column_{}", index + 1)
}
