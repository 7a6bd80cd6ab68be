use crate::history::domain::MatrixRow;

/// RowFilter service backing the table's search box
pub struct RowFilter;

impl RowFilter {
    /// True if any cell of `row` contains `term`, ignoring case
    pub fn matches(row: &MatrixRow, term: &str) -> bool {
        let term = term.to_lowercase();
        row.cells()
            .iter()
            .any(|cell| cell.to_lowercase().contains(&term))
    }

    /// Rows matching `term`; an empty or blank term keeps every row
    pub fn apply<'a>(rows: &'a [MatrixRow], term: &str) -> Vec<&'a MatrixRow> {
        let term = term.trim();
        if term.is_empty() {
            return rows.iter().collect();
        }
        rows.iter().filter(|row| Self::matches(row, term)).collect()
    }
}
