use serde::Serialize;

/// Label of the leading column
pub const PACKAGE_COLUMN: &str = "Package";

/// Cell value for "no version recorded for this package at this build"
pub const PLACEHOLDER: &str = " - ";

/// One table row: package name followed by one version cell per build column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatrixRow {
    cells: Vec<String>,
}

impl MatrixRow {
    pub fn new(package_name: impl Into<String>, versions: Vec<String>) -> Self {
        let mut cells = Vec::with_capacity(versions.len() + 1);
        cells.push(package_name.into());
        cells.extend(versions);
        Self { cells }
    }

    pub fn package_name(&self) -> &str {
        &self.cells[0]
    }

    /// Version cells, aligned to the build columns
    pub fn versions(&self) -> &[String] {
        &self.cells[1..]
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

/// Packages × builds table derived from a build history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionMatrix {
    columns: Vec<String>,
    rows: Vec<MatrixRow>,
}

impl VersionMatrix {
    pub fn new(columns: Vec<String>, rows: Vec<MatrixRow>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<MatrixRow>) {
        (self.columns, self.rows)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn is_placeholder(cell: &str) -> bool {
    cell == PLACEHOLDER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_row_accessors() {
        let row = MatrixRow::new("pkgA", vec![PLACEHOLDER.to_string(), "1.0".to_string()]);
        assert_eq!(row.package_name(), "pkgA");
        assert_eq!(row.versions(), &[" - ".to_string(), "1.0".to_string()]);
        assert_eq!(row.cell(2), Some("1.0"));
        assert_eq!(row.cell(3), None);
    }

    #[test]
    fn test_placeholder_is_space_hyphen_space() {
        assert_eq!(PLACEHOLDER.len(), 3);
        assert!(is_placeholder(" - "));
        assert!(!is_placeholder("-"));
    }

    #[test]
    fn test_matrix_serializes_rows_as_arrays() {
        let matrix = VersionMatrix::new(
            vec![PACKAGE_COLUMN.to_string(), "100 (2024-01-01)".to_string()],
            vec![MatrixRow::new("pkgA", vec!["1.0".to_string()])],
        );
        let json = serde_json::to_value(&matrix).unwrap();
        assert_eq!(json["rows"][0], serde_json::json!(["pkgA", "1.0"]));
        assert_eq!(json["columns"][0], "Package");
    }
}
