use super::version_matrix::{MatrixRow, VersionMatrix};
use crate::history::services::RowFilter;
use serde::Serialize;

/// The single "currently selected package" slot
///
/// Starts empty, is overwritten by every selection and never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, package_name: impl Into<String>) {
        self.selected = Some(package_name.into());
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

/// Whether the one-time default sort and selection has happened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PresentationState {
    #[default]
    Uninitialized,
    Initialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub column: usize,
    pub order: SortOrder,
}

/// Interactive view over a version matrix: sorting, searching and row selection
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    columns: Vec<String>,
    rows: Vec<MatrixRow>,
    sort: Option<SortState>,
    filter: Option<String>,
    selection: SelectionState,
    state: PresentationState,
}

impl TableView {
    pub fn new(matrix: VersionMatrix) -> Self {
        let (columns, rows) = matrix.into_parts();
        Self {
            columns,
            rows,
            sort: None,
            filter: None,
            selection: SelectionState::new(),
            state: PresentationState::Uninitialized,
        }
    }

    /// Renders the view and returns the visible rows.
    ///
    /// The first call sorts by the package column and selects the first row;
    /// later calls leave sort and selection untouched.
    pub fn render(&mut self) -> Vec<&MatrixRow> {
        if self.state == PresentationState::Uninitialized {
            self.sort_by(0, SortOrder::Ascending);
            let first = self
                .visible_rows()
                .first()
                .map(|row| row.package_name().to_string());
            if let Some(name) = first {
                self.selection.select(name);
            }
            self.state = PresentationState::Initialized;
        }
        self.visible_rows()
    }

    /// Stable sort of all rows by the string value of `column`, ignoring case
    ///
    /// Cells equal apart from case keep a deterministic order by raw value.
    pub fn sort_by(&mut self, column: usize, order: SortOrder) {
        self.rows.sort_by(|a, b| {
            let (left, right) = (a.cell(column), b.cell(column));
            let ordering = left
                .map(str::to_lowercase)
                .cmp(&right.map(str::to_lowercase))
                .then_with(|| left.cmp(&right));
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
        self.sort = Some(SortState { column, order });
    }

    /// Case-insensitive substring filter across every cell; empty clears it
    pub fn search(&mut self, term: &str) {
        let term = term.trim();
        self.filter = if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        };
    }

    pub fn visible_rows(&self) -> Vec<&MatrixRow> {
        match &self.filter {
            None => self.rows.iter().collect(),
            Some(term) => RowFilter::apply(&self.rows, term),
        }
    }

    /// Selects the visible row at `index`; returns the selected package name
    pub fn select_row(&mut self, index: usize) -> Option<String> {
        let name = self
            .visible_rows()
            .get(index)
            .map(|row| row.package_name().to_string())?;
        self.selection.select(name.clone());
        Some(name)
    }

    /// Selects a package by name, whether or not a row shows it
    pub fn select_package(&mut self, package_name: &str) {
        self.selection.select(package_name);
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection.selected()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows in current sort order, ignoring the search filter
    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    pub fn sort_state(&self) -> Option<SortState> {
        self.sort
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn presentation_state(&self) -> PresentationState {
        self.state
    }
}
