//! Browse read model consumed by the formatters
//!
//! A denormalized snapshot of everything one rendered page shows.

use super::detail_panel_view::DetailPanelView;
use serde::Serialize;

/// Main read model for a rendered browser page
#[derive(Debug, Clone, Serialize)]
pub struct BrowseReadModel {
    pub title: String,
    pub sources: SourcesView,
    pub table: TableReadView,
    /// Present once a package has been selected
    pub detail: Option<DetailPanelView>,
    /// Load failures shown alongside the degraded page
    pub warnings: Vec<String>,
}

/// Where the documents came from
#[derive(Debug, Clone, Default, Serialize)]
pub struct SourcesView {
    pub catalog: String,
    pub history: String,
    pub dev_mode: bool,
}

/// Visible table rows in display order
#[derive(Debug, Clone, Default, Serialize)]
pub struct TableReadView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
    pub filter: Option<String>,
    pub selected: Option<String>,
}

impl TableReadView {
    pub fn is_selected(&self, row: &[String]) -> bool {
        match (&self.selected, row.first()) {
            (Some(selected), Some(name)) => selected == name,
            _ => false,
        }
    }
}
