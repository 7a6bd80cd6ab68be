//! Builder for constructing BrowseReadModel from domain objects

use super::browse_read_model::{BrowseReadModel, SourcesView, TableReadView};
use super::detail_panel_view::DetailPanelView;
use crate::history::domain::TableView;

/// Default page title
pub const PAGE_TITLE: &str = "Package Repository History";

/// Transforms the table view and detail panel into the formatter-facing read model
pub struct BrowseReadModelBuilder;

impl BrowseReadModelBuilder {
    /// Builds the read model from a rendered table view
    ///
    /// Only rows visible under the current search filter are included.
    pub fn build(
        table: &TableView,
        detail: Option<DetailPanelView>,
        sources: SourcesView,
        warnings: Vec<String>,
    ) -> BrowseReadModel {
        BrowseReadModel {
            title: PAGE_TITLE.to_string(),
            sources,
            table: Self::build_table(table),
            detail,
            warnings,
        }
    }

    fn build_table(table: &TableView) -> TableReadView {
        TableReadView {
            columns: table.columns().to_vec(),
            rows: table
                .visible_rows()
                .into_iter()
                .map(|row| row.cells().to_vec())
                .collect(),
            total_rows: table.rows().len(),
            filter: table.filter().map(String::from),
            selected: table.selected().map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::domain::{MatrixRow, VersionMatrix};

    fn table() -> TableView {
        TableView::new(VersionMatrix::new(
            vec!["Package".to_string(), "100 (2024-01-01)".to_string()],
            vec![
                MatrixRow::new("zsh", vec!["5.9".to_string()]),
                MatrixRow::new("bash", vec![" - ".to_string()]),
            ],
        ))
    }

    #[test]
    fn test_build_reflects_rendered_table() {
        let mut table = table();
        table.render();

        let model = BrowseReadModelBuilder::build(&table, None, SourcesView::default(), vec![]);

        assert_eq!(model.title, PAGE_TITLE);
        assert_eq!(model.table.columns.len(), 2);
        assert_eq!(model.table.rows[0], vec!["bash", " - "]);
        assert_eq!(model.table.selected.as_deref(), Some("bash"));
        assert!(model.table.is_selected(&model.table.rows[0]));
        assert!(!model.table.is_selected(&model.table.rows[1]));
    }

    #[test]
    fn test_build_applies_filter() {
        let mut table = table();
        table.render();
        table.search("zsh");

        let model = BrowseReadModelBuilder::build(&table, None, SourcesView::default(), vec![]);

        assert_eq!(model.table.rows.len(), 1);
        assert_eq!(model.table.total_rows, 2);
        assert_eq!(model.table.filter.as_deref(), Some("zsh"));
    }
}
