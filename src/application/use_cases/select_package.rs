use crate::application::read_models::DetailPanelView;
use crate::history::domain::{Catalog, DependencyTree, TableView};
use crate::history::services::{TreeBuilder, VersionChoices};
use crate::shared::error::HistoryError;

/// SelectPackageUseCase - fills the detail panel for a selected package
///
/// Borrows the catalog loaded by the browse use case; the table view supplies
/// the rendered rows the version choices are read from.
pub struct SelectPackageUseCase<'a> {
    catalog: &'a Catalog,
}

impl<'a> SelectPackageUseCase<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Records the selection on `table` and returns the populated panel
    ///
    /// A package missing from the catalog yields a cleared panel with the
    /// "Package not found" message; the failure is logged, never returned.
    pub fn on_package_selected(&self, table: &mut TableView, package_name: &str) -> DetailPanelView {
        table.select_package(package_name);
        self.detail_for(table, package_name)
    }

    /// Builds the panel for `package_name` without touching the selection
    pub fn detail_for(&self, table: &TableView, package_name: &str) -> DetailPanelView {
        let versions = VersionChoices::collect(table.rows(), package_name);

        let Some(record) = self.catalog.get(package_name) else {
            let error = HistoryError::PackageNotFound {
                name: package_name.to_string(),
            };
            tracing::warn!(%error, "selected package has no catalog record");
            return DetailPanelView::not_found(package_name, versions);
        };

        let tree = match TreeBuilder::build(package_name, self.catalog) {
            Ok(tree) => tree,
            Err(error) => {
                tracing::warn!(%error, "dependency tree unavailable");
                DependencyTree::empty(package_name)
            }
        };

        DetailPanelView::from_record(package_name, record, versions, tree)
    }
}
