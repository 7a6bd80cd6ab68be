use crate::application::dto::{BrowseRequest, BrowseResponse};
use crate::application::read_models::{BrowseReadModelBuilder, SourcesView};
use crate::application::use_cases::SelectPackageUseCase;
use crate::history::domain::{BuildHistory, Catalog, TableView};
use crate::history::services::MatrixBuilder;
use crate::ports::outbound::{DocumentSource, ProgressReporter};

/// BrowseHistoryUseCase - loads both documents and renders the browser page
///
/// A document that fails to load is replaced by an empty one so the page
/// still renders; the failure ends up in the response warnings.
///
/// # Type Parameters
/// * `DS` - DocumentSource implementation (remote or local)
/// * `PR` - ProgressReporter implementation
pub struct BrowseHistoryUseCase<DS, PR> {
    document_source: DS,
    progress_reporter: PR,
}

impl<DS, PR> BrowseHistoryUseCase<DS, PR>
where
    DS: DocumentSource,
    PR: ProgressReporter,
{
    pub fn new(document_source: DS, progress_reporter: PR) -> Self {
        Self {
            document_source,
            progress_reporter,
        }
    }

    /// Executes the browse use case
    ///
    /// # Arguments
    /// * `request` - Document paths plus the optional package, search term and expand flag
    /// * `dev_mode` - Whether documents are served from the local checkout
    ///
    /// # Returns
    /// BrowseResponse with the rendered table view and the read model
    pub async fn execute(&self, request: BrowseRequest, dev_mode: bool) -> BrowseResponse {
        let sources = SourcesView {
            catalog: self.document_source.describe(&request.catalog_path),
            history: self.document_source.describe(&request.history_path),
            dev_mode,
        };
        let mut warnings = Vec::new();

        // Step 1: Load the catalog
        let catalog = self.load_catalog(&request, &mut warnings).await;

        // Step 2: Load the build history and build the matrix
        let history = self.load_history(&request, &mut warnings).await;
        let matrix = MatrixBuilder::build(&history);
        self.progress_reporter.report(&format!(
            "✅ Loaded {} package(s) across {} build(s)",
            matrix.row_count(),
            matrix.column_count().saturating_sub(1)
        ));

        // Step 3: First render applies the default sort and selection
        let mut table = TableView::new(matrix);
        if let Some(term) = &request.search {
            table.search(term);
        }
        table.render();

        // Step 4: Populate the detail panel
        let select_package = SelectPackageUseCase::new(&catalog);
        if let Some(package) = &request.package {
            table.select_package(package);
        }
        let detail = table.selected().map(|name| {
            let mut panel = select_package.detail_for(&table, name);
            if request.expand_all {
                panel.tree.expand_all();
            }
            panel
        });

        let degraded = !warnings.is_empty();
        let read_model = BrowseReadModelBuilder::build(&table, detail, sources, warnings);

        BrowseResponse {
            table,
            read_model,
            degraded,
        }
    }

    async fn load_catalog(&self, request: &BrowseRequest, warnings: &mut Vec<String>) -> Catalog {
        self.progress_reporter.report_progress(
            1,
            2,
            Some(&format!(
                "Fetching {}",
                self.document_source.describe(&request.catalog_path)
            )),
        );

        match self
            .document_source
            .load_catalog(&request.catalog_path)
            .await
        {
            Ok(catalog) => {
                tracing::debug!(packages = catalog.len(), "catalog loaded");
                catalog
            }
            Err(error) => {
                tracing::error!(%error, "failed to load catalog");
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", error));
                warnings.push(error.to_string());
                Catalog::default()
            }
        }
    }

    async fn load_history(
        &self,
        request: &BrowseRequest,
        warnings: &mut Vec<String>,
    ) -> BuildHistory {
        self.progress_reporter.report_progress(
            2,
            2,
            Some(&format!(
                "Fetching {}",
                self.document_source.describe(&request.history_path)
            )),
        );

        match self
            .document_source
            .load_history(&request.history_path)
            .await
        {
            Ok(history) => {
                tracing::debug!(
                    builds = history.build_count(),
                    packages = history.package_count(),
                    "build history loaded"
                );
                history
            }
            Err(error) => {
                tracing::error!(%error, "failed to load build history");
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: {}", error));
                warnings.push(error.to_string());
                BuildHistory::default()
            }
        }
    }
}
