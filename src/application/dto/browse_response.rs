use crate::application::read_models::BrowseReadModel;
use crate::history::domain::TableView;

/// BrowseResponse - Internal response DTO from the browse use case
#[derive(Debug, Clone)]
pub struct BrowseResponse {
    /// Table view after its first render (default sort and selection applied)
    pub table: TableView,
    /// Formatter-facing snapshot of the page
    pub read_model: BrowseReadModel,
    /// Whether the catalog or the build history failed to load
    pub degraded: bool,
}
