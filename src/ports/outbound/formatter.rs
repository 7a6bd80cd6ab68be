use crate::application::read_models::BrowseReadModel;
use crate::shared::Result;

/// HistoryFormatter port for rendering the browser page
///
/// Implementations consume the read model only; they never touch the
/// catalog or the network.
pub trait HistoryFormatter {
    /// Renders the version table, detail panel, and dependency tree
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &BrowseReadModel) -> Result<String>;
}
