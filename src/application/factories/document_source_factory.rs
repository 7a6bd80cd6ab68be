use crate::adapters::outbound::filesystem::LocalDocumentSource;
use crate::adapters::outbound::network::HttpDocumentSource;
use crate::config::SourceConfig;
use crate::ports::outbound::DocumentSource;
use crate::shared::Result;

/// Factory selecting where the catalog and build history are read from
pub struct DocumentSourceFactory;

impl DocumentSourceFactory {
    /// Local checkout in development mode, the published repository otherwise
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn create(config: &SourceConfig, dev_mode: bool) -> Result<Box<dyn DocumentSource>> {
        if dev_mode {
            tracing::debug!(dir = %config.local_dir.display(), "using local documents");
            Ok(Box::new(LocalDocumentSource::new(config.local_dir.clone())))
        } else {
            tracing::debug!(url = %config.remote_base_url, "using remote documents");
            Ok(Box::new(HttpDocumentSource::new(
                config.remote_base_url.clone(),
            )?))
        }
    }
}
