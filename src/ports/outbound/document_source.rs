use crate::history::domain::{BuildHistory, Catalog};
use crate::shared::error::HistoryError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// DocumentSource port for retrieving the catalog and build history documents
///
/// Abstracts where the JSON comes from (remote host or local directory).
/// Implementations perform a single attempt: no retry, no caching.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetches the document at `path`, relative to the source's base location
    ///
    /// # Errors
    /// - [`HistoryError::Fetch`] when the server answers with a non-success status
    /// - [`HistoryError::FileRead`] when a local document cannot be read
    /// - [`HistoryError::Parse`] when the body is not valid JSON
    async fn fetch_document(&self, path: &str) -> Result<Value, HistoryError>;

    /// Human-readable location of `path` for messages and logs
    fn describe(&self, path: &str) -> String;

    /// Fetches and decodes the package catalog
    async fn load_catalog(&self, path: &str) -> Result<Catalog, HistoryError> {
        let value = self.fetch_document(path).await?;
        decode(value, &self.describe(path))
    }

    /// Fetches and decodes the build history
    async fn load_history(&self, path: &str) -> Result<BuildHistory, HistoryError> {
        let value = self.fetch_document(path).await?;
        decode(value, &self.describe(path))
    }
}

#[async_trait]
impl<T: DocumentSource + ?Sized> DocumentSource for Box<T> {
    async fn fetch_document(&self, path: &str) -> Result<Value, HistoryError> {
        (**self).fetch_document(path).await
    }

    fn describe(&self, path: &str) -> String {
        (**self).describe(path)
    }
}

/// Converts a parsed JSON value into a typed document; a shape mismatch is a parse error
fn decode<T: DeserializeOwned>(value: Value, location: &str) -> Result<T, HistoryError> {
    serde_json::from_value(value).map_err(|e| HistoryError::Parse {
        location: location.to_string(),
        details: e.to_string(),
    })
}
