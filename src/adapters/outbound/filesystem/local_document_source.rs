use crate::ports::outbound::DocumentSource;
use crate::shared::error::HistoryError;
use crate::shared::security::validate_document_file;
use async_trait::async_trait;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// LocalDocumentSource adapter reading documents from a checkout on disk
///
/// Used in development mode, where the page is served next to its documents.
pub struct LocalDocumentSource {
    root: PathBuf,
}

impl LocalDocumentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[async_trait]
impl DocumentSource for LocalDocumentSource {
    async fn fetch_document(&self, path: &str) -> Result<Value, HistoryError> {
        let file_path = self.document_path(path);
        tracing::debug!(path = %file_path.display(), "reading document");

        // Security checks before reading
        validate_document_file(&file_path, "document").map_err(|e| HistoryError::FileRead {
            path: file_path.clone(),
            details: e.to_string(),
        })?;

        let content = fs::read_to_string(&file_path).map_err(|e| HistoryError::FileRead {
            path: file_path.clone(),
            details: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| HistoryError::Parse {
            location: file_path.display().to_string(),
            details: e.to_string(),
        })
    }

    fn describe(&self, path: &str) -> String {
        self.document_path(path).display().to_string()
    }
}
