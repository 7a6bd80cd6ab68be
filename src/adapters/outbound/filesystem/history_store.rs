use crate::history::domain::{BuildHistory, Catalog};
use crate::ports::outbound::HistoryStore;
use crate::shared::error::HistoryError;
use crate::shared::security::{validate_document_file, validate_write_target};
use crate::shared::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// FileSystemHistoryStore adapter persisting the merge workflow's files
///
/// JSON documents are written with a four-space indent and their mapping
/// order preserved, so successive merges produce small diffs.
pub struct FileSystemHistoryStore;

impl FileSystemHistoryStore {
    pub fn new() -> Self {
        Self
    }

    fn read_checked(&self, path: &Path, description: &str) -> Result<String> {
        validate_document_file(path, description).map_err(|e| HistoryError::FileRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let content = fs::read_to_string(path).map_err(|e| HistoryError::FileRead {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(content)
    }

    fn write_checked(&self, path: &Path, content: &str) -> Result<()> {
        validate_write_target(path).map_err(|e| HistoryError::FileWrite {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        fs::write(path, content).map_err(|e| HistoryError::FileWrite {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }

    /// Serializes with a four-space indent
    fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        value.serialize(&mut serializer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl Default for FileSystemHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for FileSystemHistoryStore {
    fn read_packagesite(&self, path: &Path) -> Result<String> {
        self.read_checked(path, "packagesite dump")
    }

    fn load_history(&self, path: &Path) -> Result<BuildHistory> {
        let content = self.read_checked(path, "build history")?;
        let history = serde_json::from_str(&content).map_err(|e| HistoryError::Parse {
            location: path.display().to_string(),
            details: e.to_string(),
        })?;
        Ok(history)
    }

    fn save_history(&self, path: &Path, history: &BuildHistory) -> Result<()> {
        let content = Self::to_pretty_json(history)?;
        self.write_checked(path, &content)?;

        tracing::debug!(path = %path.display(), "build history written");
        Ok(())
    }

    fn save_catalog(&self, path: &Path, catalog: &Catalog) -> Result<()> {
        let content = Self::to_pretty_json(catalog)?;
        self.write_checked(path, &content)?;

        tracing::debug!(path = %path.display(), packages = catalog.len(), "catalog written");
        Ok(())
    }

    fn read_readme(&self, path: &Path) -> Result<String> {
        self.read_checked(path, "README")
    }

    fn write_readme(&self, path: &Path, content: &str) -> Result<()> {
        self.write_checked(path, content)?;

        tracing::debug!(path = %path.display(), "README written");
        Ok(())
    }
}
