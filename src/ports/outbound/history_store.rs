use crate::history::domain::{BuildHistory, Catalog};
use crate::shared::Result;
use std::path::Path;

/// HistoryStore port for the files the merge workflow reads and rewrites
pub trait HistoryStore {
    /// Reads a raw packagesite dump
    fn read_packagesite(&self, path: &Path) -> Result<String>;

    /// Reads and decodes a build history file
    fn load_history(&self, path: &Path) -> Result<BuildHistory>;

    /// Writes the history back, preserving key order
    fn save_history(&self, path: &Path, history: &BuildHistory) -> Result<()>;

    /// Writes the name-keyed catalog that the browser reads as `packagesite.json`
    fn save_catalog(&self, path: &Path, catalog: &Catalog) -> Result<()>;

    /// Reads the repository README holding the builds table
    fn read_readme(&self, path: &Path) -> Result<String>;

    /// Replaces the README content
    fn write_readme(&self, path: &Path, content: &str) -> Result<()>;
}
