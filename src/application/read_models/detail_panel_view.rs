//! Detail panel view for the selected package
//!
//! Mirrors the named fields of the browser page's detail panel.

use crate::history::domain::{DependencyTree, PackageRecord};
use serde::Serialize;

/// Message shown when the selected package is missing from the catalog
pub const PACKAGE_NOT_FOUND: &str = "Package not found";

/// View representation of the detail panel
///
/// Field values are copied verbatim from the catalog; formatters escape them
/// for their output medium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPanelView {
    /// Package name as requested by the selection
    pub selected: String,
    pub name: String,
    pub comment: String,
    pub maintainer: String,
    pub arch: String,
    pub description: String,
    /// Informational message replacing the fields (e.g. "Package not found")
    pub message: Option<String>,
    /// Distinct versions of the package across builds, for the version choice
    pub versions: Vec<String>,
    pub tree: DependencyTree,
}

impl DetailPanelView {
    pub fn from_record(
        selected: &str,
        record: &PackageRecord,
        versions: Vec<String>,
        tree: DependencyTree,
    ) -> Self {
        let name = if record.name.is_empty() {
            selected.to_string()
        } else {
            record.name.clone()
        };
        Self {
            selected: selected.to_string(),
            name,
            comment: record.comment.clone(),
            maintainer: record.maintainer.clone(),
            arch: record.arch.clone(),
            description: record.desc.clone(),
            message: None,
            versions,
            tree,
        }
    }

    /// Panel with every field cleared and an empty dependency tree
    pub fn not_found(selected: &str, versions: Vec<String>) -> Self {
        Self {
            selected: selected.to_string(),
            name: String::new(),
            comment: String::new(),
            maintainer: String::new(),
            arch: String::new(),
            description: String::new(),
            message: Some(PACKAGE_NOT_FOUND.to_string()),
            versions,
            tree: DependencyTree::empty(selected),
        }
    }

    pub fn is_found(&self) -> bool {
        self.message.is_none()
    }
}
