use crate::shared::error::HistoryError;
use crate::shared::Result;

/// Default catalog document name
pub const DEFAULT_CATALOG_FILE: &str = "packagesite.json";

/// Default build history document name
pub const DEFAULT_HISTORY_FILE: &str = "packagehistory.json";

/// BrowseRequest - Internal request DTO for the browse use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseRequest {
    /// Catalog document path, relative to the selected source
    pub catalog_path: String,
    /// Build history document path, relative to the selected source
    pub history_path: String,
    /// Package to show instead of the default first row
    pub package: Option<String>,
    /// Search term applied to the table before rendering
    pub search: Option<String>,
    /// Expand every dependency subtree instead of only the root's children
    pub expand_all: bool,
}

impl BrowseRequest {
    pub fn builder() -> BrowseRequestBuilder {
        BrowseRequestBuilder::default()
    }
}

impl Default for BrowseRequest {
    fn default() -> Self {
        Self {
            catalog_path: DEFAULT_CATALOG_FILE.to_string(),
            history_path: DEFAULT_HISTORY_FILE.to_string(),
            package: None,
            search: None,
            expand_all: false,
        }
    }
}

/// Builder for [`BrowseRequest`]
#[derive(Debug, Default)]
pub struct BrowseRequestBuilder {
    catalog_path: Option<String>,
    history_path: Option<String>,
    package: Option<String>,
    search: Option<String>,
    expand_all: bool,
}

impl BrowseRequestBuilder {
    pub fn catalog_path(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn history_path(mut self, path: impl Into<String>) -> Self {
        self.history_path = Some(path.into());
        self
    }

    pub fn package(mut self, package: Option<String>) -> Self {
        self.package = package;
        self
    }

    pub fn search(mut self, search: Option<String>) -> Self {
        self.search = search;
        self
    }

    pub fn expand_all(mut self, expand_all: bool) -> Self {
        self.expand_all = expand_all;
        self
    }

    /// # Errors
    /// Returns a validation error if a document path is blank
    pub fn build(self) -> Result<BrowseRequest> {
        let defaults = BrowseRequest::default();
        let catalog_path = self.catalog_path.unwrap_or(defaults.catalog_path);
        let history_path = self.history_path.unwrap_or(defaults.history_path);

        for (label, path) in [("catalog", &catalog_path), ("history", &history_path)] {
            if path.trim().is_empty() {
                return Err(HistoryError::Validation {
                    message: format!("{} document path must not be empty", label),
                }
                .into());
            }
        }

        Ok(BrowseRequest {
            catalog_path,
            history_path,
            package: self.package.filter(|p| !p.trim().is_empty()),
            search: self.search,
            expand_all: self.expand_all,
        })
    }
}
