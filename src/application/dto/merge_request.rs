use std::path::PathBuf;

/// MergeRequest - request DTO for integrating a packagesite dump into a history file
#[derive(Debug, Clone)]
pub struct MergeRequest {
    pub packagesite_path: PathBuf,
    pub history_path: PathBuf,
    pub build: String,
    pub release_date: String,
    pub freebsd_version: Option<String>,
    pub packages_count: Option<String>,
    /// Where to export the parsed catalog as JSON, if anywhere
    pub catalog_out: Option<PathBuf>,
    /// README whose builds table gains a row for a new build
    pub readme_path: Option<PathBuf>,
}
