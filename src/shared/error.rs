use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Lets scripts tell a fully rendered report apart from a degraded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every document loaded and the report was written
    Success = 0,
    /// The report was written, but at least one document failed to load
    PartialRender = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config, file I/O, merge failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PartialRender => write!(f, "Partial Render (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while loading, browsing, and merging package history.
///
/// Uses thiserror to derive Display and Error; messages carry a hint line
/// the CLI prints verbatim.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to fetch document: {location}\nHTTP status: {status}\n\n💡 Hint: Check the remote base URL or use --dev to read local files")]
    Fetch { location: String, status: u16 },

    #[error("Network error while fetching: {location}\nDetails: {details}\n\n💡 Hint: Check your network connection or use --dev to read local files")]
    Network { location: String, details: String },

    #[error("Failed to parse document: {location}\nDetails: {details}\n\n💡 Hint: Please verify that the document is valid JSON in the expected shape")]
    Parse { location: String, details: String },

    #[error("Package not found: {name}")]
    PackageNotFound { name: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileRead { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    #[error("Invalid build metadata: {field} = \"{value}\"\n\n💡 Hint: Build ids are digits only, release dates use YYYY-MM-DD")]
    InvalidBuildMetadata { field: &'static str, value: String },

    /// Validation error for config values and builders
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl HistoryError {
    /// Whether this error means a document could not be loaded at all
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            HistoryError::Fetch { .. }
                | HistoryError::Network { .. }
                | HistoryError::Parse { .. }
                | HistoryError::FileRead { .. }
        )
    }
}
