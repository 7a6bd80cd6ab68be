/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use cases, and the adapters,
/// keeping the domain layer isolated.
mod browse_request;
mod browse_response;
mod merge_request;
mod output_format;

pub use browse_request::{
    BrowseRequest, BrowseRequestBuilder, DEFAULT_CATALOG_FILE, DEFAULT_HISTORY_FILE,
};
pub use browse_response::BrowseResponse;
pub use merge_request::MergeRequest;
pub use output_format::OutputFormat;
