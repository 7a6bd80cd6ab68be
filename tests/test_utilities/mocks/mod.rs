/// Mock implementations for testing
mod mock_document_source;
mod mock_history_store;
mod mock_progress_reporter;

pub use mock_document_source::MockDocumentSource;
pub use mock_history_store::MockHistoryStore;
pub use mock_progress_reporter::MockProgressReporter;
