/// Filesystem adapters for file I/O operations
mod file_writer;
mod history_store;
mod local_document_source;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use history_store::FileSystemHistoryStore;
pub use local_document_source::LocalDocumentSource;
