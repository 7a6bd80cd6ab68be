/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod document_source;
pub mod formatter;
pub mod history_store;
pub mod output_presenter;
pub mod progress_reporter;

pub use document_source::DocumentSource;
pub use formatter::HistoryFormatter;
pub use history_store::HistoryStore;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
