/// Use cases module containing application business logic orchestration
mod browse_history;
mod merge_history;
mod select_package;

pub use browse_history::BrowseHistoryUseCase;
pub use merge_history::MergeHistoryUseCase;
pub use select_package::SelectPackageUseCase;
