mod build_table;
mod history_merger;
mod matrix_builder;
mod packagesite_parser;
mod row_filter;
mod tree_builder;
mod version_choices;

pub use build_table::BuildTable;
pub use history_merger::{BuildMetadata, HistoryMerger, MergeSummary};
pub use matrix_builder::MatrixBuilder;
pub use packagesite_parser::PackagesiteParser;
pub use row_filter::RowFilter;
pub use tree_builder::TreeBuilder;
pub use version_choices::VersionChoices;
