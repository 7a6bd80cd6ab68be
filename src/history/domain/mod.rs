pub mod build_history;
pub mod catalog;
pub mod dependency_tree;
pub mod table_view;
pub mod version_matrix;

pub use build_history::{BuildHistory, BuildId, BuildInfo, PackageVersions};
pub use catalog::{Catalog, DependencyRecord, PackageRecord};
pub use dependency_tree::{
    DependencyNode, DependencyTree, TreeNode, CYCLIC_DEPENDENCY, NO_DEPENDENCIES,
};
pub use table_view::{PresentationState, SelectionState, SortOrder, SortState, TableView};
pub use version_matrix::{is_placeholder, MatrixRow, VersionMatrix, PACKAGE_COLUMN, PLACEHOLDER};
