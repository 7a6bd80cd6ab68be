use crate::history::domain::{
    Catalog, DependencyNode, DependencyRecord, DependencyTree, TreeNode,
};
use crate::shared::error::HistoryError;
use indexmap::IndexMap;
use std::collections::HashSet;

/// TreeBuilder service expanding a package's dependencies into a tree
///
/// This service contains pure business logic; it works only on the catalog
/// snapshot it is handed.
pub struct TreeBuilder;

impl TreeBuilder {
    /// Builds the full dependency tree of `package_name`
    ///
    /// Every node carries the version from its parent's dependency record.
    /// Subtrees are computed eagerly and start collapsed. A dependency that
    /// already appears on the path from the root becomes a
    /// [`TreeNode::Cycle`] marker instead of being expanded again.
    ///
    /// # Errors
    /// Returns [`HistoryError::PackageNotFound`] if the root is not in the catalog.
    pub fn build(package_name: &str, catalog: &Catalog) -> Result<DependencyTree, HistoryError> {
        let deps = catalog
            .dependencies_of(package_name)
            .ok_or_else(|| HistoryError::PackageNotFound {
                name: package_name.to_string(),
            })?;

        if deps.is_empty() {
            return Ok(DependencyTree::new(package_name, vec![TreeNode::NoDependencies]));
        }

        let mut path = HashSet::new();
        path.insert(package_name.to_string());
        let nodes = Self::build_children(deps, catalog, &mut path);

        Ok(DependencyTree::new(package_name, nodes))
    }

    /// Depth-first expansion of one dependency mapping
    ///
    /// `path` holds the package names from the root down to the current parent.
    fn build_children(
        deps: &IndexMap<String, DependencyRecord>,
        catalog: &Catalog,
        path: &mut HashSet<String>,
    ) -> Vec<TreeNode> {
        deps.iter()
            .map(|(name, record)| Self::build_node(name, record, catalog, path))
            .collect()
    }

    fn build_node(
        name: &str,
        record: &DependencyRecord,
        catalog: &Catalog,
        path: &mut HashSet<String>,
    ) -> TreeNode {
        if path.contains(name) {
            tracing::warn!(package = name, "cyclic dependency detected; not expanding");
            return TreeNode::Cycle {
                name: name.to_string(),
                version: record.version.clone(),
            };
        }

        match catalog.dependencies_of(name) {
            Some(grandchildren) if !grandchildren.is_empty() => {
                path.insert(name.to_string());
                let children = Self::build_children(grandchildren, catalog, path);
                path.remove(name);
                TreeNode::Dependency(DependencyNode::branch(
                    name,
                    record.version.clone(),
                    children,
                ))
            }
            _ => TreeNode::Dependency(DependencyNode::leaf(name, record.version.clone())),
        }
    }
}
