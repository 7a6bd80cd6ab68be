use serde::Serialize;

/// Text of the marker shown for a package without dependencies
pub const NO_DEPENDENCIES: &str = "No Dependencies";

/// Text of the marker shown where a dependency loops back onto its own path
pub const CYCLIC_DEPENDENCY: &str = "cyclic dependency";

/// A dependency edge rendered as a tree node
///
/// `version` is the version the parent declared for this edge, not the
/// dependency's own catalog version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyNode {
    pub name: String,
    pub version: String,
    pub expandable: bool,
    pub expanded: bool,
    pub children: Vec<TreeNode>,
}

impl DependencyNode {
    pub fn leaf(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            expandable: false,
            expanded: false,
            children: Vec::new(),
        }
    }

    /// Expandable node, collapsed until toggled
    pub fn branch(
        name: impl Into<String>,
        version: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            expandable: true,
            expanded: false,
            children,
        }
    }

    /// Children are shown only for expanded, expandable nodes
    pub fn shows_children(&self) -> bool {
        self.expandable && self.expanded
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Dependency(DependencyNode),
    /// Dependency already on the current path; not expanded further
    Cycle { name: String, version: String },
    /// Informational marker for a package with an empty dependency mapping
    NoDependencies,
}

impl TreeNode {
    pub fn as_dependency(&self) -> Option<&DependencyNode> {
        match self {
            TreeNode::Dependency(node) => Some(node),
            _ => None,
        }
    }

    pub fn is_expandable(&self) -> bool {
        self.as_dependency().map(|n| n.expandable).unwrap_or(false)
    }

    fn count(&self) -> usize {
        match self {
            TreeNode::Dependency(node) => 1 + node.children.iter().map(TreeNode::count).sum::<usize>(),
            _ => 1,
        }
    }

    fn set_expanded(&mut self, expanded: bool) {
        if let TreeNode::Dependency(node) = self {
            if node.expandable {
                node.expanded = expanded;
            }
            for child in &mut node.children {
                child.set_expanded(expanded);
            }
        }
    }
}

/// Fully built dependency tree of one package
///
/// The structure is computed once; only the expanded flags change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyTree {
    root: String,
    nodes: Vec<TreeNode>,
}

impl DependencyTree {
    pub fn new(root: impl Into<String>, nodes: Vec<TreeNode>) -> Self {
        Self {
            root: root.into(),
            nodes,
        }
    }

    /// Tree shown when the root could not be resolved
    pub fn empty(root: impl Into<String>) -> Self {
        Self::new(root, Vec::new())
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Root's direct children
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_no_dependencies(&self) -> bool {
        matches!(self.nodes.as_slice(), [TreeNode::NoDependencies])
    }

    /// Total number of nodes at any depth, markers included
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(TreeNode::count).sum()
    }

    /// Flips the expanded flag of the node at `path` (child indices from the root).
    ///
    /// Returns false when the path does not lead to an expandable node.
    pub fn toggle(&mut self, path: &[usize]) -> bool {
        let Some((first, rest)) = path.split_first() else {
            return false;
        };
        let mut current = match self.nodes.get_mut(*first) {
            Some(TreeNode::Dependency(node)) => node,
            _ => return false,
        };
        for index in rest {
            current = match current.children.get_mut(*index) {
                Some(TreeNode::Dependency(node)) => node,
                _ => return false,
            };
        }
        if !current.expandable {
            return false;
        }
        current.expanded = !current.expanded;
        true
    }

    pub fn expand_all(&mut self) {
        for node in &mut self.nodes {
            node.set_expanded(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DependencyTree {
        let inner = DependencyNode::branch(
            "b",
            "2.0",
            vec![TreeNode::Dependency(DependencyNode::leaf("c", "3.0"))],
        );
        DependencyTree::new(
            "a",
            vec![
                TreeNode::Dependency(inner),
                TreeNode::Dependency(DependencyNode::leaf("d", "4.0")),
            ],
        )
    }

    #[test]
    fn test_branches_start_collapsed() {
        let tree = sample_tree();
        let b = tree.nodes()[0].as_dependency().unwrap();
        assert!(b.expandable);
        assert!(!b.expanded);
        assert!(!b.shows_children());
    }

    #[test]
    fn test_toggle_flips_display_state_only() {
        let mut tree = sample_tree();
        let before = tree.node_count();

        assert!(tree.toggle(&[0]));
        assert!(tree.nodes()[0].as_dependency().unwrap().expanded);
        assert!(tree.toggle(&[0]));
        assert!(!tree.nodes()[0].as_dependency().unwrap().expanded);
        assert_eq!(tree.node_count(), before);
    }

    #[test]
    fn test_toggle_rejects_leaves_and_bad_paths() {
        let mut tree = sample_tree();
        assert!(!tree.toggle(&[1]));
        assert!(!tree.toggle(&[0, 0]));
        assert!(!tree.toggle(&[5]));
        assert!(!tree.toggle(&[]));
    }

    #[test]
    fn test_expand_all_skips_leaves() {
        let mut tree = sample_tree();
        tree.expand_all();
        assert!(tree.nodes()[0].as_dependency().unwrap().expanded);
        assert!(!tree.nodes()[1].as_dependency().unwrap().expanded);
    }

    #[test]
    fn test_no_dependencies_marker() {
        let tree = DependencyTree::new("a", vec![TreeNode::NoDependencies]);
        assert!(tree.has_no_dependencies());
        assert!(!tree.nodes()[0].is_expandable());
    }

    #[test]
    fn test_empty_tree() {
        let tree = DependencyTree::empty("ghost");
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.root(), "ghost");
    }

    #[test]
    fn test_serialize_node_kinds() {
        let tree = DependencyTree::new(
            "a",
            vec![TreeNode::Cycle {
                name: "a".to_string(),
                version: "1.0".to_string(),
            }],
        );
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["nodes"][0]["kind"], "cycle");
        assert_eq!(json["nodes"][0]["name"], "a");
    }
}
