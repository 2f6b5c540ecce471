//! Breadcrumb resolution logic
//!
//! Turns a slash-delimited folder path into an ordered list of segments,
//! each pointing at the folder it resolves to (if any).

use crate::model::tree::{FolderNode, FolderTree};

/// One segment of a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbSegment {
    /// Text shown for the segment
    pub name: String,
    /// Id of the folder this segment navigates to; `None` renders as a plain label
    pub target: Option<String>,
}

impl BreadcrumbSegment {
    pub fn is_navigable(&self) -> bool {
        self.target.is_some()
    }
}

/// Resolve the breadcrumb trail for a folder node by matching its `path`
///
/// A node without a path produces a single segment pointing at itself.
/// The result always has exactly one segment per `/`-delimited token.
///
/// # Examples
/// ```
/// use docdeck::logic::breadcrumb::resolve_breadcrumb;
/// use docdeck::model::tree::{FolderNode, FolderTree};
///
/// let tree = FolderTree::default();
/// let node = FolderNode::new("q1", "2024 Q1", Some("Finance/Budget Reports/2024 Q1"));
/// let names: Vec<String> = resolve_breadcrumb(&node, &tree)
///     .into_iter()
///     .map(|s| s.name)
///     .collect();
/// assert_eq!(names, vec!["Finance", "Budget Reports", "2024 Q1"]);
/// ```
pub fn resolve_breadcrumb(node: &FolderNode, tree: &FolderTree) -> Vec<BreadcrumbSegment> {
    match node.path.as_deref() {
        Some(path) if !path.is_empty() => resolve_path(path, tree),
        _ => vec![BreadcrumbSegment {
            name: node.name.clone(),
            target: Some(node.id.clone()),
        }],
    }
}

/// Resolve an arbitrary slash-delimited path (e.g. a document's department)
///
/// For each running prefix the tree is searched depth-first. A node whose
/// path equals the prefix wins; failing that, the first node whose name
/// matches the segment case-insensitively. Unmatched segments keep their
/// text with no target.
pub fn resolve_path(path: &str, tree: &FolderTree) -> Vec<BreadcrumbSegment> {
    let nodes = tree.depth_first();
    let mut prefix = String::new();

    path.split('/')
        .enumerate()
        .map(|(i, segment)| {
            if i > 0 {
                prefix.push('/');
            }
            prefix.push_str(segment);

            let segment_lower = segment.to_lowercase();
            let target = nodes
                .iter()
                .find(|n| n.path.as_deref() == Some(prefix.as_str()))
                .or_else(|| nodes.iter().find(|n| n.name.to_lowercase() == segment_lower))
                .map(|n| n.id.clone());

            BreadcrumbSegment {
                name: segment.to_string(),
                target,
            }
        })
        .collect()
}

/// Breadcrumb trail taken straight from the tree's ancestor chain
///
/// Every segment is navigable. Empty when `id` is not in the tree.
pub fn breadcrumb_from_tree(tree: &FolderTree, id: &str) -> Vec<BreadcrumbSegment> {
    tree.ancestors(id)
        .into_iter()
        .map(|node| BreadcrumbSegment {
            name: node.name.clone(),
            target: Some(node.id.clone()),
        })
        .collect()
}
