//! Tests for breadcrumb resolution and breadcrumb navigation

mod common;

use common::{doc, finance_page, finance_sections};
use docdeck::logic::breadcrumb::{breadcrumb_from_tree, resolve_breadcrumb, resolve_path};
use docdeck::model::{FolderNode, FolderTree};

/// Test: the three-level finance path resolves segment by segment
#[test]
fn test_finance_path_resolves_to_three_segments() {
    let tree = FolderTree::from_sections(&finance_sections());
    let node = tree.get("q1").unwrap();
    assert_eq!(node.path.as_deref(), Some("Finance/Budget Reports/2024 Q1"));

    let segments = resolve_breadcrumb(node, &tree);
    let names: Vec<&str> = segments.iter().map(|s| s.name.as_str()).collect();
    let targets: Vec<Option<&str>> = segments.iter().map(|s| s.target.as_deref()).collect();

    assert_eq!(names, vec!["Finance", "Budget Reports", "2024 Q1"]);
    assert_eq!(targets, vec![Some("finance"), Some("budget"), Some("q1")]);
}

/// Test: segment count always equals the number of path tokens
#[test]
fn test_segment_count_matches_tokens() {
    let tree = FolderTree::from_sections(&finance_sections());
    for path in ["Finance", "Finance/Unknown", "A/B/C/D/E", "HR/Reports", "x//y"] {
        let node = FolderNode::new("n", "n", Some(path));
        assert_eq!(
            resolve_breadcrumb(&node, &tree).len(),
            path.split('/').count(),
            "path {:?}",
            path
        );
    }
}

/// Test: unmatched segments degrade to labels
#[test]
fn test_unknown_segment_is_label_only() {
    let tree = FolderTree::from_sections(&finance_sections());
    let segments = resolve_path("Finance/Archive", &tree);
    assert_eq!(segments[0].target.as_deref(), Some("finance"));
    assert_eq!(segments[1].name, "Archive");
    assert!(!segments[1].is_navigable());
}

/// Test: a node without a path is a single segment pointing at itself
#[test]
fn test_node_without_path() {
    let tree = FolderTree::default();
    let node = FolderNode::new("loose", "Loose Folder", None);
    let segments = resolve_breadcrumb(&node, &tree);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].name, "Loose Folder");
    assert_eq!(segments[0].target.as_deref(), Some("loose"));
}

/// Test: two folders named "Reports" resolve by their full path
#[test]
fn test_name_collision_resolves_by_path() {
    let tree = FolderTree::from_sections(&finance_sections());

    let finance = resolve_path("Finance/Reports", &tree);
    assert_eq!(finance[1].target.as_deref(), Some("fin-reports"));

    let hr = resolve_path("HR/Reports", &tree);
    assert_eq!(hr[1].target.as_deref(), Some("hr-reports"));

    // The tree-derived trail agrees
    let derived = breadcrumb_from_tree(&tree, "fin-reports");
    let ids: Vec<_> = derived.iter().map(|s| s.target.as_deref()).collect();
    assert_eq!(ids, vec![Some("finance"), Some("fin-reports")]);
}

/// Test: path matching falls back to case-insensitive names
#[test]
fn test_case_insensitive_name_fallback() {
    let tree = FolderTree::from_sections(&finance_sections());
    let segments = resolve_path("finance/budget reports", &tree);
    assert_eq!(segments[0].target.as_deref(), Some("finance"));
    assert_eq!(segments[1].target.as_deref(), Some("budget"));
}

/// Test: clicking a breadcrumb behaves like opening that folder directly
#[test]
fn test_activate_breadcrumb_matches_direct_open() {
    let mut via_crumb = finance_page(vec![doc("d1", "Budget", "Finance/Budget Reports")]);
    via_crumb.open_folder("finance");
    via_crumb.open_folder("budget");
    via_crumb.open_folder("q1");
    assert!(via_crumb.activate_breadcrumb(1));

    let mut direct = finance_page(vec![doc("d1", "Budget", "Finance/Budget Reports")]);
    direct.open_folder("finance");
    direct.open_folder("budget");
    direct.open_folder("q1");
    assert!(direct.open_folder("budget"));

    assert_eq!(via_crumb.navigation.current, direct.navigation.current);
    assert_eq!(via_crumb.navigation.history, direct.navigation.history);
    assert_eq!(via_crumb.visible_ids(), vec!["d1".to_string()]);

    // Back returns to the folder the click was made from
    assert!(via_crumb.go_back());
    assert_eq!(via_crumb.navigation.current.as_deref(), Some("q1"));
}

/// Test: out-of-range segments do nothing
#[test]
fn test_activate_breadcrumb_out_of_range() {
    let mut page = finance_page(Vec::new());
    page.open_folder("finance");
    assert!(!page.activate_breadcrumb(5));
    assert_eq!(page.navigation.current.as_deref(), Some("finance"));
}
