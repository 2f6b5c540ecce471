//! Tests for the per-page document collection view
//!
//! Navigation, search, view-mode switching and how the selection follows
//! (or does not follow) changes of the visible collection.

mod common;

use common::{doc, finance_page};
use docdeck::logic::navigation::CursorMove;
use docdeck::model::{Entry, SortState};
use docdeck::{SortDirection, SortKey, ViewMode};

fn budget_docs() -> Vec<docdeck::domain::Document> {
    vec![
        doc("b1", "Annual Budget", "Finance/Budget Reports"),
        doc("b2", "Capex Plan", "Finance/Budget Reports"),
        doc("q1", "Q1 Variance", "Finance/Budget Reports/2024 Q1"),
        doc("r1", "Audit Fees", "Finance/Reports"),
        doc("h1", "Headcount", "HR/Reports"),
    ]
}

/// Test: view-mode round trip leaves selection and sort untouched
#[test]
fn test_view_mode_round_trip_preserves_state() {
    let mut page = finance_page(budget_docs());
    page.open_folder("finance");
    page.open_folder("budget");
    page.set_sort(SortState::new(SortKey::UploadedBy, SortDirection::Desc));
    page.toggle_selection("b1");
    page.toggle_selection("b2");

    let selection_before = page.selection.ids().clone();
    let sort_before = page.sort;

    page.set_view_mode(ViewMode::Grid);
    page.set_view_mode(ViewMode::Tree);
    page.set_view_mode(ViewMode::List);

    assert_eq!(page.selection.ids(), &selection_before);
    assert_eq!(page.sort, sort_before);
    assert_eq!(page.view_mode, ViewMode::List);
    assert_eq!(page.navigation.current.as_deref(), Some("budget"));
}

/// Test: the tree view expands the explorer down to the current folder
#[test]
fn test_tree_view_reveals_current_folder() {
    let mut page = finance_page(budget_docs());
    page.open_folder("finance");
    page.open_folder("budget");
    page.open_folder("q1");
    page.set_view_mode(ViewMode::Tree);

    assert!(page.explorer.expanded.contains("finance"));
    assert!(page.explorer.expanded.contains("budget"));
    let rows = page.explorer_rows();
    assert_eq!(rows[page.explorer.cursor].1.id, "q1");
}

/// Test: with pruning on, leaving a folder drops the hidden selection
#[test]
fn test_navigation_prunes_selection_when_enabled() {
    let mut page = finance_page(budget_docs()).with_prune_selection(true);
    page.open_folder("finance");
    page.open_folder("budget");
    page.select_all_visible();
    assert_eq!(page.selection.len(), 2);

    page.open_folder("q1");
    assert!(page.selection.is_empty());
}

/// Test: with pruning off, the selection survives navigation
#[test]
fn test_navigation_keeps_selection_when_disabled() {
    let mut page = finance_page(budget_docs()).with_prune_selection(false);
    page.open_folder("finance");
    page.open_folder("budget");
    page.select_all_visible();

    page.open_folder("q1");
    assert_eq!(page.selection.len(), 2);
    // Hidden selections still count as action targets
    assert_eq!(page.action_targets().len(), 2);
}

/// Test: search narrows the folder and prunes hidden selections
#[test]
fn test_search_filters_current_folder() {
    let mut page = finance_page(budget_docs());
    page.open_folder("finance");
    page.open_folder("budget");
    page.select_all_visible();

    page.set_search_query("capex");
    assert_eq!(page.visible_ids(), vec!["b2".to_string()]);
    assert_eq!(page.selected_ids(), vec!["b2".to_string()]);

    // Sub-folders are filtered by name while searching
    assert!(page.child_folders().is_empty());
    page.set_search_query("");
    assert_eq!(page.child_folders().len(), 1);
}

/// Test: the page root lists every document
#[test]
fn test_root_shows_all_documents_and_top_folders() {
    let page = finance_page(budget_docs());
    assert_eq!(page.visible_documents().len(), 5);
    let folders: Vec<Entry> = page.entries().into_iter().filter(|e| e.is_folder()).collect();
    assert_eq!(
        folders,
        vec![Entry::Folder("hr".to_string()), Entry::Folder("finance".to_string())]
    );
}

/// Test: back, up and root
#[test]
fn test_back_up_and_root() {
    let mut page = finance_page(budget_docs());
    assert!(!page.go_back());
    assert!(!page.go_up());

    page.open_folder("finance");
    page.open_folder("budget");
    assert!(page.go_up());
    assert_eq!(page.navigation.current.as_deref(), Some("finance"));

    assert!(page.go_back());
    assert_eq!(page.navigation.current.as_deref(), Some("budget"));

    assert!(page.go_root());
    assert!(page.navigation.at_root());
    assert!(!page.go_root());
    assert!(!page.open_folder("does-not-exist"));
}

/// Test: changing the sort keeps the cursor on the same entry
#[test]
fn test_sort_change_keeps_cursor_entry() {
    let mut page = finance_page(budget_docs());
    page.open_folder("finance");
    page.open_folder("budget");

    // Entries: [2024 Q1 folder, Annual Budget, Capex Plan]
    page.move_cursor(CursorMove::Last, 1, 10);
    assert_eq!(page.cursor_entry(), Some(Entry::Document("b2".to_string())));

    page.toggle_sort_direction();
    assert_eq!(page.cursor_entry(), Some(Entry::Document("b2".to_string())));
    assert_eq!(page.cursor, Some(1));
}

/// Test: deleting removes the ids from the selection even without pruning
#[test]
fn test_delete_deselects_removed_documents() {
    let mut page = finance_page(budget_docs()).with_prune_selection(false);
    page.open_folder("finance");
    page.open_folder("budget");
    page.select_all_visible();

    let deleted = page.delete_documents(&["b1".to_string()]).unwrap();
    assert_eq!(deleted[0].title, "Annual Budget");
    assert!(!page.selection.is_selected("b1"));
    assert!(page.selection.is_selected("b2"));
}

/// Test: a delete with any unknown id removes nothing
#[test]
fn test_delete_is_all_or_nothing() {
    let mut page = finance_page(budget_docs());
    let result = page.delete_documents(&["b1".to_string(), "ghost".to_string()]);
    assert!(result.is_err());
    assert!(page.document("b1").is_some());
    assert_eq!(page.repository.len(), 5);
}

/// Test: a repeated id is deleted once and the rest of the state follows
#[test]
fn test_delete_with_repeated_id() {
    let mut page = finance_page(budget_docs());
    page.open_folder("finance");
    page.open_folder("budget");
    page.select_all_visible();

    let deleted = page
        .delete_documents(&["b1".to_string(), "b1".to_string()])
        .unwrap();
    assert_eq!(deleted.len(), 1);
    assert_eq!(page.repository.len(), 4);
    assert!(!page.selection.is_selected("b1"));
    assert!(page.selection.is_selected("b2"));
    // Entries: [2024 Q1 folder, Capex Plan]
    assert_eq!(page.entries().len(), 2);
}

/// Test: folder counts include sub-folders
#[test]
fn test_folder_document_count_covers_subtree() {
    let page = finance_page(budget_docs());
    assert_eq!(page.folder_document_count("finance"), 4);
    assert_eq!(page.folder_document_count("budget"), 3);
    assert_eq!(page.folder_document_count("hr"), 1);
}
