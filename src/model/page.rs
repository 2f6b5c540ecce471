//! Page Model
//!
//! One framework page: its folder tree, documents, and the collection view
//! state shared by the list, grid and tree presentations (current folder,
//! selection, sort, search and cursor).
//!
//! All views read the same `visible_documents()`, so switching presentation
//! never changes what is selected or how it is ordered.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::navigation::NavigationModel;
use super::selection::SelectionStore;
use super::tree::{FolderNode, FolderTree};
use super::types::{Entry, ExplorerState, PageConfig, SortState};
use crate::domain::{Document, Section};
use crate::error::RepositoryResult;
use crate::logic;
use crate::logic::breadcrumb::BreadcrumbSegment;
use crate::logic::navigation::CursorMove;
use crate::repository::{DocumentRepository, InMemoryRepository};
use crate::ViewMode;

#[derive(Clone, Debug)]
pub struct PageModel {
    pub config: PageConfig,
    pub tree: FolderTree,
    pub repository: InMemoryRepository,
    pub navigation: NavigationModel,
    pub selection: SelectionStore,
    pub sort: SortState,
    pub view_mode: ViewMode,
    pub search_query: String,
    /// Index into `entries()`
    pub cursor: Option<usize>,
    pub explorer: ExplorerState,
    /// Drop selected ids that leave the visible collection
    pub prune_selection_on_navigate: bool,
}

impl PageModel {
    pub fn new(config: PageConfig, sections: &[Section], documents: Vec<Document>) -> Self {
        let view_mode = config.initial_view_mode;
        let mut page = Self {
            config,
            tree: FolderTree::from_sections(sections),
            repository: InMemoryRepository::from_documents(documents),
            navigation: NavigationModel::new(),
            selection: SelectionStore::new(),
            sort: SortState::default(),
            view_mode,
            search_query: String::new(),
            cursor: None,
            explorer: ExplorerState::default(),
            prune_selection_on_navigate: true,
        };
        page.cursor = logic::navigation::clamp_cursor(None, page.entries().len());
        page
    }

    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_prune_selection(mut self, prune: bool) -> Self {
        self.prune_selection_on_navigate = prune;
        self
    }

    // ============================================
    // COLLECTION
    // ============================================

    pub fn current_folder(&self) -> Option<&FolderNode> {
        self.navigation.current().and_then(|id| self.tree.get(id))
    }

    /// Derived path of the current folder (None at the page root)
    pub fn current_path(&self) -> Option<&str> {
        self.current_folder().and_then(|node| node.path.as_deref())
    }

    /// Documents of the current folder, filtered by the search query and
    /// ordered by the sort state. At the page root every document is shown.
    pub fn visible_documents(&self) -> Vec<&Document> {
        let path = self.current_path();
        let in_scope: Vec<&Document> = self
            .repository
            .list()
            .iter()
            .filter(|doc| path.map_or(true, |p| logic::document::in_folder(doc, p)))
            .collect();

        let mut docs = logic::search::filter_documents(in_scope, &self.search_query);
        logic::sorting::sort_document_refs(&mut docs, self.sort.key, self.sort.direction);
        docs
    }

    pub fn visible_ids(&self) -> Vec<String> {
        self.visible_documents()
            .iter()
            .map(|doc| doc.id.clone())
            .collect()
    }

    /// Sub-folders of the current folder in tree order. While searching,
    /// only folders whose name matches are listed.
    pub fn child_folders(&self) -> Vec<&FolderNode> {
        self.tree
            .children(self.navigation.current())
            .into_iter()
            .filter(|node| logic::search::search_matches(&self.search_query, &node.name))
            .collect()
    }

    /// Folders first, then documents
    pub fn entries(&self) -> Vec<Entry> {
        self.child_folders()
            .into_iter()
            .map(|node| Entry::Folder(node.id.clone()))
            .chain(
                self.visible_documents()
                    .into_iter()
                    .map(|doc| Entry::Document(doc.id.clone())),
            )
            .collect()
    }

    pub fn cursor_entry(&self) -> Option<Entry> {
        self.cursor.and_then(|idx| self.entries().get(idx).cloned())
    }

    pub fn cursor_document(&self) -> Option<&Document> {
        match self.cursor_entry()? {
            Entry::Document(id) => self.document(&id),
            Entry::Folder(_) => None,
        }
    }

    pub fn document(&self, id: &str) -> Option<&Document> {
        self.repository.get(id).ok()
    }

    /// Number of documents in a folder and all folders beneath it
    pub fn folder_document_count(&self, folder_id: &str) -> usize {
        let Some(path) = self.tree.get(folder_id).and_then(|n| n.path.as_deref()) else {
            return 0;
        };
        self.repository
            .list()
            .iter()
            .filter(|doc| logic::document::in_subtree(doc, path))
            .count()
    }

    // ============================================
    // NAVIGATION
    // ============================================

    /// Show the folder `id`, pushing the current folder onto the history
    pub fn open_folder(&mut self, id: &str) -> bool {
        if !self.tree.contains(id) {
            warn!(folder_id = %id, "open_folder: unknown folder");
            return false;
        }
        self.visit(Some(id.to_string()))
    }

    /// Return to the previously shown folder
    pub fn go_back(&mut self) -> bool {
        if !self.navigation.back() {
            return false;
        }
        debug!(folder = ?self.navigation.current, "navigated back");
        self.after_navigation();
        true
    }

    /// Show the parent of the current folder (the root for top-level folders)
    pub fn go_up(&mut self) -> bool {
        let Some(current) = self.navigation.current() else {
            return false;
        };
        let parent = self.tree.parent(current).map(|node| node.id.clone());
        self.visit(parent)
    }

    pub fn go_root(&mut self) -> bool {
        self.visit(None)
    }

    /// Breadcrumb trail of the current folder (empty at the page root)
    pub fn breadcrumb(&self) -> Vec<BreadcrumbSegment> {
        match self.current_folder() {
            Some(node) => logic::breadcrumb::resolve_breadcrumb(node, &self.tree),
            None => Vec::new(),
        }
    }

    /// Navigate to the folder behind breadcrumb segment `index`.
    ///
    /// Behaves exactly like `open_folder`. Label-only segments and
    /// out-of-range indices do nothing.
    pub fn activate_breadcrumb(&mut self, index: usize) -> bool {
        let target = self
            .breadcrumb()
            .into_iter()
            .nth(index)
            .and_then(|segment| segment.target);
        match target {
            Some(id) => self.open_folder(&id),
            None => false,
        }
    }

    fn visit(&mut self, target: Option<String>) -> bool {
        if !self.navigation.visit(target) {
            return false;
        }
        debug!(folder = ?self.navigation.current, "navigated");
        self.after_navigation();
        true
    }

    fn after_navigation(&mut self) {
        self.cursor = Some(0);
        self.reveal_current_in_explorer();
        self.on_collection_changed();
    }

    // ============================================
    // CURSOR
    // ============================================

    pub fn move_cursor(&mut self, movement: CursorMove, columns: usize, page_size: usize) {
        let len = self.entries().len();
        self.cursor = logic::navigation::move_cursor(self.cursor, len, movement, columns, page_size);
    }

    /// Put the cursor on `entry` if it is shown; otherwise just clamp
    fn place_cursor_on(&mut self, entry: Option<Entry>) {
        let entries = self.entries();
        self.cursor = entry
            .and_then(|e| entries.iter().position(|x| *x == e))
            .or_else(|| logic::navigation::clamp_cursor(self.cursor, entries.len()));
    }

    // ============================================
    // VIEW MODE & SORT
    // ============================================

    /// Switch presentation. Selection, sort and cursor are untouched.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        if mode.shows_explorer() {
            self.reveal_current_in_explorer();
        }
    }

    pub fn cycle_view_mode(&mut self) {
        self.set_view_mode(logic::ui::cycle_view_mode(self.view_mode));
    }

    /// Change the ordering; the cursor stays on the same entry
    pub fn set_sort(&mut self, sort: SortState) {
        let under_cursor = self.cursor_entry();
        self.sort = sort;
        self.place_cursor_on(under_cursor);
    }

    pub fn cycle_sort_key(&mut self) {
        let key = logic::ui::cycle_sort_key(self.sort.key);
        self.set_sort(SortState::new(key, self.sort.direction));
    }

    pub fn toggle_sort_direction(&mut self) {
        self.set_sort(SortState::new(self.sort.key, self.sort.direction.flipped()));
    }

    // ============================================
    // SEARCH
    // ============================================

    pub fn set_search_query(&mut self, query: &str) {
        if self.search_query == query {
            return;
        }
        self.search_query = query.to_string();
        self.cursor = Some(0);
        self.on_collection_changed();
    }

    // ============================================
    // SELECTION
    // ============================================

    pub fn toggle_selection(&mut self, id: &str) {
        self.selection.toggle(id);
    }

    pub fn select_all_visible(&mut self) {
        let visible = self.visible_ids();
        self.selection.select_all(&visible);
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    /// Extend the selection from the last selected document to `target`
    pub fn range_select_to(&mut self, target: &str) {
        let visible = self.visible_ids();
        self.selection.range_select(None, target, &visible);
    }

    /// Selected ids, visible ones first in display order
    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.ordered_ids(&self.visible_ids())
    }

    /// Documents an action applies to: the selection, or the document under
    /// the cursor when nothing is selected
    pub fn action_targets(&self) -> Vec<String> {
        if !self.selection.is_empty() {
            return self.selected_ids();
        }
        self.cursor_document()
            .map(|doc| vec![doc.id.clone()])
            .unwrap_or_default()
    }

    /// Re-sync derived state after the visible collection changed
    pub fn on_collection_changed(&mut self) {
        if self.prune_selection_on_navigate {
            let visible = self.visible_ids();
            let dropped = self.selection.prune(&visible);
            if dropped > 0 {
                debug!(dropped, "pruned selection to visible documents");
            }
        }
        self.cursor = logic::navigation::clamp_cursor(self.cursor, self.entries().len());
    }

    // ============================================
    // DOCUMENT CHANGES
    // ============================================

    pub fn create_document(&mut self, document: Document) -> RepositoryResult<()> {
        self.repository.create(document)?;
        self.on_collection_changed();
        Ok(())
    }

    /// Replace a document, keeping the cursor on it. Returns the old version.
    pub fn update_document(&mut self, document: Document) -> RepositoryResult<Document> {
        let under_cursor = self.cursor_entry();
        let previous = self.repository.update(document)?;
        self.place_cursor_on(under_cursor);
        Ok(previous)
    }

    /// Delete every id in `ids`. Nothing is deleted unless all of them exist.
    /// Repeated ids are deleted once.
    pub fn delete_documents(&mut self, ids: &[String]) -> RepositoryResult<Vec<Document>> {
        let mut seen = HashSet::new();
        let unique: Vec<&String> = ids.iter().filter(|id| seen.insert(id.as_str())).collect();
        for id in &unique {
            self.repository.get(id)?;
        }

        let mut deleted = Vec::with_capacity(unique.len());
        for id in unique {
            deleted.push(self.repository.delete(id)?);
            self.selection.select(id, false);
        }
        self.on_collection_changed();
        Ok(deleted)
    }

    // ============================================
    // EXPLORER (tree view)
    // ============================================

    pub fn explorer_rows(&self) -> Vec<(usize, &FolderNode)> {
        self.tree.visible_rows(&self.explorer.expanded)
    }

    pub fn explorer_move(&mut self, movement: CursorMove) {
        let len = self.explorer_rows().len();
        let current = logic::navigation::clamp_cursor(Some(self.explorer.cursor), len);
        self.explorer.cursor = logic::navigation::move_cursor(current, len, movement, 1, 10).unwrap_or(0);
    }

    /// Expand or collapse the folder under the explorer cursor
    pub fn explorer_toggle_expand(&mut self) {
        let Some(id) = self.explorer_cursor_id() else {
            return;
        };
        if !self.explorer.expanded.remove(&id) {
            self.explorer.expanded.insert(id);
        }
    }

    /// Open the folder under the explorer cursor in the content pane
    pub fn explorer_open(&mut self) -> bool {
        match self.explorer_cursor_id() {
            Some(id) => self.open_folder(&id),
            None => false,
        }
    }

    fn explorer_cursor_id(&self) -> Option<String> {
        self.explorer_rows()
            .get(self.explorer.cursor)
            .map(|(_, node)| node.id.clone())
    }

    /// Expand the current folder's ancestors and point the explorer at it
    fn reveal_current_in_explorer(&mut self) {
        let Some(current) = self.navigation.current.clone() else {
            return;
        };
        let chain: Vec<String> = self
            .tree
            .ancestors(&current)
            .iter()
            .map(|node| node.id.clone())
            .collect();
        for id in chain.iter().take(chain.len().saturating_sub(1)) {
            self.explorer.expanded.insert(id.clone());
        }
        let row = self
            .explorer_rows()
            .iter()
            .position(|(_, node)| node.id == current);
        if let Some(row) = row {
            self.explorer.cursor = row;
        }
    }
}
