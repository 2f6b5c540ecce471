//! Navigation orchestration methods
//!
//! Methods for traversing the folder hierarchy:
//! - Opening the entry under the cursor
//! - Back / up / root and breadcrumb jumps
//! - Cursor movement in the list, grid and explorer
//! - Switching between framework pages

use docdeck::logic::navigation::CursorMove;
use docdeck::model::Entry;
use docdeck::ViewMode;

use crate::App;

impl App {
    /// Enter: open a folder, or show info for a document
    pub(crate) fn open_entry_under_cursor(&mut self) {
        let explorer_focused = self.model.ui.explorer_focused;
        let Some(page) = self.model.page_mut() else {
            return;
        };

        if explorer_focused && page.view_mode.shows_explorer() {
            page.explorer_open();
            self.grid_offset = 0;
            return;
        }

        match page.cursor_entry() {
            Some(Entry::Folder(id)) => {
                page.open_folder(&id);
                self.grid_offset = 0;
            }
            Some(Entry::Document(id)) => {
                self.model.ui.info_popup = Some(id);
            }
            None => {}
        }
    }

    pub(crate) fn go_back(&mut self) {
        if let Some(page) = self.model.page_mut() {
            if page.go_back() {
                self.grid_offset = 0;
            }
        }
    }

    pub(crate) fn go_up(&mut self) {
        if let Some(page) = self.model.page_mut() {
            if page.go_up() {
                self.grid_offset = 0;
            }
        }
    }

    pub(crate) fn go_root(&mut self) {
        if let Some(page) = self.model.page_mut() {
            if page.go_root() {
                self.grid_offset = 0;
            }
        }
    }

    /// Jump to breadcrumb segment `index` (0-based)
    pub(crate) fn activate_breadcrumb(&mut self, index: usize) {
        let Some(page) = self.model.page_mut() else {
            return;
        };
        if page.activate_breadcrumb(index) {
            self.grid_offset = 0;
        } else if index < page.breadcrumb().len() {
            self.model
                .show_toast("That folder is not in this page's tree".to_string());
        }
    }

    pub(crate) fn move_cursor(&mut self, movement: CursorMove) {
        let explorer_focused = self.model.ui.explorer_focused;
        let (columns, page_rows) = (self.grid_columns, self.page_rows);
        let Some(page) = self.model.page_mut() else {
            return;
        };

        if explorer_focused && page.view_mode.shows_explorer() {
            page.explorer_move(movement);
            return;
        }

        let columns = if page.view_mode == ViewMode::Grid { columns } else { 1 };
        page.move_cursor(movement, columns, page_rows.max(1));
    }

    /// Left/Right in the explorer collapse and expand; in the grid they move
    pub(crate) fn horizontal(&mut self, movement: CursorMove) {
        let explorer_focused = self.model.ui.explorer_focused;
        let Some(page) = self.model.page_mut() else {
            return;
        };

        if explorer_focused && page.view_mode.shows_explorer() {
            page.explorer_toggle_expand();
        } else if page.view_mode == ViewMode::Grid {
            self.move_cursor(movement);
        } else if movement == CursorMove::Right {
            self.open_entry_under_cursor();
        } else {
            self.go_up();
        }
    }

    /// Tab inside tree view moves focus between explorer and content
    pub(crate) fn toggle_explorer_focus(&mut self) -> bool {
        let shows_explorer = self
            .model
            .page()
            .map(|p| p.view_mode.shows_explorer())
            .unwrap_or(false);
        if !shows_explorer {
            self.model.ui.explorer_focused = false;
            return false;
        }
        self.model.ui.explorer_focused = !self.model.ui.explorer_focused;
        true
    }

    pub(crate) fn next_page(&mut self) {
        self.model.next_page();
        self.after_page_switch();
    }

    pub(crate) fn prev_page(&mut self) {
        self.model.prev_page();
        self.after_page_switch();
    }

    fn after_page_switch(&mut self) {
        self.grid_offset = 0;
        self.model.ui.explorer_focused = false;
        // The search box shows the active page's query
        self.model.ui.search_input = self
            .model
            .page()
            .map(|p| p.search_query.clone())
            .unwrap_or_default();
        if let Some(page) = self.model.page() {
            tracing::debug!(framework = page.config.framework.as_str(), "switched page");
        }
    }
}
