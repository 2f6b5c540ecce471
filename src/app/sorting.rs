//! Sorting and view mode orchestration methods
//!
//! - Cycling the sort key and flipping its direction
//! - Cycling list / grid / tree presentation
//!
//! The page keeps the cursor on the same entry across re-sorts.

use crate::App;

impl App {
    pub(crate) fn cycle_sort_key(&mut self) {
        if let Some(page) = self.model.page_mut() {
            page.cycle_sort_key();
            tracing::debug!(sort = %page.sort.label(), "sort key changed");
        }
    }

    pub(crate) fn toggle_sort_direction(&mut self) {
        if let Some(page) = self.model.page_mut() {
            page.toggle_sort_direction();
        }
    }

    pub(crate) fn cycle_view_mode(&mut self) {
        if let Some(page) = self.model.page_mut() {
            page.cycle_view_mode();
            let mode = page.view_mode;
            tracing::debug!(mode = mode.as_str(), "view mode changed");
            if !mode.shows_explorer() {
                self.model.ui.explorer_focused = false;
            }
        }
        self.grid_offset = 0;
    }
}
