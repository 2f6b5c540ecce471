//! Search functionality
//!
//! The query is applied to the active page on every keystroke, so the list
//! narrows while typing. Enter keeps the query, Esc clears it.

use crate::App;

impl App {
    pub(crate) fn start_search(&mut self) {
        self.model.ui.search_mode = true;
        self.model.ui.search_input = self
            .model
            .page()
            .map(|p| p.search_query.clone())
            .unwrap_or_default();
    }

    pub(crate) fn search_push(&mut self, c: char) {
        self.model.ui.search_input.push(c);
        self.apply_search();
    }

    pub(crate) fn search_pop(&mut self) {
        self.model.ui.search_input.pop();
        self.apply_search();
    }

    /// Enter: stop typing, keep the filter
    pub(crate) fn accept_search(&mut self) {
        self.model.ui.search_mode = false;
    }

    /// Esc: stop typing and clear the filter
    pub(crate) fn clear_search(&mut self) {
        self.model.ui.search_mode = false;
        self.model.ui.search_input.clear();
        self.apply_search();
    }

    pub(crate) fn has_search_query(&self) -> bool {
        self.model
            .page()
            .map(|p| !p.search_query.is_empty())
            .unwrap_or(false)
    }

    fn apply_search(&mut self) {
        let query = self.model.ui.search_input.clone();
        if let Some(page) = self.model.page_mut() {
            page.set_search_query(&query);
            tracing::trace!(query = %query, matches = page.visible_documents().len(), "search");
        }
        self.grid_offset = 0;
    }
}
