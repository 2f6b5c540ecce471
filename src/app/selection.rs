//! Selection orchestration methods
//!
//! Bulk mode and the selection keys. The selection itself lives in each
//! page's `SelectionStore`; these methods only decide which id to pass.

use docdeck::model::Entry;

use crate::App;

impl App {
    /// Whether checkboxes are shown on the active page
    pub(crate) fn bulk_enabled(&self) -> bool {
        self.model.ui.bulk_mode
            && self
                .model
                .page()
                .map(|p| p.config.bulk_actions)
                .unwrap_or(false)
    }

    /// Refuses with a toast when the page has bulk actions turned off
    fn ensure_bulk_allowed(&mut self) -> bool {
        let Some(page) = self.model.page() else {
            return false;
        };
        if page.config.bulk_actions {
            return true;
        }
        let message = format!("Bulk actions are disabled for {}", page.config.title);
        self.model.show_toast(message);
        false
    }

    pub(crate) fn toggle_bulk_mode(&mut self) {
        if !self.ensure_bulk_allowed() {
            return;
        }
        self.model.ui.bulk_mode = !self.model.ui.bulk_mode;
        if !self.model.ui.bulk_mode {
            if let Some(page) = self.model.page_mut() {
                page.deselect_all();
            }
        }
    }

    fn cursor_document_id(&self) -> Option<String> {
        match self.model.page()?.cursor_entry()? {
            Entry::Document(id) => Some(id),
            Entry::Folder(_) => None,
        }
    }

    /// Space: select or deselect the document under the cursor
    pub(crate) fn toggle_selection_under_cursor(&mut self) {
        if !self.ensure_bulk_allowed() {
            return;
        }
        let Some(id) = self.cursor_document_id() else {
            return;
        };
        self.model.ui.bulk_mode = true;
        if let Some(page) = self.model.page_mut() {
            page.toggle_selection(&id);
        }
    }

    /// Extend the selection from the last selected document to the cursor
    pub(crate) fn range_select_to_cursor(&mut self) {
        if !self.ensure_bulk_allowed() {
            return;
        }
        let Some(id) = self.cursor_document_id() else {
            return;
        };
        self.model.ui.bulk_mode = true;
        if let Some(page) = self.model.page_mut() {
            page.range_select_to(&id);
        }
    }

    pub(crate) fn select_all_visible(&mut self) {
        if !self.ensure_bulk_allowed() {
            return;
        }
        self.model.ui.bulk_mode = true;
        if let Some(page) = self.model.page_mut() {
            page.select_all_visible();
            let count = page.selection.len();
            self.model.show_toast(format!("Selected {} document(s)", count));
        }
    }

    pub(crate) fn deselect_all(&mut self) {
        if let Some(page) = self.model.page_mut() {
            page.deselect_all();
        }
    }
}
