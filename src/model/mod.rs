//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **PageModel**: One framework page (tree, documents, collection view)
//! - **UiModel**: User preferences, dialogs, popups
//! - **ActivityModel**: Audit trail and notifications
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state
//! - No terminal I/O: Rendering and input live in the binary
//! - Pure accessors: Helper methods are side-effect free

pub mod activity;
pub mod navigation;
pub mod page;
pub mod selection;
pub mod tree;
pub mod types;
pub mod ui;

pub use activity::{ActivityModel, AuditAction, AuditEntry, Notification};
pub use navigation::NavigationModel;
pub use page::PageModel;
pub use selection::SelectionStore;
pub use tree::{FolderNode, FolderTree};
pub use types::*;
pub use ui::UiModel;

use crate::domain::Framework;

/// The signed-in (mock) user
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub email: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: "user-1".to_string(),
            name: "Sarah Johnson".to_string(),
            title: "Quality Manager".to_string(),
            email: "sarah.johnson@example.com".to_string(),
        }
    }
}

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// One page per framework, in tab order
    pub pages: Vec<PageModel>,

    /// Index of the page being shown
    pub active_page: usize,

    /// UI preferences and popups
    pub ui: UiModel,

    /// Audit trail and notifications
    pub activity: ActivityModel,

    pub current_user: UserProfile,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(pages: Vec<PageModel>, current_user: UserProfile, vim_mode: bool) -> Self {
        Self {
            pages,
            active_page: 0,
            ui: UiModel::new(vim_mode),
            activity: ActivityModel::new(),
            current_user,
        }
    }

    /// Page being shown. None only when no pages were loaded.
    pub fn page(&self) -> Option<&PageModel> {
        self.pages.get(self.active_page)
    }

    pub fn page_mut(&mut self) -> Option<&mut PageModel> {
        self.pages.get_mut(self.active_page)
    }

    /// Switch to the page for `framework`; false if it has no page
    pub fn show_framework(&mut self, framework: Framework) -> bool {
        match self
            .pages
            .iter()
            .position(|p| p.config.framework == framework)
        {
            Some(idx) => {
                self.active_page = idx;
                true
            }
            None => false,
        }
    }

    /// Cycle through pages (wrapping)
    pub fn next_page(&mut self) {
        if let Some(idx) = crate::logic::navigation::next_in_list(Some(self.active_page), self.pages.len()) {
            self.active_page = idx;
        }
    }

    pub fn prev_page(&mut self) {
        if let Some(idx) = crate::logic::navigation::prev_in_list(Some(self.active_page), self.pages.len()) {
            self.active_page = idx;
        }
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.ui.close_all_modals();
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}
