//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, dialogs, popups, and visual state.

use std::time::Instant;

use super::types::{AuditPopupState, ConfirmDeleteState, TextInputState, VimCommandState};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Vim command state (for 'gg' double-key)
    pub vim_command_state: VimCommandState,

    /// Checkboxes shown and batch actions enabled
    pub bulk_mode: bool,

    /// Whether keys go to the folder explorer (tree view only)
    pub explorer_focused: bool,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Confirmation dialog for deleting documents
    pub confirm_delete: Option<ConfirmDeleteState>,

    /// Upload / rename input dialog
    pub text_input: Option<TextInputState>,

    /// Document info popup (document id)
    pub info_popup: Option<String>,

    /// Audit trail popup
    pub audit_popup: Option<AuditPopupState>,

    /// Key binding help
    pub show_help: bool,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // SEARCH
    // ============================================
    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    /// Query being typed; applied to the page on every keystroke
    pub search_input: String,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            bulk_mode: false,
            explorer_focused: false,
            confirm_delete: None,
            text_input: None,
            info_popup: None,
            audit_popup: None,
            show_help: false,
            toast_message: None,
            search_mode: false,
            search_input: String::new(),
            should_quit: false,
        }
    }

    /// Check if any modal dialog is currently showing
    pub fn has_modal(&self) -> bool {
        self.confirm_delete.is_some()
            || self.text_input.is_some()
            || self.info_popup.is_some()
            || self.audit_popup.is_some()
            || self.show_help
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.confirm_delete = None;
        self.text_input = None;
        self.info_popup = None;
        self.audit_popup = None;
        self.show_help = false;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Show an error toast ("Error: ...")
    pub fn show_error(&mut self, error: impl std::fmt::Display) {
        tracing::warn!(error = %error, "action failed");
        self.show_toast(format!("Error: {}", error));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
