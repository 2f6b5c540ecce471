//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::Framework;
use crate::{SortDirection, SortKey, ViewMode};

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// Active sort key and direction for a collection view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Label for the status bar, e.g. "Title ↑"
    pub fn label(&self) -> String {
        format!("{} {}", self.key.as_str(), self.direction.arrow())
    }
}

/// Per-framework capability overrides read from the config file
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOverrides {
    pub title: Option<String>,
    pub bulk_actions: Option<bool>,
    pub approval_visible: Option<bool>,
    pub upload_enabled: Option<bool>,
    pub initial_view_mode: Option<ViewMode>,
}

/// What one framework page shows and allows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub framework: Framework,
    pub title: String,
    /// Checkboxes, select-all and batch actions
    pub bulk_actions: bool,
    /// Approval column and approve/reject/revision actions
    pub approval_visible: bool,
    pub upload_enabled: bool,
    pub initial_view_mode: ViewMode,
}

impl PageConfig {
    /// Built-in defaults for a framework
    pub fn for_framework(framework: Framework) -> Self {
        let (title, bulk_actions, approval_visible) = match framework {
            Framework::Iso9001 => ("ISO 9001 Quality Management", true, true),
            Framework::Iso2 => ("ISO2 Document Control", false, true),
            Framework::Edc => ("EDC Engineering Documents", true, false),
            Framework::Ce => ("CE Technical File", true, true),
        };

        Self {
            framework,
            title: title.to_string(),
            bulk_actions,
            approval_visible,
            upload_enabled: true,
            initial_view_mode: ViewMode::default(),
        }
    }

    /// Apply config file overrides on top of these settings
    pub fn with_overrides(mut self, overrides: &PageOverrides) -> Self {
        if let Some(title) = &overrides.title {
            self.title = title.clone();
        }
        if let Some(v) = overrides.bulk_actions {
            self.bulk_actions = v;
        }
        if let Some(v) = overrides.approval_visible {
            self.approval_visible = v;
        }
        if let Some(v) = overrides.upload_enabled {
            self.upload_enabled = v;
        }
        if let Some(v) = overrides.initial_view_mode {
            self.initial_view_mode = v;
        }
        self
    }
}

/// A row (list) or card (grid) in the content area
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Entry {
    Folder(String),
    Document(String),
}

impl Entry {
    pub fn id(&self) -> &str {
        match self {
            Entry::Folder(id) | Entry::Document(id) => id,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Entry::Folder(_))
    }
}

/// Folder explorer panel state (tree view)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplorerState {
    /// Folder ids whose children are shown
    pub expanded: HashSet<String>,
    /// Row under the explorer cursor
    pub cursor: usize,
}

/// What a text input dialog is collecting
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextInputPurpose {
    /// File name for a simulated upload into the current folder
    Upload,
    /// New title for an existing document
    Rename { document_id: String },
}

/// Single-line text input dialog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextInputState {
    pub purpose: TextInputPurpose,
    pub buffer: String,
}

impl TextInputState {
    pub fn new(purpose: TextInputPurpose, initial: &str) -> Self {
        Self {
            purpose,
            buffer: initial.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        match self.purpose {
            TextInputPurpose::Upload => "Upload Document",
            TextInputPurpose::Rename { .. } => "Edit Title",
        }
    }
}

/// Pending delete awaiting confirmation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmDeleteState {
    pub document_ids: Vec<String>,
    /// Shown in the dialog: a title for one document, a count for several
    pub description: String,
}

/// Audit trail popup, for one document or the whole page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditPopupState {
    pub document_id: Option<String>,
    pub scroll_offset: u16,
}
