//! docdeck library
//!
//! Exposes the document collection core (model, logic, repository, seed data)
//! for the TUI binary and for testing.

pub mod config;
pub mod domain;
pub mod error;
pub mod logic;
pub mod model;
pub mod repository;
pub mod seed;
pub mod utils;

use serde::{Deserialize, Serialize};

/// Presentation of the current folder's collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
    Tree, // List plus the persistent explorer panel
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::List => "List",
            ViewMode::Grid => "Grid",
            ViewMode::Tree => "Tree",
        }
    }

    /// Whether the left-hand folder explorer is shown
    pub fn shows_explorer(&self) -> bool {
        matches!(self, ViewMode::Tree)
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(ViewMode::List),
            "grid" => Ok(ViewMode::Grid),
            "tree" => Ok(ViewMode::Tree),
            other => Err(format!("unknown view mode '{}'", other)),
        }
    }
}

/// Document attribute used for ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Title,
    UploadedAt,
    #[serde(alias = "status")]
    ApprovalStatus,
    SecurityLevel,
    UploadedBy,
    LastModified,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::UploadedAt => "Uploaded",
            SortKey::ApprovalStatus => "Status",
            SortKey::SecurityLevel => "Security",
            SortKey::UploadedBy => "Owner",
            SortKey::LastModified => "Modified",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Desc)
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}
