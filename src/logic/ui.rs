//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use crate::{SortKey, ViewMode};

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 2500;

/// Cycle to the next view mode: List → Grid → Tree → List
///
/// # Examples
/// ```
/// use docdeck::ViewMode;
/// use docdeck::logic::ui::cycle_view_mode;
///
/// assert_eq!(cycle_view_mode(ViewMode::List), ViewMode::Grid);
/// assert_eq!(cycle_view_mode(ViewMode::Grid), ViewMode::Tree);
/// assert_eq!(cycle_view_mode(ViewMode::Tree), ViewMode::List);
/// ```
pub fn cycle_view_mode(current: ViewMode) -> ViewMode {
    match current {
        ViewMode::List => ViewMode::Grid,
        ViewMode::Grid => ViewMode::Tree,
        ViewMode::Tree => ViewMode::List,
    }
}

/// Cycle to the next sort key
///
/// Order: Title → Uploaded → Modified → Status → Security → Owner → Title
///
/// # Examples
/// ```
/// use docdeck::SortKey;
/// use docdeck::logic::ui::cycle_sort_key;
///
/// assert_eq!(cycle_sort_key(SortKey::Title), SortKey::UploadedAt);
/// assert_eq!(cycle_sort_key(SortKey::UploadedBy), SortKey::Title);
/// ```
pub fn cycle_sort_key(current: SortKey) -> SortKey {
    match current {
        SortKey::Title => SortKey::UploadedAt,
        SortKey::UploadedAt => SortKey::LastModified,
        SortKey::LastModified => SortKey::ApprovalStatus,
        SortKey::ApprovalStatus => SortKey::SecurityLevel,
        SortKey::SecurityLevel => SortKey::UploadedBy,
        SortKey::UploadedBy => SortKey::Title,
    }
}

/// Whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}
