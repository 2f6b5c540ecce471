// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: File-type glyphs, status badges and colors
// - layout: Calculates screen layout (tabs, breadcrumb, explorer split, legend)
// - render: Main orchestration function that coordinates all rendering
// - breadcrumb: Framework tabs and the numbered breadcrumb bar
// - document_list: Entries as rows (list view, right pane of tree view)
// - document_grid: Entries as cards
// - tree_explorer: Expandable folder tree (tree view, left pane)
// - legend: Renders hotkey legend
// - search: Renders search input box with query and match count
// - status_bar: Renders bottom status bar
// - dialogs: Delete confirmation, text input, document info, help
// - audit_trail: Audit trail popup
// - toast: Renders toast notifications (brief pop-up messages)

pub mod audit_trail;
pub mod breadcrumb;
pub mod dialogs;
pub mod document_grid;
pub mod document_list;
pub mod icons;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod toast;
pub mod tree_explorer;

// Re-export main render function for convenience
pub use render::render;
