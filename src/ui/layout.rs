use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Framework tabs (top)
    pub tabs_area: Rect,
    /// Breadcrumb bar below the tabs
    pub breadcrumb_area: Rect,
    /// Folder explorer (tree view only)
    pub explorer_area: Option<Rect>,
    /// List or grid of entries
    pub content_area: Rect,
    /// Search input area (if visible)
    pub search_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(
    terminal_size: Rect,
    show_explorer: bool,
    search_visible: bool,
    legend_height: u16,
) -> LayoutInfo {
    let search_height = if search_visible { 3 } else { 0 };

    // tabs + breadcrumb + content + search + legend + status
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Framework tabs
            Constraint::Length(3),             // Breadcrumb bar (bordered)
            Constraint::Min(3),                // Content area
            Constraint::Length(search_height), // Search input (3 lines when visible, 0 when hidden)
            Constraint::Length(legend_height), // Legend area (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar (bordered)
        ])
        .split(terminal_size);

    let body = main_chunks[2];
    let (explorer_area, content_area) = if show_explorer {
        let width = docdeck::logic::layout::explorer_width(body.width);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(width), Constraint::Min(10)])
            .split(body);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, body)
    };

    LayoutInfo {
        tabs_area: main_chunks[0],
        breadcrumb_area: main_chunks[1],
        explorer_area,
        content_area,
        search_area: search_visible.then_some(main_chunks[3]),
        legend_area: main_chunks[4],
        status_area: main_chunks[5],
    }
}

/// Rectangle of `width` x `height` centered in `area`, clipped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
