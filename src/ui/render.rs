use chrono::Local;
use ratatui::Frame;

use docdeck::logic::layout::{grid_columns, scroll_offset, MIN_CARD_WIDTH};
use docdeck::ViewMode;

use crate::App;

use super::{
    audit_trail, breadcrumb, dialogs, document_grid, document_list, layout, legend, search,
    status_bar, toast, tree_explorer,
};

/// Main render function - orchestrates all UI rendering
///
/// Also records the geometry key handling needs (cards per row, rows per
/// page, scroll offset), since only the renderer knows the terminal size.
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let today = Local::now().date_naive();

    let vim_mode = app.model.ui.vim_mode;
    let search_mode = app.model.ui.search_mode;
    let bulk_checkboxes = app.bulk_enabled();

    let (shows_explorer, bulk_available, approval_visible, has_query) = match app.model.page() {
        Some(page) => (
            page.view_mode.shows_explorer(),
            page.config.bulk_actions,
            page.config.approval_visible,
            !page.search_query.is_empty(),
        ),
        None => (false, false, false, false),
    };
    let explorer_focused = app.model.ui.explorer_focused && shows_explorer;

    // Calculate layout
    let legend_height = legend::calculate_legend_height(
        size.width,
        vim_mode,
        bulk_available,
        approval_visible,
        explorer_focused,
        search_mode,
        has_query,
    );
    let layout_info = layout::calculate_layout(
        size,
        shows_explorer,
        search_mode || has_query,
        legend_height,
    );

    breadcrumb::render_tabs(f, layout_info.tabs_area, &app.model.pages, app.model.active_page);

    if let Some(page) = app.model.page() {
        breadcrumb::render_breadcrumb_bar(f, layout_info.breadcrumb_area, page);

        if let Some(explorer_area) = layout_info.explorer_area {
            tree_explorer::render_tree_explorer(f, explorer_area, page, explorer_focused);
        }

        // Keep the cursor row on screen
        let content = layout_info.content_area;
        let cursor = page.cursor.unwrap_or(0);
        if page.view_mode == ViewMode::Grid {
            let inner_width = content.width.saturating_sub(2);
            app.grid_columns = grid_columns(inner_width, MIN_CARD_WIDTH);
            app.page_rows = document_grid::visible_card_rows(content);
            app.grid_offset = scroll_offset(cursor / app.grid_columns, app.grid_offset, app.page_rows);
            document_grid::render_document_grid(
                f,
                content,
                page,
                bulk_checkboxes,
                app.grid_columns,
                app.grid_offset,
                today,
            );
        } else {
            app.grid_columns = 1;
            app.page_rows = content.height.saturating_sub(2).max(1) as usize;
            app.grid_offset = scroll_offset(cursor, app.grid_offset, app.page_rows);
            document_list::render_document_list(
                f,
                content,
                page,
                bulk_checkboxes,
                !explorer_focused,
                app.grid_offset,
                today,
            );
        }

        if let Some(search_area) = layout_info.search_area {
            let query = if search_mode {
                app.model.ui.search_input.as_str()
            } else {
                page.search_query.as_str()
            };
            search::render_search_input(
                f,
                search_area,
                query,
                search_mode,
                page.visible_documents().len(),
                vim_mode,
            );
        }
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        vim_mode,
        bulk_available,
        approval_visible,
        explorer_focused,
        search_mode,
        has_query,
    );
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        app.model.page(),
        app.model.ui.bulk_mode,
        &app.model.current_user,
    );

    // Modal layers, at most one is open at a time
    if let Some(state) = &app.model.ui.confirm_delete {
        dialogs::render_delete_confirmation(f, state);
    } else if let Some(state) = &app.model.ui.text_input {
        dialogs::render_text_input(f, state);
    } else if let Some(id) = &app.model.ui.info_popup {
        if let Some(page) = app.model.page() {
            if let Some(doc) = page.document(id) {
                dialogs::render_document_info(f, doc, page, today);
            }
        }
    } else if let Some(popup) = &app.model.ui.audit_popup {
        if let Some(page) = app.model.page() {
            let title = popup
                .document_id
                .as_deref()
                .and_then(|id| page.document(id))
                .map(|d| d.title.as_str());
            audit_trail::render_audit_trail(
                f,
                size,
                &app.model.activity,
                page.config.framework,
                popup,
                title,
            );
        }
    } else if app.model.ui.show_help {
        dialogs::render_help(
            f,
            app.config_path.as_deref(),
            app.model.activity.notifications().len(),
        );
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
