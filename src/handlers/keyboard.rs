//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions. Modal dialogs get the
//! first look at a key, then the search box, then the main bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use docdeck::domain::ApprovalStatus;
use docdeck::logic::navigation::CursorMove;
use docdeck::model::VimCommandState;

use crate::App;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    if handle_modal_key(app, key) {
        return;
    }

    if app.model.ui.search_mode {
        handle_search_key(app, key);
        return;
    }

    handle_main_key(app, key);
}

/// Keys for whichever dialog is open. Returns true if a dialog consumed the key.
fn handle_modal_key(app: &mut App, key: KeyEvent) -> bool {
    // Delete confirmation
    if app.model.ui.confirm_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.model.ui.confirm_delete = None;
            }
            _ => {} // Ignore other keys while prompt is showing
        }
        return true;
    }

    // Upload / rename input
    if let Some(input) = app.model.ui.text_input.as_mut() {
        match key.code {
            KeyCode::Esc => app.model.ui.text_input = None,
            KeyCode::Enter => app.submit_text_input(),
            KeyCode::Backspace => {
                input.buffer.pop();
            }
            KeyCode::Char(c) => input.buffer.push(c),
            _ => {}
        }
        return true;
    }

    // Document info popup
    if let Some(id) = app.model.ui.info_popup.clone() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('i') => {
                app.model.ui.info_popup = None;
            }
            KeyCode::Char('H') => {
                app.model.ui.info_popup = None;
                app.model.ui.audit_popup = Some(docdeck::model::AuditPopupState {
                    document_id: Some(id),
                    scroll_offset: 0,
                });
            }
            _ => {}
        }
        return true;
    }

    // Audit trail popup
    if let Some(popup) = app.model.ui.audit_popup.as_mut() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('H') | KeyCode::Char('L') => {
                app.model.ui.audit_popup = None;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                popup.scroll_offset = popup.scroll_offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                popup.scroll_offset = popup.scroll_offset.saturating_add(1);
            }
            KeyCode::PageUp => popup.scroll_offset = popup.scroll_offset.saturating_sub(10),
            KeyCode::PageDown => popup.scroll_offset = popup.scroll_offset.saturating_add(10),
            _ => {}
        }
        return true;
    }

    // Help overlay: any key closes it
    if app.model.ui.show_help {
        app.model.ui.show_help = false;
        return true;
    }

    false
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => app.accept_search(),
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.search_push(c),
        KeyCode::Up => app.move_cursor(CursorMove::Up),
        KeyCode::Down => app.move_cursor(CursorMove::Down),
        _ => {}
    }
}

fn handle_main_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Second half of vim 'gg'
    if vim && app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
        app.model.ui.vim_command_state = VimCommandState::None;
        if key.code == KeyCode::Char('g') {
            app.move_cursor(CursorMove::First);
            return;
        }
    }

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Esc => {
            if app.has_search_query() {
                app.clear_search();
            } else if app.model.page().map(|p| !p.selection.is_empty()).unwrap_or(false) {
                app.deselect_all();
            } else {
                app.model.ui.bulk_mode = false;
                app.model.ui.explorer_focused = false;
            }
        }
        KeyCode::Char('?') => app.model.ui.show_help = true,

        // ---- Search ----
        KeyCode::Char('f') if ctrl => app.start_search(),
        KeyCode::Char('/') => app.start_search(),

        // ---- Cursor ----
        KeyCode::Char('d') if ctrl && vim => app.move_cursor(CursorMove::PageDown),
        KeyCode::Char('u') if ctrl && vim => app.move_cursor(CursorMove::PageUp),
        KeyCode::Up => app.move_cursor(CursorMove::Up),
        KeyCode::Down => app.move_cursor(CursorMove::Down),
        KeyCode::Char('k') if vim => app.move_cursor(CursorMove::Up),
        KeyCode::Char('j') if vim => app.move_cursor(CursorMove::Down),
        KeyCode::Left => app.horizontal(CursorMove::Left),
        KeyCode::Right => app.horizontal(CursorMove::Right),
        KeyCode::Char('h') if vim => app.horizontal(CursorMove::Left),
        KeyCode::Char('l') if vim => app.horizontal(CursorMove::Right),
        KeyCode::PageUp => app.move_cursor(CursorMove::PageUp),
        KeyCode::PageDown => app.move_cursor(CursorMove::PageDown),
        KeyCode::Home => app.move_cursor(CursorMove::First),
        KeyCode::End => app.move_cursor(CursorMove::Last),
        KeyCode::Char('g') if vim => {
            app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
        }
        KeyCode::Char('G') if vim => app.move_cursor(CursorMove::Last),

        // ---- Folders ----
        KeyCode::Enter => app.open_entry_under_cursor(),
        KeyCode::Backspace => app.go_back(),
        KeyCode::Char('u') => app.go_up(),
        KeyCode::Char('0') => app.go_root(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.activate_breadcrumb(index);
        }
        KeyCode::Char('t') => {
            if !app.toggle_explorer_focus() {
                app.model.show_toast("Explorer is only shown in tree view".to_string());
            }
        }

        // ---- Pages & presentation ----
        KeyCode::Tab => app.next_page(),
        KeyCode::BackTab => app.prev_page(),
        KeyCode::Char('m') => app.cycle_view_mode(),
        KeyCode::Char('s') => app.cycle_sort_key(),
        KeyCode::Char('S') => app.toggle_sort_direction(),

        // ---- Selection ----
        KeyCode::Char(' ') => app.toggle_selection_under_cursor(),
        KeyCode::Char('v') => app.range_select_to_cursor(),
        KeyCode::Char('a') => app.select_all_visible(),
        KeyCode::Char('A') => app.deselect_all(),
        KeyCode::Char('b') => app.toggle_bulk_mode(),

        // ---- Document actions ----
        KeyCode::Char('y') => app.set_approval(ApprovalStatus::Approved),
        KeyCode::Char('r') => app.set_approval(ApprovalStatus::Rejected),
        KeyCode::Char('R') => app.set_approval(ApprovalStatus::Revision),
        KeyCode::Char('n') => app.notify_targets(),
        KeyCode::Char('U') => app.start_upload(),
        KeyCode::Char('e') => app.start_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('i') => app.show_info(),
        KeyCode::Char('H') => app.show_audit(),
        KeyCode::Char('L') => app.show_page_audit(),

        _ => {}
    }
}
