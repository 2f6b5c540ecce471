//! Search Input UI
//!
//! Renders the search input box with query, match count, and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title of the search box for the current search state
fn search_title(active: bool, has_query: bool, match_count: usize, vim_mode: bool) -> String {
    if active {
        format!(" Search ({} matches) - Enter to keep, Esc to cancel ", match_count)
    } else if has_query {
        format!(" Search ({} matches) - Esc to clear ", match_count)
    } else {
        let search_key = if vim_mode { "/" } else { "Ctrl-F" };
        format!(" Search ({}) ", search_key)
    }
}

/// Render search input box above legend
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `query`: Current search query
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Documents left in the current folder after filtering
/// - `vim_mode`: Whether vim keybindings are enabled
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: usize,
    vim_mode: bool,
) {
    let title = search_title(active, !query.is_empty(), match_count, vim_mode);
    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw("Match: "),
            Span::raw(query),
            Span::styled("█", cursor_style),
        ])
    } else {
        Line::from(vec![Span::styled(
            format!("Match: {}", query),
            Style::default().fg(Color::Gray),
        )])
    };

    f.render_widget(Paragraph::new(vec![input_line]).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_title_states() {
        assert!(search_title(true, false, 3, false).contains("3 matches"));
        assert!(search_title(false, true, 1, false).contains("Esc to clear"));
        assert_eq!(search_title(false, false, 0, true), " Search (/) ");
    }
}
