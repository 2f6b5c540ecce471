use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    bulk_available: bool,
    approval_visible: bool,
    explorer_focused: bool,
    search_mode: bool,
    has_search_query: bool,
) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // While typing a query only the search keys apply
    if search_mode {
        hotkey_spans.extend(vec![
            key("Enter"),
            Span::raw(":Keep Filter  "),
            key("Esc"),
            Span::raw(":Exit Search  "),
            key("↑/↓"),
            Span::raw(":Nav"),
        ]);
        return hotkey_spans;
    }

    if vim_mode {
        hotkey_spans.extend(vec![
            key("hjkl"),
            Span::raw(":Nav  "),
            key("gg/G"),
            Span::raw(":First/Last  "),
            key("^d/^u"),
            Span::raw(":Page  "),
        ]);
    } else {
        hotkey_spans.extend(vec![key("↑↓←→"), Span::raw(":Nav  ")]);
    }

    if explorer_focused {
        hotkey_spans.extend(vec![
            key("Enter"),
            Span::raw(":Open Folder  "),
            key("←/→"),
            Span::raw(":Collapse/Expand  "),
            key("t"),
            Span::raw(":Back to List  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("Enter"),
            Span::raw(":Open  "),
            key("⌫"),
            Span::raw(":Back  "),
            key("u"),
            Span::raw(":Up  "),
            key("1-9"),
            Span::raw(":Jump  "),
        ]);
    }

    if has_search_query {
        hotkey_spans.extend(vec![key("Esc"), Span::raw(":Clear Search  ")]);
    } else {
        let search_key = if vim_mode { "/" } else { "^F" };
        hotkey_spans.extend(vec![key(search_key), Span::raw(":Search  ")]);
    }

    hotkey_spans.extend(vec![
        key("Tab"),
        Span::raw(":Page  "),
        key("m"),
        Span::raw(":View  "),
        key("s"),
        Span::raw(":Sort  "),
        key("S"),
        Span::raw(":Reverse  "),
        key("Space"),
        Span::raw(":Select  "),
        key("v"),
        Span::raw(":Range  "),
        key("a/A"),
        Span::raw(":All/None  "),
    ]);

    if bulk_available {
        hotkey_spans.extend(vec![key("b"), Span::raw(":Bulk  ")]);
    }

    if approval_visible {
        hotkey_spans.extend(vec![
            key("y"),
            Span::raw(":Approve  "),
            key("r"),
            Span::raw(":Reject  "),
            key("R"),
            Span::raw(":Revision  "),
        ]);
    }

    hotkey_spans.extend(vec![
        key("U"),
        Span::raw(":Upload  "),
        key("e"),
        Span::raw(":Rename  "),
        key("d"),
        Span::raw(":Delete  "),
        key("n"),
        Span::raw(":Notify  "),
        key("i"),
        Span::raw(":Info  "),
        key("H"),
        Span::raw(":Audit  "),
        key("?"),
        Span::raw(":Help  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(
    vim_mode: bool,
    bulk_available: bool,
    approval_visible: bool,
    explorer_focused: bool,
    search_mode: bool,
    has_search_query: bool,
) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(
        vim_mode,
        bulk_available,
        approval_visible,
        explorer_focused,
        search_mode,
        has_search_query,
    ));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    bulk_available: bool,
    approval_visible: bool,
    explorer_focused: bool,
    search_mode: bool,
    has_search_query: bool,
) {
    let legend = build_legend_paragraph(
        vim_mode,
        bulk_available,
        approval_visible,
        explorer_focused,
        search_mode,
        has_search_query,
    );
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    vim_mode: bool,
    bulk_available: bool,
    approval_visible: bool,
    explorer_focused: bool,
    search_mode: bool,
    has_search_query: bool,
) -> u16 {
    // line_count() miscounts when a block is attached, so count without borders
    let hotkey_line = Line::from(build_hotkey_spans(
        vim_mode,
        bulk_available,
        approval_visible,
        explorer_focused,
        search_mode,
        has_search_query,
    ));
    let paragraph_for_counting = Paragraph::new(vec![hotkey_line]).wrap(Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_legend_hides_approval_keys_when_page_has_no_approvals() {
        let spans = build_hotkey_spans(
            false, // vim_mode
            true,  // bulk_available
            false, // approval_visible
            false, // explorer_focused
            false, // search_mode
            false, // has_search_query
        );

        let text = spans_to_text(&spans);
        assert!(!text.contains("Approve"), "got: {}", text);
        assert!(text.contains("b:Bulk"), "got: {}", text);
    }

    #[test]
    fn test_legend_hides_bulk_key_when_disabled() {
        let spans = build_hotkey_spans(false, false, true, false, false, false);
        let text = spans_to_text(&spans);
        assert!(!text.contains("Bulk"), "got: {}", text);
        assert!(text.contains("y:Approve"), "got: {}", text);
    }

    #[test]
    fn test_legend_search_key_depends_on_vim_mode() {
        let vim = spans_to_text(&build_hotkey_spans(true, true, true, false, false, false));
        let plain = spans_to_text(&build_hotkey_spans(false, true, true, false, false, false));
        assert!(vim.contains("/:Search"));
        assert!(plain.contains("^F:Search"));
        assert!(vim.contains("gg/G"));
    }

    #[test]
    fn test_legend_while_typing_shows_only_search_keys() {
        let text = spans_to_text(&build_hotkey_spans(false, true, true, false, true, false));
        assert!(text.contains("Exit Search"));
        assert!(!text.contains("Quit"));
    }

    #[test]
    fn test_legend_accepted_query_offers_clear() {
        let text = spans_to_text(&build_hotkey_spans(false, true, true, false, false, true));
        assert!(text.contains("Esc:Clear Search"));
        assert!(!text.contains("^F:Search"));
    }

    #[test]
    fn test_legend_explorer_focus_changes_enter_label() {
        let text = spans_to_text(&build_hotkey_spans(false, true, true, true, false, false));
        assert!(text.contains("Open Folder"));
        assert!(text.contains("Back to List"));
    }

    #[test]
    fn test_legend_height_grows_on_narrow_terminals() {
        let wide = calculate_legend_height(400, false, true, true, false, false, false);
        let narrow = calculate_legend_height(40, false, true, true, false, false, false);
        assert!(narrow > wide);
        assert!(wide >= 3);
    }
}
