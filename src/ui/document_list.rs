//! Entries as rows: folders first, then documents in sort order

use chrono::NaiveDate;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
    Frame,
};

use docdeck::domain::Document;
use docdeck::logic::{self, formatting::fit_to_width};
use docdeck::model::{Entry, FolderNode, PageModel};

use super::icons::{security_color, IconTheme};

const CHECKBOX_WIDTH: usize = 4;
const ICON_WIDTH: usize = 3;
const TYPE_WIDTH: usize = 6;
const STATUS_WIDTH: usize = 12;
const SECURITY_WIDTH: usize = 13;
const OWNER_WIDTH: usize = 16;
const DATE_WIDTH: usize = 10;
const HIGHLIGHT_WIDTH: usize = 2;

/// Width left for the title column once the fixed columns are placed
fn title_width(panel_width: u16, show_checkbox: bool, show_status: bool) -> usize {
    let mut fixed = HIGHLIGHT_WIDTH + ICON_WIDTH + TYPE_WIDTH + SECURITY_WIDTH + OWNER_WIDTH + DATE_WIDTH + 5;
    if show_checkbox {
        fixed += CHECKBOX_WIDTH;
    }
    if show_status {
        fixed += STATUS_WIDTH + 1;
    }
    (panel_width as usize).saturating_sub(2 + fixed).max(8)
}

fn build_folder_line(
    node: &FolderNode,
    doc_count: usize,
    theme: &IconTheme,
    show_checkbox: bool,
    title_width: usize,
) -> Line<'static> {
    let mut spans = vec![];
    if show_checkbox {
        spans.push(Span::raw(" ".repeat(CHECKBOX_WIDTH)));
    }
    spans.push(theme.folder_icon());
    spans.push(Span::styled(
        fit_to_width(&node.name, title_width),
        Style::default()
            .fg(theme.folder_color)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        format!(" {} document(s)", doc_count),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

fn build_document_line(
    doc: &Document,
    theme: &IconTheme,
    checked: bool,
    show_checkbox: bool,
    show_status: bool,
    title_width: usize,
    today: NaiveDate,
) -> Line<'static> {
    let mut spans = vec![];
    if show_checkbox {
        spans.push(theme.checkbox(checked));
    }
    spans.push(theme.file_icon(&doc.file_type));
    spans.push(Span::raw(fit_to_width(&doc.title, title_width)));
    spans.push(Span::styled(
        format!(" {}", fit_to_width(&doc.file_type.to_uppercase(), TYPE_WIDTH)),
        Style::default().fg(Color::DarkGray),
    ));

    if show_status {
        let badge = theme.status_badge(doc.approval_status);
        spans.push(Span::styled(
            format!(" {}", fit_to_width(&badge.content, STATUS_WIDTH)),
            badge.style,
        ));
    }

    let security = doc.security_level.map(|s| s.as_str()).unwrap_or("-");
    spans.push(Span::styled(
        format!(" {}", fit_to_width(security, SECURITY_WIDTH)),
        Style::default().fg(security_color(doc.security_level)),
    ));
    spans.push(Span::raw(format!(
        " {}",
        fit_to_width(&doc.uploaded_by, OWNER_WIDTH)
    )));
    spans.push(Span::styled(
        format!(
            " {}",
            fit_to_width(&logic::formatting::format_date(&doc.uploaded_at), DATE_WIDTH)
        ),
        Style::default().fg(Color::Gray),
    ));

    if logic::document::is_expired(doc, today) {
        spans.push(theme.expired_badge());
    }

    Line::from(spans)
}

/// Build one list line per entry
pub fn build_entry_lines(
    page: &PageModel,
    entries: &[Entry],
    show_checkbox: bool,
    panel_width: u16,
    today: NaiveDate,
) -> Vec<Line<'static>> {
    let theme = IconTheme::default();
    let show_status = page.config.approval_visible;
    let width = title_width(panel_width, show_checkbox, show_status);

    entries
        .iter()
        .filter_map(|entry| match entry {
            Entry::Folder(id) => page.tree.get(id).map(|node| {
                build_folder_line(
                    node,
                    page.folder_document_count(id),
                    &theme,
                    show_checkbox,
                    width,
                )
            }),
            Entry::Document(id) => page.document(id).map(|doc| {
                build_document_line(
                    doc,
                    &theme,
                    page.selection.is_selected(id),
                    show_checkbox,
                    show_status,
                    width,
                    today,
                )
            }),
        })
        .collect()
}

/// Render the entries of the current folder as a scrolling list
///
/// # Arguments
/// - `offset`: First row to draw (kept by the caller between frames)
/// - `focused`: Whether the list (rather than the explorer) has focus
pub fn render_document_list(
    f: &mut Frame,
    area: Rect,
    page: &PageModel,
    show_checkbox: bool,
    focused: bool,
    offset: usize,
    today: NaiveDate,
) {
    let entries = page.entries();
    let title = format!(" {} ({}) ", page.config.title, entries.len());
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if entries.is_empty() {
        let message = if page.search_query.is_empty() {
            "This folder is empty"
        } else {
            "No documents match the search"
        };
        let empty = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = build_entry_lines(page, &entries, show_checkbox, area.width, today)
        .into_iter()
        .map(ListItem::new)
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default()
        .with_offset(offset)
        .with_selected(page.cursor);
    f.render_stateful_widget(list, area, &mut state);

    // Render scrollbar if list is longer than visible area
    let viewport_height = area.height.saturating_sub(2) as usize;
    if entries.len() > viewport_height {
        let mut scrollbar_state =
            ScrollbarState::new(entries.len().saturating_sub(viewport_height)).position(state.offset());
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");
        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                horizontal: 0,
                vertical: 1,
            }),
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdeck::domain::{AccessType, ApprovalStatus, Framework, SecurityLevel};
    use docdeck::model::PageConfig;

    fn doc(id: &str, title: &str) -> Document {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            doc_type: "Policy".to_string(),
            file_type: "pdf".to_string(),
            file_size: "1 MB".to_string(),
            department: String::new(),
            uploaded_by: "Alex Kim".to_string(),
            uploaded_at: "2024-01-15".to_string(),
            last_modified: "2024-01-15".to_string(),
            access_type: AccessType::Public,
            approval_status: ApprovalStatus::Approved,
            security_level: Some(SecurityLevel::Confidential),
            tags: Vec::new(),
            approver: None,
            assigned_to: None,
            assigned_date: None,
            expiry_date: Some("2024-06-30".to_string()),
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_document_line_shows_columns() {
        let theme = IconTheme::default();
        let line = build_document_line(&doc("a", "Quality Manual"), &theme, false, false, true, 20, today());
        let text = line_text(&line);
        assert!(text.contains("Quality Manual"));
        assert!(text.contains("PDF"));
        assert!(text.contains("approved"));
        assert!(text.contains("Confidential"));
        assert!(text.contains("2024-01-15"));
        assert!(text.contains("EXPIRED"));
        assert!(!text.contains("[ ]"));
    }

    #[test]
    fn test_status_column_hidden_without_approvals() {
        let theme = IconTheme::default();
        let line = build_document_line(&doc("a", "Manual"), &theme, true, true, false, 20, today());
        let text = line_text(&line);
        assert!(!text.contains("approved"));
        assert!(text.starts_with("[x] "));
    }

    #[test]
    fn test_entry_lines_skip_unknown_ids() {
        let page = PageModel::new(
            PageConfig::for_framework(Framework::Iso9001),
            &[],
            vec![doc("a", "Manual")],
        );
        let entries = vec![Entry::Document("a".to_string()), Entry::Document("ghost".to_string())];
        let lines = build_entry_lines(&page, &entries, false, 120, today());
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_title_width_has_a_floor() {
        assert_eq!(title_width(10, true, true), 8);
        assert!(title_width(200, false, false) > title_width(200, true, true));
    }
}
