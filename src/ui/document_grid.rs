//! Entries as cards, laid out in rows of `grid_columns` cards

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use docdeck::domain::Document;
use docdeck::logic::{self, layout::CARD_HEIGHT};
use docdeck::model::{Entry, FolderNode, PageModel};

use super::icons::{section_color, security_color, IconTheme};

/// Body lines of a document card (the title goes in the border)
fn document_card_lines(doc: &Document, theme: &IconTheme, show_status: bool, today: NaiveDate) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        theme.file_icon(&doc.file_type),
        Span::styled(
            format!("{} · {}", doc.file_type.to_uppercase(), doc.file_size),
            Style::default().fg(Color::Gray),
        ),
    ])];

    let mut status_line = vec![];
    if show_status {
        status_line.push(theme.status_badge(doc.approval_status));
        status_line.push(Span::raw("  "));
    }
    if let Some(level) = doc.security_level {
        status_line.push(Span::styled(
            level.as_str().to_string(),
            Style::default().fg(security_color(Some(level))),
        ));
    }
    lines.push(Line::from(status_line));

    lines.push(Line::from(Span::styled(
        format!(
            "{} · {}",
            doc.uploaded_by,
            logic::formatting::format_date(&doc.uploaded_at)
        ),
        Style::default().fg(Color::DarkGray),
    )));

    if logic::document::is_expired(doc, today) {
        lines.push(Line::from(theme.expired_badge()));
    }
    lines
}

fn folder_card_lines(node: &FolderNode, doc_count: usize, theme: &IconTheme) -> Vec<Line<'static>> {
    let subfolders = if node.has_children() { "has subfolders" } else { "" };
    vec![
        Line::from(vec![
            theme.folder_icon(),
            Span::styled("Folder", Style::default().fg(section_color(&node.color))),
        ]),
        Line::from(format!("{} document(s)", doc_count)),
        Line::from(Span::styled(subfolders, Style::default().fg(Color::DarkGray))),
    ]
}

/// Number of card rows that fit in `area` (inside the outer border)
pub fn visible_card_rows(area: Rect) -> usize {
    (area.height.saturating_sub(2) / CARD_HEIGHT).max(1) as usize
}

/// Render the current folder's entries as a grid of cards
///
/// # Arguments
/// - `columns`: Cards per row
/// - `row_offset`: First card row to draw
pub fn render_document_grid(
    f: &mut Frame,
    area: Rect,
    page: &PageModel,
    show_checkbox: bool,
    columns: usize,
    row_offset: usize,
    today: NaiveDate,
) {
    let entries = page.entries();
    let outer = Block::default()
        .title(format!(" {} ({}) ", page.config.title, entries.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    if entries.is_empty() {
        let message = if page.search_query.is_empty() {
            "This folder is empty"
        } else {
            "No documents match the search"
        };
        f.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray))),
            inner,
        );
        return;
    }

    let theme = IconTheme::default();
    let columns = columns.max(1);
    let rows = visible_card_rows(area);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); rows])
        .split(inner);

    for (row_idx, row_area) in row_areas.iter().enumerate() {
        let first = (row_offset + row_idx) * columns;
        if first >= entries.len() {
            break;
        }

        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = first + col;
            let Some(entry) = entries.get(index) else {
                break;
            };
            let is_cursor = page.cursor == Some(index);
            render_card(f, *cell, page, entry, is_cursor, show_checkbox, &theme, today);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_card(
    f: &mut Frame,
    area: Rect,
    page: &PageModel,
    entry: &Entry,
    is_cursor: bool,
    show_checkbox: bool,
    theme: &IconTheme,
    today: NaiveDate,
) {
    let (title, lines, checked) = match entry {
        Entry::Folder(id) => {
            let Some(node) = page.tree.get(id) else {
                return;
            };
            let count = page.folder_document_count(id);
            (node.name.clone(), folder_card_lines(node, count, theme), false)
        }
        Entry::Document(id) => {
            let Some(doc) = page.document(id) else {
                return;
            };
            let lines = document_card_lines(doc, theme, page.config.approval_visible, today);
            (doc.title.clone(), lines, page.selection.is_selected(id))
        }
    };

    let mut title_spans = vec![];
    if show_checkbox && !entry.is_folder() {
        title_spans.push(theme.checkbox(checked));
    }
    title_spans.push(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let border_style = if is_cursor {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if checked {
        Style::default().fg(theme.selected_color)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title_spans))
        .border_style(border_style);
    if is_cursor {
        block = block.style(Style::default().bg(Color::Black));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
