use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use docdeck::model::{PageModel, UserProfile};

/// Collect the "Label: value" parts shown in the status bar
fn build_status_parts(page: &PageModel, bulk_mode: bool, user: &UserProfile) -> Vec<String> {
    let mut parts = Vec::new();

    parts.push(format!("Page: {}", page.config.framework.as_str()));
    parts.push(format!("Folder: /{}", page.current_path().unwrap_or_default()));

    let entries = page.entries();
    let folders = entries.iter().filter(|e| e.is_folder()).count();
    parts.push(format!(
        "Items: {} folders, {} docs",
        folders,
        entries.len() - folders
    ));

    if bulk_mode || !page.selection.is_empty() {
        parts.push(format!("Selected: {}", page.selection.len()));
    }

    parts.push(format!("Sort: {}", page.sort.label()));
    parts.push(format!("View: {}", page.view_mode.as_str()));

    if !page.search_query.is_empty() {
        parts.push(format!("Filter: {}", page.search_query));
    }

    parts.push(format!("User: {}", user.name));
    parts
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    page: Option<&PageModel>,
    bulk_mode: bool,
    user: &UserProfile,
) {
    let parts = match page {
        Some(page) => build_status_parts(page, bulk_mode, user),
        None => vec!["No documents loaded".to_string()],
    };

    // Color the labels (before colons)
    let mut spans = vec![];
    for (idx, part) in parts.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        if let Some(colon_pos) = part.find(':') {
            let (label, value) = part.split_at(colon_pos + 1);
            spans.push(Span::styled(label.to_string(), Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(value.to_string()));
        } else {
            spans.push(Span::raw(part.clone()));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
