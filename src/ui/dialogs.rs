use std::path::Path;

use chrono::NaiveDate;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use docdeck::domain::Document;
use docdeck::logic::{self, breadcrumb::resolve_path};
use docdeck::model::{ConfirmDeleteState, PageModel, TextInputState};

use super::layout::centered_rect;

/// Render the delete confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, state: &ConfirmDeleteState) {
    let prompt_text = format!(
        "Delete {}?\n\n\
        {} document(s) will be removed from this page.\n\n\
        WARNING: This action cannot be undone!\n\n\
        Continue? (y/n)",
        state.description,
        state.document_ids.len()
    );

    let prompt_area = centered_rect(f.area(), 54, 11);
    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the one-line text input used for upload and rename
pub fn render_text_input(f: &mut Frame, state: &TextInputState) {
    let area = centered_rect(f.area(), 60, 5);
    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let lines = vec![
        Line::from(vec![
            Span::raw("> "),
            Span::raw(state.buffer.as_str()),
            Span::styled("█", cursor_style),
        ]),
        Line::from(Span::styled(
            "Enter to confirm · Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let input = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", state.title()))
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(input, area);
}

fn field(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(Color::Yellow)),
        Span::raw(value.into()),
    ])
}

/// Lines of the document info popup (extracted for testability)
fn build_info_lines(doc: &Document, page: &PageModel, today: NaiveDate) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("Title", doc.title.clone()),
        field("Type", format!("{} ({})", doc.doc_type, doc.file_type)),
        field("Size", doc.file_size.clone()),
        field("Uploaded by", doc.uploaded_by.clone()),
        field("Uploaded", logic::formatting::format_date(&doc.uploaded_at)),
        field("Modified", logic::formatting::format_date(&doc.last_modified)),
        field("Access", doc.access_type.as_str().to_string()),
        field(
            "Security",
            doc.security_level.map(|s| s.as_str()).unwrap_or("-").to_string(),
        ),
    ];

    if page.config.approval_visible {
        lines.push(field("Status", doc.approval_status.as_str().to_string()));
        if let Some(approver) = &doc.approver {
            let state = if approver.approved { "approved" } else { "not yet approved" };
            lines.push(field(
                "Approver",
                format!("{}, {} ({})", approver.name, approver.title, state),
            ));
        }
    }
    if let Some(assignee) = &doc.assigned_to {
        let since = doc
            .assigned_date
            .as_deref()
            .map(|d| format!(" since {}", logic::formatting::format_date(d)))
            .unwrap_or_default();
        lines.push(field("Assigned to", format!("{}{}", assignee, since)));
    }
    if let Some(expiry) = &doc.expiry_date {
        let mut value = logic::formatting::format_date(expiry);
        if logic::document::is_expired(doc, today) {
            value.push_str(" (expired)");
        }
        lines.push(field("Expires", value));
    }
    if !doc.tags.is_empty() {
        lines.push(field("Tags", doc.tags.join(", ")));
    }

    // Location, with folders the tree does not know dimmed
    let mut location = vec![Span::styled(
        format!("{:<14}", "Location"),
        Style::default().fg(Color::Yellow),
    )];
    let department = doc.department.trim_matches('/');
    let segments = if department.is_empty() {
        location.push(Span::raw("/"));
        Vec::new()
    } else {
        resolve_path(department, &page.tree)
    };
    for (idx, segment) in segments.iter().enumerate() {
        if idx > 0 {
            location.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        }
        let style = if segment.is_navigable() {
            Style::default().fg(Color::White)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        };
        location.push(Span::styled(segment.name.clone(), style));
    }
    lines.push(Line::from(location));

    lines
}

/// Render the document info popup
pub fn render_document_info(f: &mut Frame, doc: &Document, page: &PageModel, today: NaiveDate) {
    let lines = build_info_lines(doc, page, today);
    let height = lines.len() as u16 + 4;
    let area = centered_rect(f.area(), 70, height);

    let mut body = lines;
    body.push(Line::raw(""));
    body.push(Line::from(Span::styled(
        "H audit trail · Esc close",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(body)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Document Info ")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

const HELP_KEYS: &[(&str, &str)] = &[
    ("↑↓←→ / hjkl", "Move (hjkl, gg, G, ^d, ^u with --vim)"),
    ("Enter", "Open folder / document info"),
    ("Backspace", "Back to the previous folder"),
    ("u / 0", "Parent folder / page root"),
    ("1-9", "Jump to breadcrumb segment"),
    ("Tab / Shift-Tab", "Next / previous framework page"),
    ("m", "Cycle view mode (list, grid, tree)"),
    ("t", "Focus the folder explorer (tree view)"),
    ("s / S", "Cycle sort key / reverse direction"),
    ("/ or ^F", "Search the current folder"),
    ("Space / v", "Select document / extend range"),
    ("a / A / b", "Select all / none / toggle bulk mode"),
    ("y / r / R", "Approve / reject / request revision"),
    ("n", "Notify owners of the targeted documents"),
    ("U / e / d", "Upload / rename / delete"),
    ("i / H / L", "Info / document audit / page audit"),
    ("q", "Quit"),
];

/// Render the help overlay
pub fn render_help(f: &mut Frame, config_path: Option<&Path>, notifications: usize) {
    let mut lines: Vec<Line> = HELP_KEYS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{:<18}", keys), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        })
        .collect();

    lines.push(Line::raw(""));
    let config = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults, no config file)".to_string());
    lines.push(Line::from(Span::styled(
        format!("Config: {}", config),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        format!("Notifications sent this session: {}", notifications),
        Style::default().fg(Color::DarkGray),
    )));

    let area = centered_rect(f.area(), 70, lines.len() as u16 + 2);
    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help (any key to close) ")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
