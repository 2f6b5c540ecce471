//! Audit trail modal rendering
//!
//! Scrollable list of recorded actions for one document or a whole page,
//! newest first.

use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, List, ListItem, ListState, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
    Frame,
};

use docdeck::domain::Framework;
use docdeck::model::{ActivityModel, AuditEntry, AuditPopupState};

const GRAY: Color = Color::Rgb(120, 120, 120);

fn build_audit_line(number: usize, number_width: usize, entry: &AuditEntry, with_title: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{:>width$}", number, width = number_width), Style::default().fg(GRAY)),
        Span::raw("  "),
        Span::styled(
            entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            Style::default().fg(GRAY),
        ),
        Span::raw("  "),
    ];
    if with_title {
        spans.push(Span::styled(
            format!("{}: ", entry.document_title),
            Style::default().fg(Color::White),
        ));
    }
    spans.push(Span::styled(entry.action.describe(), Style::default().fg(Color::Cyan)));
    spans.push(Span::styled(format!("  by {}", entry.actor), Style::default().fg(GRAY)));
    Line::from(spans)
}

/// Render the audit trail modal
///
/// Shows a centered modal (80% of the screen) listing entries for the
/// popup's document, or every entry of `framework` when it has none.
pub fn render_audit_trail(
    f: &mut Frame,
    area: Rect,
    activity: &ActivityModel,
    framework: Framework,
    popup: &AuditPopupState,
    document_title: Option<&str>,
) {
    let modal_width = (area.width as f32 * 0.8) as u16;
    let modal_height = (area.height as f32 * 0.8) as u16;
    let modal_area = Rect {
        x: area.x + area.width.saturating_sub(modal_width) / 2,
        y: area.y + area.height.saturating_sub(modal_height) / 2,
        width: modal_width.min(area.width),
        height: modal_height.min(area.height),
    };

    let entries = activity.audit_for(framework, popup.document_id.as_deref());
    let with_title = popup.document_id.is_none();
    let number_width = entries.len().max(1).to_string().len();

    let items: Vec<ListItem> = if entries.is_empty() {
        vec![ListItem::new(Span::styled(
            "No recorded activity yet",
            Style::default().fg(GRAY),
        ))]
    } else {
        entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| ListItem::new(build_audit_line(idx + 1, number_width, entry, with_title)))
            .collect()
    };

    let subject = match document_title {
        Some(title) => title.to_string(),
        None => framework.as_str().to_uppercase(),
    };
    let title = format!(" {} - Audit Trail ({} entries) ", subject, entries.len());

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .title_bottom(Line::from(" j/k scroll · Esc close ").right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    let offset = (popup.scroll_offset as usize).min(entries.len().saturating_sub(1));
    let mut list_state = ListState::default().with_offset(offset);

    f.render_widget(Clear, modal_area);
    f.render_stateful_widget(list, modal_area, &mut list_state);

    let viewport = modal_area.height.saturating_sub(2) as usize;
    if entries.len() > viewport {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state =
            ScrollbarState::new(entries.len().saturating_sub(viewport)).position(offset);
        f.render_stateful_widget(
            scrollbar,
            modal_area.inner(Margin {
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
    use chrono::{TimeZone, Utc};
    use docdeck::domain::ApprovalStatus;
    use docdeck::model::AuditAction;

    #[test]
    fn test_audit_line_for_page_includes_title() {
        let entry = AuditEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
            framework: Framework::Iso9001,
            document_id: "doc-1".to_string(),
            document_title: "Quality Manual".to_string(),
            action: AuditAction::StatusChanged {
                from: ApprovalStatus::Pending,
                to: ApprovalStatus::Approved,
            },
            actor: "Sarah Johnson".to_string(),
        };

        let text = |line: Line| line.spans.iter().map(|s| s.content.to_string()).collect::<String>();
        let page_line = text(build_audit_line(3, 2, &entry, true));
        assert_eq!(
            page_line,
            " 3  2024-05-01 09:30:00  Quality Manual: status pending → approved  by Sarah Johnson"
        );

        let doc_line = text(build_audit_line(3, 1, &entry, false));
        assert!(!doc_line.contains("Quality Manual"));
    }
}
