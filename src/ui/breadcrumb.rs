//! Framework tabs and the breadcrumb bar

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use docdeck::logic::breadcrumb::BreadcrumbSegment;
use docdeck::model::PageModel;

/// Render one tab per framework page, highlighting the active one
pub fn render_tabs(f: &mut Frame, area: Rect, pages: &[PageModel], active: usize) {
    let titles: Vec<Line> = pages
        .iter()
        .map(|p| Line::from(format!(" {} ", p.config.framework.as_str().to_uppercase())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .divider("│");

    f.render_widget(tabs, area);
}

/// Build the breadcrumb spans (extracted for testability)
///
/// Segments are numbered from 1 so the number matches the key that jumps
/// to them. Segments with no folder behind them are dimmed.
fn build_breadcrumb_spans(root_title: &str, segments: &[BreadcrumbSegment]) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        format!("⌂ {}", root_title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    let last = segments.len().saturating_sub(1);
    for (idx, segment) in segments.iter().enumerate() {
        spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("{} ", idx + 1),
            Style::default().fg(Color::Yellow),
        ));

        let style = if !segment.is_navigable() {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        } else if idx == last {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(segment.name.clone(), style));
    }

    spans
}

/// Render the breadcrumb bar for the page's current folder
pub fn render_breadcrumb_bar(f: &mut Frame, area: Rect, page: &PageModel) {
    let segments = page.breadcrumb();
    let line = Line::from(build_breadcrumb_spans(&page.config.title, &segments));

    let back_hint = if page.navigation.can_go_back() {
        " ⌫ back "
    } else {
        ""
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Location ")
        .title_bottom(Line::from(back_hint).right_aligned())
        .border_style(Style::default().fg(Color::Blue));

    f.render_widget(Paragraph::new(line).block(block), area);
}
