//! Folder explorer panel (tree view)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use docdeck::logic::breadcrumb::breadcrumb_from_tree;
use docdeck::model::{FolderNode, PageModel};

use super::icons::section_color;

fn build_explorer_line(
    depth: usize,
    node: &FolderNode,
    expanded: bool,
    is_current: bool,
    doc_count: usize,
) -> Line<'static> {
    let marker = if !node.has_children() {
        "  "
    } else if expanded {
        "▾ "
    } else {
        "▸ "
    };

    let mut name_style = Style::default().fg(section_color(&node.color));
    if is_current {
        name_style = name_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }

    Line::from(vec![
        Span::raw("  ".repeat(depth)),
        Span::styled(marker, Style::default().fg(Color::DarkGray)),
        Span::styled(node.name.clone(), name_style),
        Span::styled(format!(" {}", doc_count), Style::default().fg(Color::DarkGray)),
    ])
}

/// Title: the path of the highlighted folder, straight from the tree
fn explorer_title(page: &PageModel, highlighted: Option<&str>) -> String {
    let path = highlighted
        .map(|id| {
            breadcrumb_from_tree(&page.tree, id)
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default();
    if path.is_empty() {
        " Folders ".to_string()
    } else {
        format!(" Folders: {} ", path)
    }
}

pub fn render_tree_explorer(f: &mut Frame, area: Rect, page: &PageModel, focused: bool) {
    let rows = page.explorer_rows();
    let current = page.navigation.current.as_deref();

    let items: Vec<ListItem> = rows
        .iter()
        .map(|(depth, node)| {
            ListItem::new(build_explorer_line(
                *depth,
                node,
                page.explorer.expanded.contains(&node.id),
                current == Some(node.id.as_str()),
                page.folder_document_count(&node.id),
            ))
        })
        .collect();

    let highlighted = if focused {
        rows.get(page.explorer.cursor).map(|(_, n)| n.id.as_str())
    } else {
        current
    };

    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let list = List::new(items)
        .block(
            Block::default()
                .title(explorer_title(page, highlighted))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused && !rows.is_empty() {
        state.select(Some(page.explorer.cursor.min(rows.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}
