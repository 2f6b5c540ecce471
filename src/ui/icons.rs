use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use docdeck::domain::{ApprovalStatus, SecurityLevel};

/// Colors used across the document views (terminal palette, so the user's
/// theme still applies)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub folder_color: Color,
    pub file_color: Color,
    pub approved_color: Color,
    pub pending_color: Color,
    pub rejected_color: Color,
    pub revision_color: Color,
    pub expired_color: Color,
    pub selected_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            folder_color: Color::Blue,
            file_color: Color::Cyan,
            approved_color: Color::Green,
            pending_color: Color::Yellow,
            rejected_color: Color::Red,
            revision_color: Color::Magenta,
            expired_color: Color::Red,
            selected_color: Color::LightGreen,
        }
    }
}

impl IconTheme {
    pub fn status_color(&self, status: ApprovalStatus) -> Color {
        match status {
            ApprovalStatus::Approved => self.approved_color,
            ApprovalStatus::Pending => self.pending_color,
            ApprovalStatus::Rejected => self.rejected_color,
            ApprovalStatus::Revision => self.revision_color,
        }
    }

    /// Folder glyph
    pub fn folder_icon(&self) -> Span<'static> {
        Span::styled("📁 ", Style::default().fg(self.folder_color))
    }

    /// Glyph for a document by its file type
    pub fn file_icon(&self, file_type: &str) -> Span<'static> {
        let glyph = match file_type.to_lowercase().as_str() {
            "pdf" => "📕 ",
            "doc" | "docx" | "odt" | "txt" | "md" => "📝 ",
            "xls" | "xlsx" | "csv" | "ods" => "📊 ",
            "ppt" | "pptx" => "📽 ",
            "dwg" | "dxf" | "step" | "stp" => "📐 ",
            "png" | "jpg" | "jpeg" | "gif" | "svg" => "🖼 ",
            "zip" | "gz" | "7z" => "🗜 ",
            _ => "📄 ",
        };
        Span::styled(glyph, Style::default().fg(self.file_color))
    }

    /// Checkbox shown in bulk mode
    pub fn checkbox(&self, checked: bool) -> Span<'static> {
        if checked {
            Span::styled(
                "[x] ",
                Style::default()
                    .fg(self.selected_color)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("[ ] ", Style::default().fg(Color::DarkGray))
        }
    }

    /// Colored approval badge, e.g. "● approved"
    pub fn status_badge(&self, status: ApprovalStatus) -> Span<'static> {
        Span::styled(
            format!("● {}", status.as_str()),
            Style::default().fg(self.status_color(status)),
        )
    }

    pub fn expired_badge(&self) -> Span<'static> {
        Span::styled(
            " EXPIRED",
            Style::default()
                .fg(self.expired_color)
                .add_modifier(Modifier::BOLD),
        )
    }
}

pub fn security_color(level: Option<SecurityLevel>) -> Color {
    match level {
        Some(SecurityLevel::TopSecret) => Color::Red,
        Some(SecurityLevel::HighlyConfidential) | Some(SecurityLevel::Confidential) => {
            Color::LightRed
        }
        Some(SecurityLevel::Restricted) => Color::Yellow,
        Some(SecurityLevel::Public) | None => Color::Gray,
    }
}

/// Map a seed-data color name to a terminal color
pub fn section_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" | "amber" | "orange" => Color::Yellow,
        "purple" | "magenta" | "pink" => Color::Magenta,
        "cyan" | "teal" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        _ => Color::Blue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_icon_is_case_insensitive() {
        let theme = IconTheme::default();
        assert_eq!(theme.file_icon("PDF").content, theme.file_icon("pdf").content);
        assert_eq!(theme.file_icon("unknown").content, "📄 ");
    }

    #[test]
    fn test_section_color_fallback() {
        assert_eq!(section_color("amber"), Color::Yellow);
        assert_eq!(section_color("chartreuse"), Color::Blue);
    }

    #[test]
    fn test_status_badge_text() {
        let theme = IconTheme::default();
        assert_eq!(theme.status_badge(ApprovalStatus::Revision).content, "● revision");
    }
}
