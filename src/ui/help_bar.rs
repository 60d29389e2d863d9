//! One-line key help at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::colors::ThemeColors;

const BINDINGS: &[(&str, &str)] = &[
    ("ctrl+c", "quit"),
    ("enter", "navigate"),
    ("tab", "complete"),
    ("ctrl+n/p", "next/prev"),
    ("ctrl+l", "line numbers"),
    ("↑/↓", "scroll"),
];

/// Renders the help bar.
pub fn render_help_bar(f: &mut Frame, area: Rect, colors: &ThemeColors) {
    let mut spans = Vec::new();
    for (i, (key, action)) in BINDINGS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("    "));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors.foreground)));
        spans.push(Span::styled(format!(" {action}"), Style::default().fg(colors.help)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.background));
    f.render_widget(paragraph, area);
}
