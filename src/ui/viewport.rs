//! Scrollable view of the rendered YAML text.

use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

use crate::app::AppState;
use crate::theme::colors::ThemeColors;

/// Renders the visible window of the highlighted file, starting at the
/// state's scroll offset.
pub fn render_viewport(f: &mut Frame, area: Rect, state: &AppState, colors: &ThemeColors) {
    let offset = u16::try_from(state.scroll_offset()).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(state.rendered().text.clone())
        .style(Style::default().bg(colors.background).fg(colors.foreground))
        .scroll((offset, 0));

    f.render_widget(paragraph, area);
}
