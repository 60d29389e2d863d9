//! The query line: prompt, typed path with cursor, completion hint and match
//! counter.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::AppState;
use crate::theme::colors::ThemeColors;

const PROMPT: &str = "> ";

/// Renders the query line.
///
/// The typed text is green after a navigation that matched and red
/// otherwise. With the cursor at the end of the input, the rest of the
/// current completion is shown dimmed after it.
pub fn render_query_line(f: &mut Frame, area: Rect, state: &AppState, colors: &ThemeColors) {
    let line = Line::from(query_spans(state, colors));
    let paragraph = Paragraph::new(line).style(Style::default().bg(colors.background));
    f.render_widget(paragraph, area);
}

fn query_spans(state: &AppState, colors: &ThemeColors) -> Vec<Span<'static>> {
    let input = state.input();
    let cursor_pos = state.cursor_position();
    let text_color = if state.has_matches() {
        colors.match_ok
    } else {
        colors.match_fail
    };
    let text_style = Style::default()
        .fg(text_color)
        .bg(colors.background)
        .add_modifier(Modifier::BOLD);

    let chars: Vec<char> = input.chars().collect();
    let before: String = chars.iter().take(cursor_pos).collect();
    let after: String = chars.iter().skip(cursor_pos + 1).collect();

    let mut spans = vec![
        Span::styled(PROMPT, Style::default().fg(colors.foreground)),
        Span::styled(before, text_style),
    ];

    let ghost = match (cursor_pos >= chars.len(), state.current_completion()) {
        (true, Some(completion)) => completion[input.len()..].to_string(),
        _ => String::new(),
    };

    // Block cursor over the character under it, or over the first ghost
    // character at the end of the input.
    let mut ghost_chars = ghost.chars();
    let (cursor_char, cursor_style) = match chars.get(cursor_pos) {
        Some(c) => (*c, text_style),
        None => match ghost_chars.next() {
            Some(c) => (c, Style::default().fg(colors.suggestion)),
            None => (' ', Style::default().fg(colors.foreground)),
        },
    };
    spans.push(Span::styled(
        cursor_char.to_string(),
        cursor_style.add_modifier(Modifier::REVERSED),
    ));

    if !after.is_empty() {
        spans.push(Span::styled(after, text_style));
    }
    let rest: String = ghost_chars.collect();
    if !rest.is_empty() {
        spans.push(Span::styled(rest, Style::default().fg(colors.suggestion)));
    }

    if let Some((current, total)) = state.match_counter() {
        spans.push(Span::styled(
            format!("  {current}/{total}"),
            Style::default().fg(colors.match_ok),
        ));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::tree::YamlFile;
    use crate::theme::Theme;

    fn text(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_ghost_completion_after_cursor() {
        let theme = Theme::default();
        let mut state = AppState::new(YamlFile::parse("alpha: 1\n").unwrap(), &theme);
        state.set_input("al");
        let spans = query_spans(&state, &theme.colors);
        assert_eq!(text(&spans), "> alpha");
        assert_eq!(spans.last().unwrap().style.fg, Some(theme.colors.suggestion));
    }

    #[test]
    fn test_counter_and_match_color() {
        let theme = Theme::default();
        let mut state = AppState::new(YamlFile::parse("a: 1\n---\na: 2\n").unwrap(), &theme);
        state.set_input("a");
        state.navigate();
        let spans = query_spans(&state, &theme.colors);
        assert_eq!(text(&spans), "> a   1/2");
        assert_eq!(spans[1].style.fg, Some(theme.colors.match_ok));
    }

    #[test]
    fn test_cursor_inside_input() {
        let theme = Theme::default();
        let mut state = AppState::new(YamlFile::parse("a: 1\n").unwrap(), &theme);
        state.set_input("xyz");
        state.move_cursor_left();
        let spans = query_spans(&state, &theme.colors);
        assert_eq!(text(&spans), "> xyz");
        assert_eq!(spans[2].content, "z");
        assert!(spans[2].style.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(spans[1].style.fg, Some(theme.colors.match_fail));
    }
}
