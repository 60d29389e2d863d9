//! Terminal escape encoding of styled text, for non-interactive output.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Text;
use termion::color;
use termion::style;

/// Encodes `text` with termion escape codes, one output line per line.
///
/// Every styled span is closed with a reset so styles never leak into the
/// next span or line.
pub fn encode(text: &Text<'_>) -> String {
    let mut out = String::new();
    for (i, line) in text.lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for span in &line.spans {
            let codes = style_codes(span.style);
            if codes.is_empty() {
                out.push_str(&span.content);
            } else {
                out.push_str(&codes);
                out.push_str(&span.content);
                out.push_str(&style::Reset.to_string());
            }
        }
    }
    out
}

fn style_codes(style: Style) -> String {
    let mut codes = String::new();
    if let Some(fg) = style.fg {
        codes.push_str(&fg_code(fg));
    }
    if let Some(bg) = style.bg {
        codes.push_str(&bg_code(bg));
    }
    if style.add_modifier.contains(Modifier::BOLD) {
        codes.push_str(&style::Bold.to_string());
    }
    if style.add_modifier.contains(Modifier::ITALIC) {
        codes.push_str(&style::Italic.to_string());
    }
    if style.add_modifier.contains(Modifier::UNDERLINED) {
        codes.push_str(&style::Underline.to_string());
    }
    codes
}

fn fg_code(c: Color) -> String {
    match c {
        Color::Reset => color::Fg(color::Reset).to_string(),
        Color::Rgb(r, g, b) => color::Fg(color::Rgb(r, g, b)).to_string(),
        other => color::Fg(color::AnsiValue(ansi_index(other))).to_string(),
    }
}

fn bg_code(c: Color) -> String {
    match c {
        Color::Reset => color::Bg(color::Reset).to_string(),
        Color::Rgb(r, g, b) => color::Bg(color::Rgb(r, g, b)).to_string(),
        other => color::Bg(color::AnsiValue(ansi_index(other))).to_string(),
    }
}

fn ansi_index(c: Color) -> u8 {
    match c {
        Color::Black => 0,
        Color::Red => 1,
        Color::Green => 2,
        Color::Yellow => 3,
        Color::Blue => 4,
        Color::Magenta => 5,
        Color::Cyan => 6,
        Color::Gray => 7,
        Color::DarkGray => 8,
        Color::LightRed => 9,
        Color::LightGreen => 10,
        Color::LightYellow => 11,
        Color::LightBlue => 12,
        Color::LightMagenta => 13,
        Color::LightCyan => 14,
        Color::White => 15,
        Color::Indexed(n) => n,
        Color::Reset | Color::Rgb(..) => 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::{Line, Span};

    #[test]
    fn test_unstyled_text_passes_through() {
        let text = Text::from(vec![Line::from("a: 1"), Line::from("b: 2")]);
        assert_eq!(encode(&text), "a: 1\nb: 2");
    }

    #[test]
    fn test_styled_span_is_reset() {
        let text = Text::from(Line::from(vec![
            Span::styled("key", Style::default().fg(Color::Red)),
            Span::raw(": v"),
        ]));
        let out = encode(&text);
        assert!(out.starts_with("\x1b[38;5;1mkey"));
        assert!(out.ends_with("\x1b[m: v"));
    }

    #[test]
    fn test_rgb_background() {
        let text = Text::from(Line::from(Span::styled(
            "x",
            Style::default().bg(Color::Rgb(1, 2, 3)),
        )));
        assert!(encode(&text).starts_with("\x1b[48;2;1;2;3m"));
    }
}
