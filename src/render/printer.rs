//! Rebuilds the source text as styled lines.

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};

use crate::document::node::NodeId;
use crate::document::token::{Indicator, TokenId, TokenKind, TokenStream};
use crate::document::tree::YamlFile;
use crate::query::{query, QueryResult};
use crate::theme::Theme;

use super::ansi;
use super::properties::{categorize, RenderFunc, RenderProperties};

/// Layout switches for one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix every line with a zero-padded line number.
    pub line_numbers: bool,
}

/// Output of one render: styled lines plus the matches that were highlighted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    pub text: Text<'static>,
    pub matches: Vec<NodeId>,
}

impl Rendered {
    pub fn line_count(&self) -> usize {
        self.text.lines.len()
    }

    /// The rendered text with all styling dropped.
    pub fn plain(&self) -> String {
        self.text
            .lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The rendered text as ANSI escape sequences, ready for a terminal.
    pub fn to_ansi(&self) -> String {
        ansi::encode(&self.text)
    }
}

/// Walks a file's tokens and styles them by category and match ownership.
#[derive(Debug, Clone, PartialEq)]
pub struct Printer {
    default: RenderProperties,
    highlighted: RenderProperties,
    gutter: Style,
}

impl Default for Printer {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

impl Printer {
    pub fn new(default: RenderProperties, highlighted: RenderProperties, gutter: Style) -> Self {
        Self {
            default,
            highlighted,
            gutter,
        }
    }

    pub fn from_theme(theme: &Theme) -> Self {
        Self::new(
            RenderProperties::default_for(theme),
            RenderProperties::highlighted_for(theme),
            Style::default().fg(theme.colors.line_number),
        )
    }

    /// Queries `file` for `path` and renders it with the matches highlighted.
    pub fn print(&self, file: &YamlFile, path: &str, options: RenderOptions) -> Rendered {
        self.render(file, &query(file, path), options)
    }

    /// Renders `file`, highlighting the tokens owned by `result`.
    pub fn render(&self, file: &YamlFile, result: &QueryResult, options: RenderOptions) -> Rendered {
        let tokens = file.tokens();
        let mut lines: Vec<Vec<Span<'static>>> = vec![Vec::new()];

        for (id, token) in tokens.entries() {
            let owner = highlight_owner(tokens, result, id);
            let category = categorize(tokens, id);
            let func = match owner {
                Some(_) => self.highlighted.get(category),
                None => self.default.get(category),
            };
            let owner_indent = owner
                .and_then(|t| result.owner(t))
                .map(|node| tokens[file.node(node).token].position.indent);

            for (i, piece) in token.origin.split('\n').enumerate() {
                if i == 0 {
                    push_first_piece(last_line(&mut lines), piece, func);
                    continue;
                }
                lines.push(Vec::new());
                let line = last_line(&mut lines);
                match owner_indent {
                    Some(indent) => {
                        let spaces = piece.bytes().take_while(|b| *b == b' ').count();
                        let keep = spaces.min(indent);
                        push_span(line, Span::raw(piece[..keep].to_string()));
                        push_span(line, func.render(&piece[keep..]));
                    }
                    None => push_span(line, func.render(piece)),
                }
            }
        }

        if file.source().ends_with('\n') && lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        if tokens.is_empty() {
            lines.clear();
        }

        if options.line_numbers {
            let width = lines.len().to_string().len();
            for (n, line) in lines.iter_mut().enumerate() {
                let gutter = format!("{:0width$} │ ", n + 1, width = width);
                line.insert(0, Span::styled(gutter, self.gutter));
            }
        }

        Rendered {
            text: Text::from(lines.into_iter().map(Line::from).collect::<Vec<_>>()),
            matches: result.matches().to_vec(),
        }
    }
}

/// The highlighted token whose owner decides how `id` is drawn.
///
/// `-`, `?` and node properties take the highlight of the token they
/// introduce. A `:` is always the defining token of its entry, so it is
/// highlighted exactly when the entry is.
fn highlight_owner(tokens: &TokenStream, result: &QueryResult, id: TokenId) -> Option<TokenId> {
    if result.contains(id) {
        return Some(id);
    }
    let token = &tokens[id];
    let introduces = token.indicator() == Indicator::NodeProperty
        || matches!(token.kind, TokenKind::SequenceEntry | TokenKind::MappingKey);
    if !introduces {
        return None;
    }
    tokens.next(id).filter(|next| result.contains(*next))
}

fn last_line<'a>(lines: &'a mut Vec<Vec<Span<'static>>>) -> &'a mut Vec<Span<'static>> {
    if lines.is_empty() {
        lines.push(Vec::new());
    }
    let last = lines.len() - 1;
    &mut lines[last]
}

/// Leading whitespace on the token's first line is emitted as its own span.
fn push_first_piece(line: &mut Vec<Span<'static>>, piece: &str, func: &RenderFunc) {
    let text = piece.trim_start_matches([' ', '\t', '\r']);
    let lead = &piece[..piece.len() - text.len()];
    push_span(line, func.render(lead));
    push_span(line, func.render(text));
}

fn push_span(line: &mut Vec<Span<'static>>, span: Span<'static>) {
    if !span.content.is_empty() {
        line.push(span);
    }
}
