//! YAML lexer producing a lossless [`TokenStream`].
//!
//! The lexer understands enough YAML to cut a document into the tokens the
//! renderer and parser need: block and flow indicators, node properties,
//! comments, directives, document markers, and all five scalar styles. It does
//! not validate; the parser runs `yaml-rust2` over the text first.
//!
//! Each token's `origin` starts at the end of the previous token, so the
//! whitespace (including newlines) in between belongs to the token that
//! follows it. Whitespace after the last token is appended to the last token.
//!
//! # Example
//!
//! ```
//! use yamlnav::document::lexer::tokenize;
//!
//! let src = "name: &n Alice\nalias: *n\n";
//! let stream = tokenize(src);
//! assert_eq!(stream.source(), src);
//! ```

use super::token::{Position, Token, TokenKind, TokenStream};
use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[-+]?[0-9]+|0o[0-7]+|0x[0-9a-fA-F]+)$").expect("integer pattern")
});

static FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[-+]?(?:\.[0-9]+|[0-9]+(?:\.[0-9]*)?)(?:[eE][-+]?[0-9]+)?|[-+]?\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN))$",
    )
    .expect("float pattern")
});

/// Tokenizes a YAML text.
pub fn tokenize(src: &str) -> TokenStream {
    Lexer::new(src).run()
}

/// Resolves the kind of a single-line plain scalar using the YAML 1.2 core schema.
pub fn classify_plain(value: &str) -> TokenKind {
    match value {
        "~" | "null" | "Null" | "NULL" => TokenKind::Null,
        "true" | "True" | "TRUE" | "false" | "False" | "FALSE" => TokenKind::Bool,
        v if INTEGER.is_match(v) => TokenKind::Integer,
        v if FLOAT.is_match(v) => TokenKind::Float,
        _ => TokenKind::String,
    }
}

/// Why a plain scalar stopped on its current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlainStop {
    EndOfLine,
    MappingValue,
    Comment,
    FlowIndicator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chomping {
    Clip,
    Strip,
    Keep,
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    line_start: usize,
    /// Where the origin of the next token begins.
    trivia_start: usize,
    tokens: Vec<Token>,
    flow_depth: usize,
    /// Indentation a plain scalar's continuation lines must exceed.
    scalar_parent: isize,
    /// Column of the first content token of the current block entry.
    entry_column: usize,
    /// The next token opens a new entry (set after `-` and `?`).
    pending_entry: bool,
    /// Line on which the last non-comment token ended (0 before any token).
    last_line: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            line_start: 0,
            trivia_start: 0,
            tokens: Vec::new(),
            flow_depth: 0,
            scalar_parent: -1,
            entry_column: 0,
            pending_entry: false,
            last_line: 0,
        }
    }

    fn run(mut self) -> TokenStream {
        loop {
            self.skip_trivia();
            let Some(c) = self.peek() else { break };
            let at_line_start = self.pos == self.line_start;

            match c {
                '#' => self.lex_to_end_of_line(TokenKind::Comment),
                '%' if at_line_start && self.flow_depth == 0 => {
                    self.lex_to_end_of_line(TokenKind::Directive)
                }
                '-' if at_line_start && self.starts_marker("---") => {
                    self.lex_document_marker(TokenKind::DocumentHeader)
                }
                '.' if at_line_start && self.starts_marker("...") => {
                    self.lex_document_marker(TokenKind::DocumentEnd)
                }
                '-' if self.flow_depth == 0 && self.is_blank_or_end(self.pos + 1) => {
                    self.lex_indicator(TokenKind::SequenceEntry)
                }
                '?' if self.is_blank_or_end(self.pos + 1) => {
                    self.lex_indicator(TokenKind::MappingKey)
                }
                ':' if self.is_value_indicator() => self.lex_indicator(TokenKind::MappingValue),
                '[' => self.lex_flow(TokenKind::SequenceStart),
                '{' => self.lex_flow(TokenKind::MappingStart),
                ']' => self.lex_flow(TokenKind::SequenceEnd),
                '}' => self.lex_flow(TokenKind::MappingEnd),
                ',' if self.flow_depth > 0 => self.lex_flow(TokenKind::CollectEntry),
                '&' => self.lex_property(TokenKind::Anchor),
                '*' => self.lex_property(TokenKind::Alias),
                '!' => self.lex_tag(),
                '|' | '>' if self.flow_depth == 0 => self.lex_block_scalar(c),
                '\'' => self.lex_single_quoted(),
                '"' => self.lex_double_quoted(),
                _ => self.lex_plain(),
            }
        }

        if self.trivia_start < self.src.len() {
            if let Some(last) = self.tokens.last_mut() {
                last.origin.push_str(&self.src[self.trivia_start..]);
            }
        }

        TokenStream::new(self.tokens)
    }

    // -- cursor helpers --

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn byte_at(&self, i: usize) -> Option<u8> {
        self.src.as_bytes().get(i).copied()
    }

    fn is_blank_or_end(&self, i: usize) -> bool {
        matches!(self.byte_at(i), None | Some(b' ' | b'\t' | b'\n' | b'\r'))
    }

    fn is_flow_indicator(&self, i: usize) -> bool {
        matches!(self.byte_at(i), Some(b',' | b'[' | b']' | b'{' | b'}'))
    }

    fn char_len_at(&self, i: usize) -> usize {
        self.src[i..].chars().next().map_or(1, char::len_utf8)
    }

    fn end_of_line(&self, from: usize) -> usize {
        self.src[from..]
            .find('\n')
            .map_or(self.src.len(), |n| from + n)
    }

    fn starts_marker(&self, marker: &str) -> bool {
        self.src[self.pos..].starts_with(marker) && self.is_blank_or_end(self.pos + marker.len())
    }

    fn is_marker_line(&self, line_begin: usize) -> bool {
        let rest = &self.src[line_begin..];
        (rest.starts_with("---") || rest.starts_with("..."))
            && self.is_blank_or_end(line_begin + 3)
    }

    fn column0(&self) -> usize {
        self.src[self.line_start..self.pos].chars().count()
    }

    fn line_indent(&self) -> usize {
        self.src[self.line_start..]
            .bytes()
            .take_while(|b| *b == b' ')
            .count()
    }

    /// Moves the cursor to `end`, keeping line bookkeeping in sync.
    fn advance_to(&mut self, end: usize) {
        for (i, b) in self.src.as_bytes()[self.pos..end].iter().enumerate() {
            if *b == b'\n' {
                self.line += 1;
                self.line_start = self.pos + i + 1;
            }
        }
        self.pos = end;
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.byte_at(self.pos) {
                Some(b' ' | b'\t' | b'\r' | b'\n') => self.advance_to(self.pos + 1),
                _ if self.src[self.pos..].starts_with('\u{feff}') => {
                    self.advance_to(self.pos + '\u{feff}'.len_utf8())
                }
                _ => break,
            }
        }
    }

    fn skip_inline_spaces(&mut self) {
        while matches!(self.byte_at(self.pos), Some(b' ' | b'\t')) {
            self.advance_to(self.pos + 1);
        }
    }

    /// Pushes a token whose text spans `self.pos..end`.
    fn emit(&mut self, kind: TokenKind, value: String, end: usize) {
        let column0 = self.column0();
        let position = Position {
            line: self.line,
            column: column0 + 1,
            offset: self.pos,
            indent: self.line_indent(),
        };

        if kind != TokenKind::Comment && self.flow_depth == 0 {
            let first_on_line = self.last_line < self.line;
            if first_on_line || self.pending_entry {
                self.entry_column = column0;
                self.pending_entry = false;
            }
        }

        self.tokens.push(Token {
            kind,
            value,
            origin: self.src[self.trivia_start..end].to_string(),
            position,
        });
        self.advance_to(end);
        self.trivia_start = end;
        if kind != TokenKind::Comment {
            self.last_line = self.line;
        }
    }

    // -- token scanners --

    fn lex_to_end_of_line(&mut self, kind: TokenKind) {
        let end = self.end_of_line(self.pos);
        let text = self.src[self.pos..end].trim_end_matches('\r').to_string();
        self.emit(kind, text, end);
    }

    fn lex_document_marker(&mut self, kind: TokenKind) {
        let text = self.src[self.pos..self.pos + 3].to_string();
        self.emit(kind, text, self.pos + 3);
        self.flow_depth = 0;
        self.scalar_parent = -1;
        self.entry_column = 0;
        self.pending_entry = false;
    }

    fn is_value_indicator(&self) -> bool {
        if self.is_blank_or_end(self.pos + 1) {
            return true;
        }
        if self.flow_depth == 0 {
            return false;
        }
        if self.is_flow_indicator(self.pos + 1) {
            return true;
        }
        // JSON-like keys may be followed directly by `:` inside flow collections.
        self.trivia_start == self.pos
            && self.tokens.last().is_some_and(|t| {
                matches!(
                    t.kind,
                    TokenKind::SingleQuotedString
                        | TokenKind::DoubleQuotedString
                        | TokenKind::SequenceEnd
                        | TokenKind::MappingEnd
                )
            })
    }

    fn lex_indicator(&mut self, kind: TokenKind) {
        let column0 = self.column0() as isize;
        let text = self.src[self.pos..self.pos + 1].to_string();
        self.emit(kind, text, self.pos + 1);

        if self.flow_depth > 0 {
            return;
        }
        match kind {
            TokenKind::SequenceEntry | TokenKind::MappingKey => {
                self.scalar_parent = column0;
                self.pending_entry = true;
            }
            TokenKind::MappingValue => self.scalar_parent = self.entry_column as isize,
            _ => {}
        }
    }

    fn lex_flow(&mut self, kind: TokenKind) {
        let text = self.src[self.pos..self.pos + 1].to_string();
        self.emit(kind, text, self.pos + 1);
        match kind {
            TokenKind::SequenceStart | TokenKind::MappingStart => self.flow_depth += 1,
            TokenKind::SequenceEnd | TokenKind::MappingEnd => {
                self.flow_depth = self.flow_depth.saturating_sub(1)
            }
            _ => {}
        }
    }

    fn scan_name(&self, from: usize) -> usize {
        let mut i = from;
        while !self.is_blank_or_end(i) && !(self.flow_depth > 0 && self.is_flow_indicator(i)) {
            i += self.char_len_at(i);
        }
        i
    }

    /// Anchor `&name` or alias `*name`: a marker token followed by a name token.
    fn lex_property(&mut self, kind: TokenKind) {
        let marker = self.src[self.pos..self.pos + 1].to_string();
        self.emit(kind, marker, self.pos + 1);

        let end = self.scan_name(self.pos);
        if end > self.pos {
            let name = self.src[self.pos..end].to_string();
            self.emit(TokenKind::String, name, end);
        }
    }

    fn lex_tag(&mut self) {
        let end = self.scan_name(self.pos + 1);
        let text = self.src[self.pos..end].to_string();
        self.emit(TokenKind::Tag, text, end);
    }

    /// Scans one line of a plain scalar. The char at `start` is always part
    /// of the scalar. Returns the end of the last non-blank char and the
    /// reason the scan stopped.
    fn scan_plain_line(&self, start: usize) -> (usize, PlainStop) {
        let mut i = start + self.char_len_at(start);
        let mut end = i;
        let in_flow = self.flow_depth > 0;

        loop {
            match self.byte_at(i) {
                None | Some(b'\n' | b'\r') => return (end, PlainStop::EndOfLine),
                Some(b':') if self.is_blank_or_end(i + 1) => {
                    return (end, PlainStop::MappingValue)
                }
                Some(b':') if in_flow && self.is_flow_indicator(i + 1) => {
                    return (end, PlainStop::MappingValue)
                }
                Some(b'#') if matches!(self.byte_at(i - 1), Some(b' ' | b'\t')) => {
                    return (end, PlainStop::Comment)
                }
                Some(b',' | b'[' | b']' | b'{' | b'}') if in_flow => {
                    return (end, PlainStop::FlowIndicator)
                }
                Some(b' ' | b'\t') => i += 1,
                Some(_) => {
                    i += self.char_len_at(i);
                    end = i;
                }
            }
        }
    }

    fn lex_plain(&mut self) {
        let start = self.pos;
        let (mut end, mut stop) = self.scan_plain_line(start);
        let mut lines: Vec<(usize, &'a str)> = vec![(0, &self.src[start..end])];

        while stop == PlainStop::EndOfLine {
            let Some((blanks, content_at)) = self.next_continuation(end) else {
                break;
            };
            let (line_end, line_stop) = self.scan_plain_line(content_at);
            if line_stop == PlainStop::MappingValue {
                break;
            }
            lines.push((blanks, &self.src[content_at..line_end]));
            end = line_end;
            stop = line_stop;
        }

        let value = fold_plain(&lines);
        let kind = if lines.len() == 1 {
            classify_plain(&value)
        } else {
            TokenKind::String
        };
        self.emit(kind, value, end);
    }

    /// Finds the next line that continues a plain scalar ending at `end`.
    /// Returns the number of blank lines skipped and the offset of the
    /// continuation's first char.
    fn next_continuation(&self, end: usize) -> Option<(usize, usize)> {
        let mut line_end = self.end_of_line(end);
        let mut blanks = 0;

        loop {
            if line_end >= self.src.len() {
                return None;
            }
            let line_begin = line_end + 1;
            let indent = self.src[line_begin..]
                .bytes()
                .take_while(|b| *b == b' ')
                .count();
            let mut content_at = line_begin + indent;
            while self.byte_at(content_at) == Some(b'\t') {
                content_at += 1;
            }

            match self.byte_at(content_at) {
                None => return None,
                Some(b'\n') => {
                    blanks += 1;
                    line_end = content_at;
                    continue;
                }
                Some(b'\r') if self.byte_at(content_at + 1) == Some(b'\n') => {
                    blanks += 1;
                    line_end = content_at + 1;
                    continue;
                }
                Some(b'#') => return None,
                Some(b',' | b'[' | b']' | b'{' | b'}' | b':') if self.flow_depth > 0 => {
                    return None
                }
                Some(_) => {}
            }

            if self.is_marker_line(line_begin) {
                return None;
            }
            if self.flow_depth == 0 && (indent as isize) <= self.scalar_parent {
                return None;
            }
            return Some((blanks, content_at));
        }
    }

    fn lex_single_quoted(&mut self) {
        let mut i = self.pos + 1;
        let end = loop {
            match self.byte_at(i) {
                None => break self.src.len(),
                Some(b'\'') if self.byte_at(i + 1) == Some(b'\'') => i += 2,
                Some(b'\'') => break i + 1,
                Some(_) => i += self.char_len_at(i),
            }
        };
        let inner_end = end.saturating_sub(1).max(self.pos + 1);
        let raw = &self.src[self.pos + 1..inner_end];
        let value = fold_quoted(raw, false).replace("''", "'");
        self.emit(TokenKind::SingleQuotedString, value, end);
    }

    fn lex_double_quoted(&mut self) {
        let mut i = self.pos + 1;
        let end = loop {
            match self.byte_at(i) {
                None => break self.src.len(),
                Some(b'\\') => {
                    i += 1;
                    if i < self.src.len() {
                        i += self.char_len_at(i);
                    }
                }
                Some(b'"') => break i + 1,
                Some(_) => i += self.char_len_at(i),
            }
        };
        let inner_end = end.saturating_sub(1).max(self.pos + 1).min(self.src.len());
        let raw = &self.src[self.pos + 1..inner_end];
        let value = unescape_double(&fold_quoted(raw, true));
        self.emit(TokenKind::DoubleQuotedString, value, end);
    }

    fn lex_block_scalar(&mut self, indicator: char) {
        let parent = self.scalar_parent;
        let mut i = self.pos + 1;
        let mut explicit: Option<usize> = None;
        let mut chomping = Chomping::Clip;
        for _ in 0..2 {
            match self.byte_at(i) {
                Some(b'-') => chomping = Chomping::Strip,
                Some(b'+') => chomping = Chomping::Keep,
                Some(d @ b'1'..=b'9') => explicit = Some((d - b'0') as usize),
                _ => break,
            }
            i += 1;
        }

        let (kind, folded) = if indicator == '|' {
            (TokenKind::Literal, false)
        } else {
            (TokenKind::Folded, true)
        };
        let header = self.src[self.pos..i].to_string();
        self.emit(kind, header, i);

        self.skip_inline_spaces();
        if self.peek() == Some('#') {
            self.lex_to_end_of_line(TokenKind::Comment);
        }
        if self.pos >= self.src.len() {
            return;
        }

        let header_end = self.end_of_line(self.pos);
        let base = parent.max(0) as usize;
        let mut block_indent = explicit.map(|e| base + e);
        let mut lines: Vec<&'a str> = Vec::new();
        let mut pending_blank: Vec<&'a str> = Vec::new();
        let mut first_content: Option<usize> = None;
        let mut content_end: Option<usize> = None;
        let mut line_begin = header_end + 1;

        while line_begin <= self.src.len() {
            let line_end = self.end_of_line(line_begin);
            let line = &self.src[line_begin..line_end];
            let spaces = line.bytes().take_while(|b| *b == b' ').count();

            if line[spaces..].trim_matches([' ', '\t', '\r']).is_empty() {
                pending_blank.push(line);
                if line_end >= self.src.len() {
                    break;
                }
                line_begin = line_end + 1;
                continue;
            }
            if spaces == 0 && self.is_marker_line(line_begin) {
                break;
            }
            let indent = match block_indent {
                Some(indent) => indent,
                None if (spaces as isize) > parent => *block_indent.insert(spaces),
                None => break,
            };
            if spaces < indent {
                break;
            }

            first_content.get_or_insert(line_begin + spaces);
            lines.append(&mut pending_blank);
            lines.push(line);
            content_end = Some(line_end);

            if line_end >= self.src.len() {
                break;
            }
            line_begin = line_end + 1;
        }

        let (Some(first), Some(end), Some(indent)) = (first_content, content_end, block_indent)
        else {
            return;
        };
        let value = block_value(&lines, indent, folded, chomping, pending_blank.len());
        self.advance_to(first);
        self.emit(TokenKind::BlockContent, value, end);
    }
}

/// Joins the lines of a plain scalar: single breaks fold into a space,
/// each blank line becomes a newline.
fn fold_plain(lines: &[(usize, &str)]) -> String {
    let mut out = String::new();
    for (idx, (blanks, line)) in lines.iter().enumerate() {
        if idx > 0 {
            if *blanks > 0 {
                out.push_str(&"\n".repeat(*blanks));
            } else {
                out.push(' ');
            }
        }
        out.push_str(line);
    }
    out
}

/// Folds the raw text between quotes. For double quotes an escaped line
/// break joins the lines without a separator.
fn fold_quoted(raw: &str, double: bool) -> String {
    let lines: Vec<&str> = raw.split('\n').collect();
    if lines.len() == 1 {
        return raw.to_string();
    }

    let last = lines.len() - 1;
    let mut out = String::new();
    let mut breaks = 0;
    let mut continued = false;

    for (idx, raw_line) in lines.iter().enumerate() {
        let mut line = *raw_line;
        if idx > 0 {
            line = line.trim_start_matches([' ', '\t']);
        }
        if idx < last {
            line = line.trim_end_matches([' ', '\t', '\r']);
        }
        if idx > 0 && idx < last && line.is_empty() {
            breaks += 1;
            continue;
        }
        if idx > 0 && !continued {
            if breaks > 0 {
                out.push_str(&"\n".repeat(breaks));
            } else {
                out.push(' ');
            }
        }
        breaks = 0;
        continued = false;

        if double && idx < last && ends_with_escape(line) {
            line = &line[..line.len() - 1];
            continued = true;
        }
        out.push_str(line);
    }
    out
}

fn ends_with_escape(line: &str) -> bool {
    line.bytes().rev().take_while(|b| *b == b'\\').count() % 2 == 1
}

/// Resolves double-quoted escape sequences.
fn unescape_double(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(e) = chars.next() else {
            out.push('\\');
            break;
        };
        let hex_len = match e {
            'x' => 2,
            'u' => 4,
            'U' => 8,
            _ => 0,
        };
        if hex_len > 0 {
            let digits: String = chars.by_ref().take(hex_len).collect();
            match u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32) {
                Some(ch) => out.push(ch),
                None => {
                    out.push('\\');
                    out.push(e);
                    out.push_str(&digits);
                }
            }
            continue;
        }
        match e {
            '0' => out.push('\0'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            't' | '\t' => out.push('\t'),
            'n' => out.push('\n'),
            'v' => out.push('\u{0b}'),
            'f' => out.push('\u{0c}'),
            'r' => out.push('\r'),
            'e' => out.push('\u{1b}'),
            ' ' => out.push(' '),
            '"' => out.push('"'),
            '/' => out.push('/'),
            '\\' => out.push('\\'),
            'N' => out.push('\u{85}'),
            '_' => out.push('\u{a0}'),
            'L' => out.push('\u{2028}'),
            'P' => out.push('\u{2029}'),
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    out
}

/// Builds the value of a block scalar from its raw content lines.
fn block_value(
    lines: &[&str],
    indent: usize,
    folded: bool,
    chomping: Chomping,
    trailing_blanks: usize,
) -> String {
    let stripped: Vec<&str> = lines
        .iter()
        .map(|line| {
            let line = line.trim_end_matches('\r');
            if line.len() <= indent {
                line.trim_start_matches(' ')
            } else {
                &line[indent..]
            }
        })
        .collect();

    let body = if folded {
        fold_block(&stripped)
    } else {
        stripped.join("\n")
    };

    match chomping {
        Chomping::Strip => body,
        Chomping::Clip => body + "\n",
        Chomping::Keep => body + "\n" + &"\n".repeat(trailing_blanks),
    }
}

fn fold_block(lines: &[&str]) -> String {
    let mut out = String::new();
    let mut prev: Option<&str> = None;
    let mut blanks = 0;

    for line in lines {
        if line.is_empty() {
            blanks += 1;
            continue;
        }
        match prev {
            Some(p) if p.starts_with([' ', '\t']) || line.starts_with([' ', '\t']) => {
                out.push('\n');
                out.push_str(&"\n".repeat(blanks));
            }
            Some(_) if blanks > 0 => out.push_str(&"\n".repeat(blanks)),
            Some(_) => out.push(' '),
            None => out.push_str(&"\n".repeat(blanks)),
        }
        blanks = 0;
        out.push_str(line);
        prev = Some(line);
    }
    out
}
