//! Lexical tokens of a YAML stream.
//!
//! The lexer produces a flat, ordered [`TokenStream`]. Every token keeps the
//! exact source text it was cut from (its *origin*), including the whitespace
//! that precedes it, so concatenating all origins reproduces the input byte
//! for byte. Neighbours are addressed by [`TokenId`] instead of pointers.
//!
//! # Example
//!
//! ```
//! use yamlnav::document::lexer::tokenize;
//! use yamlnav::document::token::TokenKind;
//!
//! let stream = tokenize("a: 1\n");
//! let kinds: Vec<_> = stream.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![TokenKind::String, TokenKind::MappingValue, TokenKind::Integer]
//! );
//! ```

use std::ops::Index;

/// Index of a token inside its [`TokenStream`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub usize);

/// The lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Plain scalar that resolves to a string
    String,
    /// `'single quoted'` scalar
    SingleQuotedString,
    /// `"double quoted"` scalar
    DoubleQuotedString,
    /// Plain scalar that resolves to an integer
    Integer,
    /// Plain scalar that resolves to a float
    Float,
    /// Plain scalar that resolves to a boolean
    Bool,
    /// Plain scalar that resolves to null (`null`, `~`)
    Null,
    /// Anchor marker `&`; the anchor name follows as a separate token
    Anchor,
    /// Alias marker `*`; the alias name follows as a separate token
    Alias,
    /// Tag such as `!!str` or `!local`
    Tag,
    /// Mapping value indicator `:`
    MappingValue,
    /// Explicit mapping key indicator `?`
    MappingKey,
    /// Block sequence entry indicator `-`
    SequenceEntry,
    /// Document header `---`
    DocumentHeader,
    /// Document end marker `...`
    DocumentEnd,
    /// Literal block scalar header (`|`, `|-`, `|+2`, ...)
    Literal,
    /// Folded block scalar header (`>`, `>-`, ...)
    Folded,
    /// Content of a literal or folded block scalar
    BlockContent,
    /// `[`
    SequenceStart,
    /// `]`
    SequenceEnd,
    /// `{`
    MappingStart,
    /// `}`
    MappingEnd,
    /// `,` inside a flow collection
    CollectEntry,
    /// `# comment`
    Comment,
    /// `%YAML` / `%TAG` directive line
    Directive,
}

impl TokenKind {
    /// Returns true for quoted and plain string scalars (including block content).
    pub fn is_string_like(&self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::SingleQuotedString
                | TokenKind::DoubleQuotedString
                | TokenKind::BlockContent
        )
    }

    /// Returns true for tokens that carry a scalar value.
    pub fn is_scalar(&self) -> bool {
        self.is_string_like()
            || matches!(
                self,
                TokenKind::Integer | TokenKind::Float | TokenKind::Bool | TokenKind::Null
            )
    }

    /// The indicator class this kind belongs to.
    pub fn indicator(&self) -> Indicator {
        match self {
            TokenKind::MappingValue | TokenKind::MappingKey | TokenKind::SequenceEntry => {
                Indicator::BlockStructure
            }
            TokenKind::SequenceStart
            | TokenKind::SequenceEnd
            | TokenKind::MappingStart
            | TokenKind::MappingEnd
            | TokenKind::CollectEntry => Indicator::FlowCollection,
            TokenKind::Literal | TokenKind::Folded => Indicator::BlockScalar,
            TokenKind::Anchor | TokenKind::Alias | TokenKind::Tag => Indicator::NodeProperty,
            TokenKind::DocumentHeader | TokenKind::DocumentEnd | TokenKind::Directive => {
                Indicator::Document
            }
            TokenKind::Comment => Indicator::Comment,
            _ => Indicator::None,
        }
    }
}

/// Structural role of a token, independent of its exact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// `-`, `?` and `:` in block context
    BlockStructure,
    /// Flow punctuation `[ ] { } ,`
    FlowCollection,
    /// Block scalar headers `|` and `>`
    BlockScalar,
    /// Anchor and alias markers, tags
    NodeProperty,
    /// Document markers and directives
    Document,
    /// Comments
    Comment,
    /// Content tokens
    None,
}

/// Where a token's text (not its leading whitespace) begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// 1-based line number
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
    /// Byte offset into the source
    pub offset: usize,
    /// Number of leading spaces on the token's line
    pub indent: usize,
}

/// A single lexical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Decoded value: unquoted and unescaped for scalars, the name for
    /// anchors/aliases, the raw text for everything else.
    pub value: String,
    /// Raw source text, leading whitespace included.
    pub origin: String,
    pub position: Position,
}

impl Token {
    /// The indicator class of this token.
    pub fn indicator(&self) -> Indicator {
        self.kind.indicator()
    }

    /// The token's own text, without the leading whitespace carried in `origin`.
    pub fn text(&self) -> &str {
        self.origin.trim_start_matches([' ', '\t', '\n', '\r'])
    }

    /// Line on which the token's text ends.
    pub fn end_line(&self) -> usize {
        self.position.line + self.text().trim_end().matches('\n').count()
    }
}

/// Ordered tokens of one YAML stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Iterates tokens together with their ids.
    pub fn entries(&self) -> impl Iterator<Item = (TokenId, &Token)> {
        self.tokens.iter().enumerate().map(|(i, t)| (TokenId(i), t))
    }

    /// The token before `id`, if any.
    pub fn prev(&self, id: TokenId) -> Option<TokenId> {
        id.0.checked_sub(1).map(TokenId)
    }

    /// The token after `id`, if any.
    pub fn next(&self, id: TokenId) -> Option<TokenId> {
        let next = id.0 + 1;
        (next < self.tokens.len()).then_some(TokenId(next))
    }

    /// Kind of the token before `id`.
    pub fn prev_kind(&self, id: TokenId) -> Option<TokenKind> {
        self.prev(id).map(|p| self.tokens[p.0].kind)
    }

    /// Kind of the token after `id`.
    pub fn next_kind(&self, id: TokenId) -> Option<TokenKind> {
        self.next(id).map(|n| self.tokens[n.0].kind)
    }

    /// Full source text, rebuilt from the token origins.
    pub fn source(&self) -> String {
        self.tokens.iter().map(|t| t.origin.as_str()).collect()
    }
}

impl Index<TokenId> for TokenStream {
    type Output = Token;

    fn index(&self, id: TokenId) -> &Token {
        &self.tokens[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, origin: &str) -> Token {
        Token {
            kind,
            value: origin.trim().to_string(),
            origin: origin.to_string(),
            position: Position::default(),
        }
    }

    #[test]
    fn test_indicator_classes() {
        assert_eq!(TokenKind::SequenceEntry.indicator(), Indicator::BlockStructure);
        assert_eq!(TokenKind::MappingValue.indicator(), Indicator::BlockStructure);
        assert_eq!(TokenKind::CollectEntry.indicator(), Indicator::FlowCollection);
        assert_eq!(TokenKind::Literal.indicator(), Indicator::BlockScalar);
        assert_eq!(TokenKind::Anchor.indicator(), Indicator::NodeProperty);
        assert_eq!(TokenKind::DocumentHeader.indicator(), Indicator::Document);
        assert_eq!(TokenKind::Integer.indicator(), Indicator::None);
    }

    #[test]
    fn test_prev_next_links() {
        let stream = TokenStream::new(vec![
            token(TokenKind::String, "a"),
            token(TokenKind::MappingValue, ":"),
            token(TokenKind::Integer, " 1"),
        ]);

        assert_eq!(stream.prev(TokenId(0)), None);
        assert_eq!(stream.next(TokenId(0)), Some(TokenId(1)));
        assert_eq!(stream.next(TokenId(2)), None);
        assert_eq!(stream.next_kind(TokenId(0)), Some(TokenKind::MappingValue));
        assert_eq!(stream.prev_kind(TokenId(2)), Some(TokenKind::MappingValue));
        assert_eq!(stream.source(), "a: 1");
    }

    #[test]
    fn test_text_strips_leading_whitespace() {
        let t = token(TokenKind::String, "\n  key");
        assert_eq!(t.text(), "key");
    }
}
