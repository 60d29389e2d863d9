//! Query path parser.

use super::ast::{QueryPath, QuerySegment};
use super::error::QueryPathError;

/// Parser for dotted query paths.
pub struct Parser<'a> {
    input: &'a str,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given query string.
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Parses the query string into a [`QueryPath`].
    ///
    /// # Errors
    ///
    /// Returns a [`QueryPathError`] if the string is empty, contains an empty
    /// segment or a bracket, or if a segment has surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlnav::query::{Parser, QuerySegment};
    ///
    /// let path = Parser::parse("items.0.name").unwrap();
    /// assert_eq!(path.segments()[1], QuerySegment::Index(0));
    /// assert!(Parser::parse("items[0]").is_err());
    /// ```
    pub fn parse(input: &'a str) -> Result<QueryPath, QueryPathError> {
        Parser::new(input).parse_path()
    }

    fn parse_path(&self) -> Result<QueryPath, QueryPathError> {
        if self.input.is_empty() {
            return Err(QueryPathError::Empty);
        }

        let mut segments = Vec::new();
        let mut position = 0;
        for raw in self.input.split('.') {
            segments.push(Self::parse_segment(raw, position)?);
            position += raw.chars().count() + 1;
        }

        Ok(QueryPath::new(self.input.to_string(), segments))
    }

    fn parse_segment(raw: &str, position: usize) -> Result<QuerySegment, QueryPathError> {
        if raw.is_empty() {
            return Err(QueryPathError::EmptySegment { position });
        }
        if let Some((offset, found)) = raw.chars().enumerate().find(|(_, c)| matches!(c, '[' | ']')) {
            return Err(QueryPathError::UnexpectedChar {
                position: position + offset,
                found,
            });
        }
        if raw.trim() != raw {
            return Err(QueryPathError::Whitespace {
                segment: raw.to_string(),
            });
        }

        // Leading zeros make it a key: "007" never names index 7.
        let is_index = raw.bytes().all(|b| b.is_ascii_digit()) && (raw == "0" || !raw.starts_with('0'));
        match raw.parse::<usize>() {
            Ok(index) if is_index => Ok(QuerySegment::Index(index)),
            _ => Ok(QuerySegment::Key(raw.to_string())),
        }
    }
}
