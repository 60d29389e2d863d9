//! Error types for query path parsing.

use thiserror::Error;

/// Reasons a typed query path is rejected.
///
/// A rejected path never matches anything; [`query`](super::query) logs the
/// error and returns an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryPathError {
    /// Nothing was typed.
    #[error("query path is empty")]
    Empty,
    /// Two dots in a row, or a leading or trailing dot.
    #[error("empty segment at position {position}")]
    EmptySegment { position: usize },
    /// Brackets are not part of the query dialect.
    #[error("unexpected '{found}' at position {position}")]
    UnexpectedChar { position: usize, found: char },
    /// A segment starts or ends with whitespace.
    #[error("segment '{segment}' has surrounding whitespace")]
    Whitespace { segment: String },
}
