//! Parsed query paths.

use std::fmt;

/// One segment of a query path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QuerySegment {
    /// Mapping key
    Key(String),
    /// Non-negative sequence index
    Index(usize),
}

impl fmt::Display for QuerySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuerySegment::Key(key) => write!(f, "{key}"),
            QuerySegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A validated query path such as `a.b.0.c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryPath {
    text: String,
    segments: Vec<QuerySegment>,
}

impl QueryPath {
    pub(crate) fn new(text: String, segments: Vec<QuerySegment>) -> Self {
        Self { text, segments }
    }

    /// The path as typed, which is also its canonical form.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn segments(&self) -> &[QuerySegment] {
        &self.segments
    }
}

impl fmt::Display for QueryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
