//! A parsed YAML stream: source text, token stream and node arena.
//!
//! `YamlFile` is immutable once built. The query and render layers only read
//! from it.
//!
//! # Example
//!
//! ```
//! use yamlnav::document::tree::YamlFile;
//!
//! let file = YamlFile::parse("a: 1\n---\nb: 2\n").unwrap();
//! assert_eq!(file.documents().len(), 2);
//! ```

use super::node::{Node, NodeId, NodeKind};
use super::parser::{self, ParseError};
use super::token::{TokenId, TokenStream};

/// A whole YAML stream with one or more documents.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlFile {
    source: String,
    tokens: TokenStream,
    nodes: Vec<Node>,
    documents: Vec<NodeId>,
}

impl YamlFile {
    pub(crate) fn new(
        source: String,
        tokens: TokenStream,
        nodes: Vec<Node>,
        documents: Vec<NodeId>,
    ) -> Self {
        Self {
            source,
            tokens,
            nodes,
            documents,
        }
    }

    /// Parses YAML text into a file.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is not valid YAML.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        parser::parse(source)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &TokenStream {
        &self.tokens
    }

    /// Document nodes in stream order.
    pub fn documents(&self) -> &[NodeId] {
        &self.documents
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Iterates every node with its id, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Key text of a mapping entry, as used in structural paths.
    pub fn entry_key(&self, entry: NodeId) -> Option<String> {
        match &self.node(entry).kind {
            NodeKind::MappingEntry { key, .. } => Some(self.key_text(*key)),
            _ => None,
        }
    }

    /// Text a key node contributes to a path segment.
    pub(crate) fn key_text(&self, key: NodeId) -> String {
        self.node(key).key_text(&self.tokens)
    }

    /// Key of a mapping's last entry, which its raw path carries as a
    /// dangling trailing segment.
    pub fn trailing_key(&self, id: NodeId) -> Option<String> {
        match &self.node(id).kind {
            NodeKind::Mapping { entries } => entries.last().and_then(|e| self.entry_key(*e)),
            _ => None,
        }
    }

    /// Raw structural path in bracket notation.
    ///
    /// A non-empty mapping reports the path of its last entry: `$.a.last`
    /// for the mapping stored under `a`.
    pub fn raw_path(&self, id: NodeId) -> String {
        let mut raw = self.node(id).path.raw();
        if let Some(key) = self.trailing_key(id) {
            raw.push('.');
            raw.push_str(&key);
        }
        raw
    }

    /// Line of the node's defining token.
    pub fn line_of(&self, id: NodeId) -> usize {
        self.tokens[self.node(id).token].position.line
    }

    /// Source text spanned by `tokens`, from the first to the last token.
    ///
    /// Lines after the first are dedented by the first token's column so the
    /// excerpt reads as a standalone YAML snippet.
    pub fn excerpt<I>(&self, tokens: I) -> String
    where
        I: IntoIterator<Item = TokenId>,
    {
        let mut ids = tokens.into_iter();
        let Some(first) = ids.next() else {
            return String::new();
        };
        let (min, max) = ids.fold((first, first), |(lo, hi), id| (lo.min(id), hi.max(id)));

        let start_token = &self.tokens[min];
        let end_token = &self.tokens[max];
        let start = start_token.position.offset;
        let end = (end_token.position.offset + end_token.text().trim_end().len()).max(start);
        let dedent = start_token.position.column.saturating_sub(1);

        let mut out = String::new();
        for (i, line) in self.source[start..end].split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
                let spaces = line.bytes().take_while(|b| *b == b' ').count();
                out.push_str(&line[spaces.min(dedent)..]);
            } else {
                out.push_str(line);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_path_of_mapping_carries_last_key() {
        let file = YamlFile::parse("a:\n  b: 1\n  c: 2\n").unwrap();
        let doc = file.node(file.documents()[0]);
        let NodeKind::Document { body: Some(root) } = doc.kind else {
            panic!("expected body");
        };
        assert_eq!(file.raw_path(root), "$.a");

        let (inner, _) = file
            .nodes()
            .find(|(_, n)| matches!(n.kind, NodeKind::Mapping { .. }) && !n.path.is_root())
            .unwrap();
        assert_eq!(file.raw_path(inner), "$.a.c");
        assert_eq!(file.trailing_key(inner).as_deref(), Some("c"));
    }

    #[test]
    fn test_excerpt_dedents() {
        let file = YamlFile::parse("root:\n  x: 1\n  y:\n    - 2\n").unwrap();
        let x = file.tokens().entries().find(|(_, t)| t.value == "x").unwrap().0;
        let last = TokenId(file.tokens().len() - 1);
        assert_eq!(file.excerpt([x, last]), "x: 1\ny:\n  - 2");
    }

    #[test]
    fn test_excerpt_empty() {
        let file = YamlFile::parse("a: 1\n").unwrap();
        assert_eq!(file.excerpt(Vec::new()), "");
    }
}
