//! The combined find-and-collect operation.

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::document::node::NodeId;
use crate::document::token::TokenId;
use crate::document::tree::YamlFile;

use super::collector::collect;
use super::finder::find_all;
use super::parser::Parser;

/// Nodes matched by one query path and the tokens they own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    path: String,
    matches: Vec<NodeId>,
    tokens: IndexSet<TokenId>,
    /// Token to the index (in `matches`) of the match that owns it.
    owners: IndexMap<TokenId, usize>,
}

impl QueryResult {
    /// A result with no matches for `path`.
    pub fn empty(path: &str) -> Self {
        Self {
            path: path.to_string(),
            ..Self::default()
        }
    }

    /// The query text this result was computed for.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Matched nodes, one per document at most, in document order.
    pub fn matches(&self) -> &[NodeId] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Every token owned by any match.
    pub fn tokens(&self) -> &IndexSet<TokenId> {
        &self.tokens
    }

    pub fn contains(&self, token: TokenId) -> bool {
        self.tokens.contains(&token)
    }

    /// Index into [`matches`](Self::matches) of the match owning `token`.
    pub fn owner_index(&self, token: TokenId) -> Option<usize> {
        self.owners.get(&token).copied()
    }

    /// The match owning `token`.
    pub fn owner(&self, token: TokenId) -> Option<NodeId> {
        self.owner_index(token).map(|i| self.matches[i])
    }

    /// Tokens owned by the match at `index`, in collection order.
    pub fn tokens_of(&self, index: usize) -> impl Iterator<Item = TokenId> + '_ {
        self.owners
            .iter()
            .filter(move |(_, owner)| **owner == index)
            .map(|(token, _)| *token)
    }
}

/// Finds every node named by `path` and collects the tokens each one owns.
///
/// Malformed paths are not an error: they are logged at debug level and
/// produce an empty result, the same as a path that names nothing.
///
/// # Example
///
/// ```
/// use yamlnav::document::tree::YamlFile;
/// use yamlnav::query::query;
///
/// let file = YamlFile::parse("a: 1\n---\na: 2\n").unwrap();
/// assert_eq!(query(&file, "a").matches().len(), 2);
/// assert!(query(&file, "a[0]").is_empty());
/// ```
pub fn query(file: &YamlFile, path: &str) -> QueryResult {
    let parsed = match Parser::parse(path) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!(path, error = %e, "query path rejected");
            return QueryResult::empty(path);
        }
    };

    let matches = find_all(file, parsed.as_str());
    let mut tokens = IndexSet::new();
    let mut owners = IndexMap::new();
    for (index, node) in matches.iter().enumerate() {
        for token in collect(file, *node) {
            tokens.insert(token);
            owners.entry(token).or_insert(index);
        }
    }
    debug!(path, matches = matches.len(), tokens = tokens.len(), "query evaluated");

    QueryResult {
        path: path.to_string(),
        matches,
        tokens,
        owners,
    }
}
