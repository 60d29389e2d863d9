//! Completion candidates for the query input.

use std::collections::BTreeSet;

use crate::document::tree::YamlFile;

use super::parser::Parser;
use super::path::canonical_path;

/// Canonical paths of every node in every document, unique and sorted.
///
/// The empty path of document roots is left out, as is any path the query
/// parser would reject.
///
/// # Example
///
/// ```
/// use yamlnav::document::tree::YamlFile;
/// use yamlnav::query::suggestion::suggestions;
///
/// let file = YamlFile::parse("b: [x]\na: 1\n").unwrap();
/// assert_eq!(suggestions(&file), vec!["a", "b", "b.0"]);
/// ```
pub fn suggestions(file: &YamlFile) -> Vec<String> {
    file.nodes()
        .map(|(id, _)| canonical_path(file, id))
        .filter(|path| !path.is_empty() && Parser::parse(path).is_ok())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Suggestions that extend `prefix`, in sorted order.
///
/// An empty prefix offers nothing, and a suggestion equal to the prefix is
/// skipped since accepting it would change nothing.
pub fn complete<'a>(suggestions: &'a [String], prefix: &str) -> Vec<&'a str> {
    if prefix.is_empty() {
        return Vec::new();
    }
    suggestions
        .iter()
        .filter(|s| s.len() > prefix.len() && s.starts_with(prefix))
        .map(String::as_str)
        .collect()
}
