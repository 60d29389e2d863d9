//! Depth-first search for the node a query path names.

use crate::document::node::NodeId;
use crate::document::tree::YamlFile;

use super::path::canonical_path;

/// Finds the first node under `root`, in pre-order, whose canonical path
/// equals `query`.
///
/// A node is tested before its children, so an entry matches before its key
/// and value. An empty query matches nothing.
pub fn find(file: &YamlFile, root: NodeId, query: &str) -> Option<NodeId> {
    if query.is_empty() {
        return None;
    }
    find_from(file, root, query)
}

fn find_from(file: &YamlFile, id: NodeId, query: &str) -> Option<NodeId> {
    if canonical_path(file, id) == query {
        return Some(id);
    }
    file.node(id)
        .children()
        .into_iter()
        .find_map(|child| find_from(file, child, query))
}

/// Runs [`find`] once per document, collecting matches in document order.
///
/// # Example
///
/// ```
/// use yamlnav::document::tree::YamlFile;
/// use yamlnav::query::finder::find_all;
///
/// let file = YamlFile::parse("a: 1\n---\na: 2\n---\nb: 3\n").unwrap();
/// assert_eq!(find_all(&file, "a").len(), 2);
/// ```
pub fn find_all(file: &YamlFile, query: &str) -> Vec<NodeId> {
    file.documents()
        .iter()
        .filter_map(|doc| find(file, *doc, query))
        .collect()
}
