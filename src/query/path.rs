//! Canonical query paths of tree nodes.
//!
//! Raw structural paths use bracket notation (`$.a.b[0].c`). The canonical
//! form drops the `$` root marker and the leading dot and writes indices as
//! plain segments (`a.b.0.c`), which is exactly the dialect users type.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::node::NodeId;
use crate::document::tree::YamlFile;

static INDEX_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d+)\]").expect("index segment pattern"));

/// Converts a raw structural path to query-path form.
///
/// Raw paths that do not start with `$` are malformed and yield `""`, as does
/// the root path itself. The empty string never matches a query.
///
/// # Example
///
/// ```
/// use yamlnav::query::path::canonicalize;
///
/// assert_eq!(canonicalize("$.a.b[0].c"), "a.b.0.c");
/// assert_eq!(canonicalize("$[1][2]"), "1.2");
/// assert_eq!(canonicalize("$"), "");
/// assert_eq!(canonicalize("a.b"), "");
/// ```
pub fn canonicalize(raw: &str) -> String {
    let Some(rest) = raw.strip_prefix('$') else {
        return String::new();
    };
    let dotted = INDEX_SEGMENT.replace_all(rest, ".$1");
    dotted.strip_prefix('.').unwrap_or(&dotted).to_string()
}

/// Canonicalizes the raw path of a mapping whose last segment is the
/// dangling key `last_key` of its final entry, removing that segment.
///
/// Only the known key is removed, so a key containing dots is never cut at
/// the wrong place.
///
/// ```
/// use yamlnav::query::path::canonicalize_mapping;
///
/// assert_eq!(canonicalize_mapping("$.a.c", "c"), "a");
/// assert_eq!(canonicalize_mapping("$.a.x.y", "x.y"), "a");
/// assert_eq!(canonicalize_mapping("$.only", "only"), "");
/// ```
pub fn canonicalize_mapping(raw: &str, last_key: &str) -> String {
    let path = canonicalize(raw);
    let key = canonicalize_key(last_key);

    match path.strip_suffix(key.as_str()) {
        Some("") => String::new(),
        Some(parent) => match parent.strip_suffix('.') {
            Some(parent) => parent.to_string(),
            None => path,
        },
        None => path,
    }
}

fn canonicalize_key(key: &str) -> String {
    INDEX_SEGMENT.replace_all(key, ".$1").into_owned()
}

/// Canonical path of a node in `file`.
///
/// Nodes that are not addressable, such as the contents of a complex key,
/// get `""` and so never match.
pub fn canonical_path(file: &YamlFile, id: NodeId) -> String {
    if !file.node(id).addressable {
        return String::new();
    }
    let raw = file.raw_path(id);
    match file.trailing_key(id) {
        Some(last_key) => canonicalize_mapping(&raw, &last_key),
        None => canonicalize(&raw),
    }
}
