//! Gathers the tokens a matched node owns.

use indexmap::IndexSet;

use crate::document::node::NodeId;
use crate::document::token::TokenId;
use crate::document::tree::YamlFile;

/// Collects the defining token of `id`, then its property tokens, then the
/// tokens of its children in traversal order.
///
/// Punctuation that belongs to the parent context (the `-` in front of a
/// sequence item, for example) is not part of the result.
///
/// # Example
///
/// ```
/// use yamlnav::document::tree::YamlFile;
/// use yamlnav::query::{collector::collect, finder::find_all};
///
/// let file = YamlFile::parse("a: [1, 2]\n").unwrap();
/// let entry = find_all(&file, "a")[0];
/// let texts: Vec<_> = collect(&file, entry)
///     .iter()
///     .map(|t| file.tokens()[*t].text().to_string())
///     .collect();
/// assert_eq!(texts, vec![":", "a", "[", "1", "2"]);
/// ```
pub fn collect(file: &YamlFile, id: NodeId) -> IndexSet<TokenId> {
    let mut tokens = IndexSet::new();
    collect_into(file, id, &mut tokens);
    tokens
}

fn collect_into(file: &YamlFile, id: NodeId, tokens: &mut IndexSet<TokenId>) {
    let node = file.node(id);
    tokens.insert(node.token);
    tokens.extend(node.properties.iter().copied());
    for child in node.children() {
        collect_into(file, child, tokens);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::NodeKind;
    use crate::query::finder::find_all;

    fn texts(file: &YamlFile, tokens: &IndexSet<TokenId>) -> Vec<String> {
        tokens
            .iter()
            .map(|t| file.tokens()[*t].text().trim_end().to_string())
            .collect()
    }

    #[test]
    fn test_always_contains_defining_token() {
        let file = YamlFile::parse("a:\n  b: 1\n  c: [x]\n").unwrap();
        for (id, node) in file.nodes() {
            assert!(collect(&file, id).contains(&node.token));
        }
    }

    #[test]
    fn test_mapping_is_union_of_entries() {
        let file = YamlFile::parse("a:\n  b: 1\n  c:\n    - x\n    - y\n").unwrap();
        let (mapping, node) = file
            .nodes()
            .find(|(_, n)| matches!(n.kind, NodeKind::Mapping { .. }) && !n.path.is_root())
            .unwrap();
        let NodeKind::Mapping { entries } = &node.kind else {
            unreachable!()
        };

        let mut expected = IndexSet::new();
        expected.insert(node.token);
        for entry in entries {
            expected.extend(collect(&file, *entry));
        }
        assert_eq!(collect(&file, mapping), expected);
    }

    #[test]
    fn test_sequence_item_excludes_dash() {
        let file = YamlFile::parse("a:\n  - x\n  - y\n").unwrap();
        let item = find_all(&file, "a.0")[0];
        assert_eq!(texts(&file, &collect(&file, item)), vec!["x"]);
    }

    #[test]
    fn test_anchor_and_alias_tokens() {
        let file = YamlFile::parse("a: &n 1\nb: *n\n").unwrap();
        let a = find_all(&file, "a")[0];
        assert_eq!(texts(&file, &collect(&file, a)), vec![":", "a", "1", "&", "n"]);
        let b = find_all(&file, "b")[0];
        assert_eq!(texts(&file, &collect(&file, b)), vec![":", "b", "*", "n"]);
    }

    #[test]
    fn test_block_scalar_content() {
        let file = YamlFile::parse("t: |\n  one\n  two\n").unwrap();
        let t = find_all(&file, "t")[0];
        assert_eq!(texts(&file, &collect(&file, t)), vec![":", "t", "|", "one\n  two"]);
    }
}
