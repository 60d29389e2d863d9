//! Nodes of the parsed document tree.
//!
//! Nodes live in an arena owned by [`YamlFile`](super::tree::YamlFile) and
//! refer to each other by [`NodeId`]. Every node records the structural path
//! from the root of its document, the token that defines it, and any property
//! tokens (anchor, tag) written in front of it.
//!
//! # Example
//!
//! ```
//! use yamlnav::document::node::{PathSegment, StructuralPath};
//!
//! let path = StructuralPath::root()
//!     .child(PathSegment::Key("a".to_string()))
//!     .child(PathSegment::Index(0));
//! assert_eq!(path.raw(), "$.a[0]");
//! ```

use super::token::{TokenId, TokenStream};

/// Index of a node inside its file's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// One step of a structural path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Mapping key
    Key(String),
    /// Sequence index
    Index(usize),
}

/// Path from a document's root to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StructuralPath {
    segments: Vec<PathSegment>,
}

impl StructuralPath {
    /// The empty path of a document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns this path extended by one segment.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Bracket notation: `$` root marker, `.key` for keys, `[N]` for indices.
    pub fn raw(&self) -> String {
        let mut out = String::from("$");
        for segment in &self.segments {
            match segment {
                PathSegment::Key(key) => {
                    out.push('.');
                    out.push_str(key);
                }
                PathSegment::Index(index) => {
                    out.push('[');
                    out.push_str(&index.to_string());
                    out.push(']');
                }
            }
        }
        out
    }
}

/// Variant-specific shape of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// One document of the stream; `body` is `None` for an empty document.
    Document { body: Option<NodeId> },
    /// Block or flow mapping, entries in declaration order.
    Mapping { entries: Vec<NodeId> },
    /// A `key: value` pair.
    MappingEntry { key: NodeId, value: NodeId },
    /// Block or flow sequence.
    Sequence { items: Vec<NodeId> },
    /// Any scalar, including the implicit null of an empty value.
    Scalar { value: String },
    /// `*name`; `target` is the most recent node anchored with `name`.
    Alias { name: String, target: Option<NodeId> },
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub path: StructuralPath,
    /// The token the node starts at and is positioned by.
    pub token: TokenId,
    /// Anchor marker and name, tag, or an alias's name token.
    pub properties: Vec<TokenId>,
    /// Anchor name declared on this node, if any.
    pub anchor: Option<String>,
    /// False for nodes under an entry whose key is a collection or a
    /// multi-line scalar. No query path names them.
    pub addressable: bool,
}

impl Node {
    pub fn new(kind: NodeKind, path: StructuralPath, token: TokenId) -> Self {
        Self {
            kind,
            path,
            token,
            properties: Vec::new(),
            anchor: None,
            addressable: true,
        }
    }

    /// Whether this node, used as a key, yields a single path segment: a
    /// scalar on one line or an alias.
    pub fn is_simple_key(&self) -> bool {
        match &self.kind {
            NodeKind::Scalar { value } => !value.contains('\n'),
            NodeKind::Alias { .. } => true,
            _ => false,
        }
    }

    /// Short name of the variant, used in logs and the status line.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Document { .. } => "document",
            NodeKind::Mapping { .. } => "mapping",
            NodeKind::MappingEntry { .. } => "entry",
            NodeKind::Sequence { .. } => "sequence",
            NodeKind::Scalar { .. } => "scalar",
            NodeKind::Alias { .. } => "alias",
        }
    }

    /// Text this node contributes to a path segment when used as a key.
    pub fn key_text(&self, tokens: &TokenStream) -> String {
        match &self.kind {
            NodeKind::Scalar { value } => value.clone(),
            NodeKind::Alias { name, .. } => format!("*{name}"),
            _ => tokens[self.token].text().trim_end().to_string(),
        }
    }

    /// Child nodes in traversal order: a mapping's entries, an entry's key
    /// then value, a sequence's items, a document's body.
    pub fn children(&self) -> Vec<NodeId> {
        match &self.kind {
            NodeKind::Document { body } => body.iter().copied().collect(),
            NodeKind::Mapping { entries } => entries.clone(),
            NodeKind::MappingEntry { key, value } => vec![*key, *value],
            NodeKind::Sequence { items } => items.clone(),
            NodeKind::Scalar { .. } | NodeKind::Alias { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path() {
        let path = StructuralPath::root();
        assert!(path.is_root());
        assert_eq!(path.raw(), "$");
    }

    #[test]
    fn test_nested_path() {
        let path = StructuralPath::root()
            .child(PathSegment::Key("a".to_string()))
            .child(PathSegment::Key("b".to_string()))
            .child(PathSegment::Index(0))
            .child(PathSegment::Key("c".to_string()));
        assert_eq!(path.raw(), "$.a.b[0].c");
        assert_eq!(path.segments().len(), 4);
    }

    #[test]
    fn test_children_order() {
        let entry = Node::new(
            NodeKind::MappingEntry {
                key: NodeId(1),
                value: NodeId(2),
            },
            StructuralPath::root(),
            TokenId(0),
        );
        assert_eq!(entry.children(), vec![NodeId(1), NodeId(2)]);
        assert_eq!(entry.kind_name(), "entry");

        let empty_doc = Node::new(NodeKind::Document { body: None }, StructuralPath::root(), TokenId(0));
        assert!(empty_doc.children().is_empty());
    }
}
