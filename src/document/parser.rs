//! Builds a [`YamlFile`] from YAML text.
//!
//! The text is first validated with `yaml-rust2`, so every error reported to
//! the user carries that library's positioned message. The validated text is
//! then tokenized by [`lexer`](super::lexer) and walked by a recursive-descent
//! parser that uses token columns to delimit block collections.
//!
//! Every node gets a structural path while the parser descends. Mapping
//! entries, their keys and their values all share the path `P.key`.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;
use yaml_rust2::YamlLoader;

use super::lexer;
use super::node::{Node, NodeId, NodeKind, PathSegment, StructuralPath};
use super::token::{TokenId, TokenKind, TokenStream};
use super::tree::YamlFile;

/// Errors produced while parsing a YAML stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not valid YAML.
    #[error("invalid YAML: {message}")]
    Invalid { message: String },
    /// Valid YAML whose structure this parser does not understand.
    #[error("unexpected {found} at line {line}, column {column}")]
    Unexpected {
        found: String,
        line: usize,
        column: usize,
    },
}

/// Parses YAML text into a [`YamlFile`].
///
/// # Errors
///
/// Returns [`ParseError::Invalid`] when `yaml-rust2` rejects the text and
/// [`ParseError::Unexpected`] when the token stream has a shape the tree
/// builder cannot place.
///
/// # Example
///
/// ```
/// use yamlnav::document::parser::parse;
///
/// let file = parse("a: [1, 2]\n").unwrap();
/// assert_eq!(file.documents().len(), 1);
/// assert!(parse("a: [1, 2\n").is_err());
/// ```
pub fn parse(source: &str) -> Result<YamlFile, ParseError> {
    YamlLoader::load_from_str(source).map_err(|e| ParseError::Invalid {
        message: e.to_string(),
    })?;

    let tokens = lexer::tokenize(source);
    let (nodes, documents) = TreeBuilder::new(&tokens).build()?;
    debug!(
        tokens = tokens.len(),
        nodes = nodes.len(),
        documents = documents.len(),
        "parsed YAML stream"
    );

    Ok(YamlFile::new(source.to_string(), tokens, nodes, documents))
}

/// Node properties read in front of a node.
#[derive(Default)]
struct Properties {
    tokens: Vec<TokenId>,
    anchor: Option<String>,
}

struct TreeBuilder<'t> {
    tokens: &'t TokenStream,
    /// Tokens that carry structure (comments and directives removed).
    sig: Vec<TokenId>,
    cursor: usize,
    nodes: Vec<Node>,
    anchors: HashMap<String, NodeId>,
}

impl<'t> TreeBuilder<'t> {
    fn new(tokens: &'t TokenStream) -> Self {
        let sig = tokens
            .entries()
            .filter(|(_, t)| !matches!(t.kind, TokenKind::Comment | TokenKind::Directive))
            .map(|(id, _)| id)
            .collect();
        Self {
            tokens,
            sig,
            cursor: 0,
            nodes: Vec::new(),
            anchors: HashMap::new(),
        }
    }

    fn build(mut self) -> Result<(Vec<Node>, Vec<NodeId>), ParseError> {
        let mut documents = Vec::new();
        loop {
            while self.peek_kind() == Some(TokenKind::DocumentEnd) {
                self.bump();
            }
            if self.peek().is_none() {
                break;
            }
            documents.push(self.parse_document()?);
        }
        Ok((self.nodes, documents))
    }

    // -- cursor helpers --

    fn peek(&self) -> Option<TokenId> {
        self.sig.get(self.cursor).copied()
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.kind_at(self.cursor)
    }

    fn kind_at(&self, index: usize) -> Option<TokenKind> {
        self.sig.get(index).map(|id| self.tokens[*id].kind)
    }

    fn bump(&mut self) -> Option<TokenId> {
        let id = self.peek()?;
        self.cursor += 1;
        Some(id)
    }

    fn column(&self, id: TokenId) -> isize {
        self.tokens[id].position.column as isize - 1
    }

    fn line(&self, id: TokenId) -> usize {
        self.tokens[id].position.line
    }

    /// Line on which the last consumed token ends.
    fn last_line(&self) -> usize {
        self.cursor
            .checked_sub(1)
            .map_or(0, |i| self.tokens[self.sig[i]].end_line())
    }

    fn unexpected(&self, id: Option<TokenId>) -> ParseError {
        match id {
            Some(id) => {
                let token = &self.tokens[id];
                ParseError::Unexpected {
                    found: format!("'{}'", token.text().trim_end()),
                    line: token.position.line,
                    column: token.position.column,
                }
            }
            None => ParseError::Unexpected {
                found: "end of input".to_string(),
                line: self.last_line(),
                column: 0,
            },
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn attach(&mut self, id: NodeId, props: Properties) {
        if let Some(name) = &props.anchor {
            self.anchors.insert(name.clone(), id);
        }
        let node = self.node_mut(id);
        let mut tokens = props.tokens;
        tokens.append(&mut node.properties);
        node.properties = tokens;
        node.anchor = props.anchor;
    }

    fn empty_scalar(&mut self, path: StructuralPath, token: TokenId) -> NodeId {
        self.push(Node::new(
            NodeKind::Scalar {
                value: String::new(),
            },
            path,
            token,
        ))
    }

    // -- documents --

    fn parse_document(&mut self) -> Result<NodeId, ParseError> {
        self.anchors.clear();
        let doc = self.push(Node::new(
            NodeKind::Document { body: None },
            StructuralPath::root(),
            TokenId(0),
        ));

        let header = match self.peek_kind() {
            Some(TokenKind::DocumentHeader) => self.bump(),
            _ => None,
        };

        let body = match self.peek_kind() {
            None | Some(TokenKind::DocumentHeader | TokenKind::DocumentEnd) => None,
            Some(_) => {
                let intro = header.or_else(|| self.peek()).unwrap_or(TokenId(0));
                Some(self.parse_block_node(StructuralPath::root(), -1, intro, false)?)
            }
        };

        match self.peek_kind() {
            None | Some(TokenKind::DocumentHeader | TokenKind::DocumentEnd) => {}
            Some(_) => return Err(self.unexpected(self.peek())),
        }

        let token = header
            .or_else(|| body.map(|b| self.nodes[b.0].token))
            .unwrap_or(TokenId(0));
        let node = self.node_mut(doc);
        node.kind = NodeKind::Document { body };
        node.token = token;
        Ok(doc)
    }

    // -- properties --

    fn parse_properties(&mut self) -> Properties {
        let mut props = Properties::default();
        loop {
            match self.peek_kind() {
                Some(TokenKind::Anchor) => {
                    let Some(marker) = self.bump() else { break };
                    props.tokens.push(marker);
                    if let Some(name) = self.adjacent_name(marker) {
                        self.bump();
                        props.tokens.push(name);
                        props.anchor = Some(self.tokens[name].value.clone());
                    }
                }
                Some(TokenKind::Tag) => {
                    if let Some(tag) = self.bump() {
                        props.tokens.push(tag);
                    }
                }
                _ => break,
            }
        }
        props
    }

    /// The name token written directly after an anchor or alias marker.
    fn adjacent_name(&self, marker: TokenId) -> Option<TokenId> {
        let next = self.peek()?;
        let token = &self.tokens[next];
        let adjacent = token.position.offset == self.tokens[marker].position.offset + 1;
        (adjacent && token.kind == TokenKind::String).then_some(next)
    }

    /// Number of significant tokens taken by the properties starting at `index`.
    fn properties_len(&self, mut index: usize) -> usize {
        let start = index;
        loop {
            match self.kind_at(index) {
                Some(TokenKind::Anchor | TokenKind::Alias) => {
                    index += 1;
                    if self.is_adjacent_name(index) {
                        index += 1;
                    }
                }
                Some(TokenKind::Tag) => index += 1,
                _ => return index - start,
            }
        }
    }

    fn is_adjacent_name(&self, index: usize) -> bool {
        match (index.checked_sub(1).and_then(|i| self.sig.get(i)), self.sig.get(index)) {
            (Some(marker), Some(name)) => {
                let name = &self.tokens[*name];
                name.kind == TokenKind::String
                    && name.position.offset == self.tokens[*marker].position.offset + 1
            }
            _ => false,
        }
    }

    /// Whether the tokens at `index` form a single-line node followed by `:`.
    fn implicit_key_at(&self, index: usize) -> bool {
        let mut i = index;
        while matches!(self.kind_at(i), Some(TokenKind::Anchor | TokenKind::Tag)) {
            i += self.properties_len(i).max(1);
        }
        let Some(kind) = self.kind_at(i) else {
            return false;
        };
        match kind {
            k if k.is_scalar() => i += 1,
            TokenKind::Alias => {
                i += 1;
                if self.is_adjacent_name(i) {
                    i += 1;
                }
            }
            TokenKind::SequenceStart | TokenKind::MappingStart => match self.skip_flow(i) {
                Some(end) => i = end,
                None => return false,
            },
            _ => return false,
        }
        let (Some(last), Some(colon)) = (self.sig.get(i - 1), self.sig.get(i)) else {
            return false;
        };
        self.tokens[*colon].kind == TokenKind::MappingValue
            && self.tokens[*last].end_line() == self.line(*colon)
    }

    /// Index just past the flow collection opened at `index`.
    fn skip_flow(&self, index: usize) -> Option<usize> {
        let mut depth = 0usize;
        let mut i = index;
        loop {
            match self.kind_at(i)? {
                TokenKind::SequenceStart | TokenKind::MappingStart => depth += 1,
                TokenKind::SequenceEnd | TokenKind::MappingEnd => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Some(i + 1);
                    }
                }
                _ => {}
            }
            i += 1;
        }
    }

    // -- block context --

    /// Parses the node introduced by `intro` (`---`, `-`, `?` or `:`).
    ///
    /// A node starting on a later line than `intro` must be indented past
    /// `parent_column`; with `indentless` a block sequence may also sit at
    /// exactly `parent_column`. Anything else leaves an empty value.
    fn parse_block_node(
        &mut self,
        path: StructuralPath,
        parent_column: isize,
        intro: TokenId,
        indentless: bool,
    ) -> Result<NodeId, ParseError> {
        let before_props = self.cursor;
        let props = self.parse_properties();
        let props_line = self.last_line();

        let Some(next) = self.peek() else {
            let id = self.empty_scalar(path, intro);
            self.attach(id, props);
            return Ok(id);
        };
        let kind = self.tokens[next].kind;
        let on_new_line = self.line(next) > self.line(intro).max(props_line);
        let column = self.column(next);
        let indented = column > parent_column
            || (indentless && kind == TokenKind::SequenceEntry && column == parent_column);

        let ends_value = matches!(
            kind,
            TokenKind::DocumentHeader
                | TokenKind::DocumentEnd
                | TokenKind::MappingValue
                | TokenKind::CollectEntry
                | TokenKind::SequenceEnd
                | TokenKind::MappingEnd
        );
        if ends_value || (on_new_line && !indented) {
            let id = self.empty_scalar(path, intro);
            self.attach(id, props);
            return Ok(id);
        }

        let id = match kind {
            TokenKind::SequenceEntry => self.parse_block_sequence(path, column)?,
            TokenKind::MappingKey => self.parse_block_mapping(path, column)?,
            _ if self.implicit_key_at(self.cursor) => {
                if !props.tokens.is_empty() && self.line(next) == props_line {
                    // Properties on the key's line belong to the first key.
                    self.cursor = before_props;
                    let key_column = self.column(self.sig[before_props]);
                    return self.parse_block_mapping(path, key_column);
                }
                self.parse_block_mapping(path, column)?
            }
            _ => self.parse_inline_node(path, intro)?,
        };
        self.attach(id, props);
        Ok(id)
    }

    fn parse_block_sequence(
        &mut self,
        path: StructuralPath,
        column: isize,
    ) -> Result<NodeId, ParseError> {
        let first = self.peek().unwrap_or(TokenId(0));
        let seq = self.push(Node::new(
            NodeKind::Sequence { items: Vec::new() },
            path.clone(),
            first,
        ));

        let mut items = Vec::new();
        while let Some(dash) = self.peek() {
            if self.tokens[dash].kind != TokenKind::SequenceEntry || self.column(dash) != column {
                break;
            }
            self.bump();
            let item_path = path.child(PathSegment::Index(items.len()));
            items.push(self.parse_block_node(item_path, column, dash, false)?);
        }

        self.node_mut(seq).kind = NodeKind::Sequence { items };
        Ok(seq)
    }

    fn parse_block_mapping(
        &mut self,
        path: StructuralPath,
        column: isize,
    ) -> Result<NodeId, ParseError> {
        let first = self.peek().unwrap_or(TokenId(0));
        let mapping = self.push(Node::new(
            NodeKind::Mapping {
                entries: Vec::new(),
            },
            path.clone(),
            first,
        ));

        let mut entries = Vec::new();
        while let Some(next) = self.peek() {
            if self.column(next) != column {
                break;
            }
            let entry = match self.tokens[next].kind {
                TokenKind::MappingKey => self.parse_explicit_entry(&path, column)?,
                TokenKind::MappingValue => {
                    let colon = next;
                    self.bump();
                    let entry_path = path.child(PathSegment::Key(String::new()));
                    let key = self.empty_scalar(entry_path.clone(), colon);
                    let value = self.parse_block_node(entry_path.clone(), column, colon, true)?;
                    self.push_entry(key, value, entry_path, colon)
                }
                _ if self.implicit_key_at(self.cursor) => {
                    self.parse_implicit_entry(&path, column)?
                }
                _ => break,
            };
            entries.push(entry);
        }

        let token = entries
            .first()
            .map(|e| match self.nodes[e.0].kind {
                NodeKind::MappingEntry { key, .. } => self.nodes[key.0].token,
                _ => first,
            })
            .unwrap_or(first);
        let node = self.node_mut(mapping);
        node.kind = NodeKind::Mapping { entries };
        node.token = token;
        Ok(mapping)
    }

    fn parse_implicit_entry(
        &mut self,
        path: &StructuralPath,
        column: isize,
    ) -> Result<NodeId, ParseError> {
        let start = self.peek().unwrap_or(TokenId(0));
        let key = self.parse_key(path.clone(), start)?;
        let entry_path = self.entry_path(path, key);

        let colon = match self.peek_kind() {
            Some(TokenKind::MappingValue) => self.bump().unwrap_or(start),
            _ => return Err(self.unexpected(self.peek())),
        };
        let value = self.parse_block_node(entry_path.clone(), column, colon, true)?;
        Ok(self.finish_entry(key, value, entry_path, colon))
    }

    fn parse_explicit_entry(
        &mut self,
        path: &StructuralPath,
        column: isize,
    ) -> Result<NodeId, ParseError> {
        let question = self.bump().unwrap_or(TokenId(0));
        let key = self.parse_block_node(path.clone(), column, question, false)?;
        let entry_path = self.entry_path(path, key);

        let next_is_value = self
            .peek()
            .is_some_and(|n| self.tokens[n].kind == TokenKind::MappingValue && self.column(n) == column);
        let (colon, value) = if next_is_value {
            let colon = self.bump().unwrap_or(question);
            let value = self.parse_block_node(entry_path.clone(), column, colon, true)?;
            (colon, value)
        } else {
            (question, self.empty_scalar(entry_path.clone(), question))
        };
        Ok(self.finish_entry(key, value, entry_path, colon))
    }

    /// Path of the entry whose key is `key`; re-paths the key node to match.
    fn entry_path(&mut self, parent: &StructuralPath, key: NodeId) -> StructuralPath {
        let text = self.key_text(key);
        let entry_path = parent.child(PathSegment::Key(text));
        self.node_mut(key).path = entry_path.clone();
        entry_path
    }

    fn key_text(&self, key: NodeId) -> String {
        self.nodes[key.0].key_text(self.tokens)
    }

    /// Pushes the entry. An entry under a complex key is taken out of path
    /// addressing as a whole, contents of the key included.
    fn finish_entry(
        &mut self,
        key: NodeId,
        value: NodeId,
        path: StructuralPath,
        colon: TokenId,
    ) -> NodeId {
        let entry = self.push_entry(key, value, path, colon);
        if !self.nodes[key.0].is_simple_key() {
            debug!(line = self.tokens[colon].position.line, "complex key, entry has no query path");
            self.seal(entry);
        }
        entry
    }

    fn seal(&mut self, id: NodeId) {
        self.node_mut(id).addressable = false;
        for child in self.nodes[id.0].children() {
            self.seal(child);
        }
    }

    fn push_entry(
        &mut self,
        key: NodeId,
        value: NodeId,
        path: StructuralPath,
        colon: TokenId,
    ) -> NodeId {
        self.push(Node::new(NodeKind::MappingEntry { key, value }, path, colon))
    }

    /// An implicit key: properties then a scalar, alias or flow collection.
    fn parse_key(&mut self, path: StructuralPath, intro: TokenId) -> Result<NodeId, ParseError> {
        let props = self.parse_properties();
        let id = self.parse_inline_node(path, intro)?;
        self.attach(id, props);
        Ok(id)
    }

    /// Scalars, aliases and flow collections, which never span block structure.
    fn parse_inline_node(
        &mut self,
        path: StructuralPath,
        intro: TokenId,
    ) -> Result<NodeId, ParseError> {
        let Some(next) = self.peek() else {
            return Ok(self.empty_scalar(path, intro));
        };
        let token = &self.tokens[next];
        match token.kind {
            TokenKind::SequenceStart => self.parse_flow_sequence(path),
            TokenKind::MappingStart => self.parse_flow_mapping(path),
            TokenKind::Alias => Ok(self.parse_alias(path)),
            TokenKind::Literal | TokenKind::Folded => {
                self.bump();
                let content = match self.peek_kind() {
                    Some(TokenKind::BlockContent) => self.bump(),
                    _ => None,
                };
                let value = content
                    .map(|c| self.tokens[c].value.clone())
                    .unwrap_or_default();
                let id = self.push(Node::new(NodeKind::Scalar { value }, path, next));
                self.node_mut(id).properties.extend(content);
                Ok(id)
            }
            kind if kind.is_scalar() => {
                let value = token.value.clone();
                self.bump();
                Ok(self.push(Node::new(NodeKind::Scalar { value }, path, next)))
            }
            _ => Err(self.unexpected(Some(next))),
        }
    }

    fn parse_alias(&mut self, path: StructuralPath) -> NodeId {
        let marker = self.bump().unwrap_or(TokenId(0));
        let name_token = self.adjacent_name(marker);
        if name_token.is_some() {
            self.bump();
        }
        let name = name_token
            .map(|n| self.tokens[n].value.clone())
            .unwrap_or_default();
        let target = self.anchors.get(&name).copied();

        let mut node = Node::new(NodeKind::Alias { name, target }, path, marker);
        node.properties.extend(name_token);
        self.push(node)
    }

    // -- flow context --

    fn parse_flow_node(
        &mut self,
        path: StructuralPath,
        intro: TokenId,
    ) -> Result<NodeId, ParseError> {
        let props = self.parse_properties();
        let id = match self.peek_kind() {
            None
            | Some(
                TokenKind::CollectEntry
                | TokenKind::MappingValue
                | TokenKind::SequenceEnd
                | TokenKind::MappingEnd,
            ) => {
                let token = props.tokens.last().copied().unwrap_or(intro);
                self.empty_scalar(path, token)
            }
            Some(_) => self.parse_inline_node(path, intro)?,
        };
        self.attach(id, props);
        Ok(id)
    }

    fn parse_flow_sequence(&mut self, path: StructuralPath) -> Result<NodeId, ParseError> {
        let open = self.bump().unwrap_or(TokenId(0));
        let seq = self.push(Node::new(
            NodeKind::Sequence { items: Vec::new() },
            path.clone(),
            open,
        ));

        let mut items = Vec::new();
        loop {
            match self.peek_kind() {
                Some(TokenKind::SequenceEnd) => {
                    self.bump();
                    break;
                }
                Some(TokenKind::CollectEntry) => {
                    self.bump();
                    continue;
                }
                None
                | Some(
                    TokenKind::MappingEnd | TokenKind::DocumentHeader | TokenKind::DocumentEnd,
                ) => return Err(self.unexpected(self.peek())),
                Some(_) => {}
            }

            let item_path = path.child(PathSegment::Index(items.len()));
            let intro = self.peek().unwrap_or(open);
            if self.peek_kind() == Some(TokenKind::MappingKey) {
                self.bump();
            }
            let item = if self.implicit_key_at(self.cursor) {
                self.parse_flow_pair(item_path, intro)?
            } else {
                self.parse_flow_node(item_path, intro)?
            };
            items.push(item);
        }

        self.node_mut(seq).kind = NodeKind::Sequence { items };
        Ok(seq)
    }

    /// A single `key: value` pair inside a flow sequence.
    fn parse_flow_pair(
        &mut self,
        path: StructuralPath,
        intro: TokenId,
    ) -> Result<NodeId, ParseError> {
        let mapping = self.push(Node::new(
            NodeKind::Mapping {
                entries: Vec::new(),
            },
            path.clone(),
            intro,
        ));
        let entry = self.parse_flow_entry(&path, intro)?;
        let key_token = match self.nodes[entry.0].kind {
            NodeKind::MappingEntry { key, .. } => self.nodes[key.0].token,
            _ => intro,
        };
        let node = self.node_mut(mapping);
        node.kind = NodeKind::Mapping {
            entries: vec![entry],
        };
        node.token = key_token;
        Ok(mapping)
    }

    fn parse_flow_entry(
        &mut self,
        path: &StructuralPath,
        intro: TokenId,
    ) -> Result<NodeId, ParseError> {
        let key = self.parse_flow_node(path.clone(), intro)?;
        let entry_path = self.entry_path(path, key);

        if self.peek_kind() != Some(TokenKind::MappingValue) {
            let key_token = self.nodes[key.0].token;
            let value = self.empty_scalar(entry_path.clone(), key_token);
            return Ok(self.finish_entry(key, value, entry_path, key_token));
        }

        let colon = self.bump().unwrap_or(intro);
        let value = self.parse_flow_node(entry_path.clone(), colon)?;
        Ok(self.finish_entry(key, value, entry_path, colon))
    }

    fn parse_flow_mapping(&mut self, path: StructuralPath) -> Result<NodeId, ParseError> {
        let open = self.bump().unwrap_or(TokenId(0));
        let mapping = self.push(Node::new(
            NodeKind::Mapping {
                entries: Vec::new(),
            },
            path.clone(),
            open,
        ));

        let mut entries = Vec::new();
        loop {
            match self.peek_kind() {
                Some(TokenKind::MappingEnd) => {
                    self.bump();
                    break;
                }
                Some(TokenKind::CollectEntry) => {
                    self.bump();
                    continue;
                }
                Some(TokenKind::MappingKey) => {
                    self.bump();
                }
                None
                | Some(
                    TokenKind::SequenceEnd | TokenKind::DocumentHeader | TokenKind::DocumentEnd,
                ) => return Err(self.unexpected(self.peek())),
                Some(_) => {}
            }
            let intro = self.peek().unwrap_or(open);
            entries.push(self.parse_flow_entry(&path, intro)?);
        }

        self.node_mut(mapping).kind = NodeKind::Mapping { entries };
        Ok(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(file: &YamlFile, doc: usize) -> NodeId {
        match file.node(file.documents()[doc]).kind {
            NodeKind::Document { body: Some(b) } => b,
            _ => panic!("document has no body"),
        }
    }

    fn token_text(file: &YamlFile, id: NodeId) -> String {
        file.tokens()[file.node(id).token].text().trim_end().to_string()
    }

    fn find_path<'a>(file: &'a YamlFile, raw: &str, kind: &str) -> Option<(NodeId, &'a Node)> {
        file.nodes()
            .find(|(_, n)| n.path.raw() == raw && n.kind_name() == kind)
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        let err = parse("a: [1, 2\n").unwrap_err();
        assert!(matches!(err, ParseError::Invalid { .. }));
        assert!(err.to_string().starts_with("invalid YAML"));
    }

    #[test]
    fn test_block_mapping_shape() {
        let file = parse("a:\n  b: 1\n  c:\n    - x\n    - y\n").unwrap();
        let root = body(&file, 0);
        let NodeKind::Mapping { entries } = &file.node(root).kind else {
            panic!("expected mapping");
        };
        assert_eq!(entries.len(), 1);
        assert_eq!(token_text(&file, root), "a");
        assert_eq!(token_text(&file, entries[0]), ":");

        let (_, x) = find_path(&file, "$.a.c[0]", "scalar").unwrap();
        assert_eq!(x.kind, NodeKind::Scalar { value: "x".into() });
        let (seq, _) = find_path(&file, "$.a.c", "sequence").unwrap();
        assert_eq!(token_text(&file, seq), "-");
    }

    #[test]
    fn test_entry_key_and_value_share_path() {
        let file = parse("a: 1\n").unwrap();
        let paths: Vec<_> = file
            .nodes()
            .filter(|(_, n)| !matches!(n.kind, NodeKind::Document { .. } | NodeKind::Mapping { .. }))
            .map(|(_, n)| n.path.raw())
            .collect();
        assert_eq!(paths, vec!["$.a", "$.a", "$.a"]);
    }

    #[test]
    fn test_indentless_sequence() {
        let file = parse("items:\n- one\n- two\nnext: 3\n").unwrap();
        assert!(find_path(&file, "$.items[1]", "scalar").is_some());
        assert!(file
            .nodes()
            .any(|(_, n)| n.path.raw() == "$.next" && n.kind == NodeKind::Scalar { value: "3".into() }));
    }

    #[test]
    fn test_empty_value_uses_indicator_token() {
        let file = parse("a:\nb: 2\n").unwrap();
        let (id, _) = file
            .nodes()
            .find(|(_, n)| n.path.raw() == "$.a" && n.kind == NodeKind::Scalar { value: String::new() })
            .unwrap();
        assert_eq!(token_text(&file, id), ":");
    }

    #[test]
    fn test_sequence_of_mappings() {
        let file = parse("- name: a\n  v: 1\n- name: b\n").unwrap();
        assert!(find_path(&file, "$[0].v", "entry").is_some());
        assert!(find_path(&file, "$[1].name", "entry").is_some());
        assert!(find_path(&file, "$[1].v", "entry").is_none());
    }

    #[test]
    fn test_flow_collections() {
        let file = parse("a: [1, {b: 2}, [3]]\nc: {d: e, f: [g]}\n").unwrap();
        assert!(find_path(&file, "$.a[1].b", "entry").is_some());
        assert!(find_path(&file, "$.a[2][0]", "scalar").is_some());
        assert!(find_path(&file, "$.c.f[0]", "scalar").is_some());
        let (map, _) = find_path(&file, "$.c", "mapping").unwrap();
        assert_eq!(token_text(&file, map), "{");
    }

    #[test]
    fn test_flow_pair_in_sequence() {
        let file = parse("[a: 1, b]\n").unwrap();
        let (pair, _) = find_path(&file, "$[0]", "mapping").unwrap();
        assert_eq!(token_text(&file, pair), "a");
        assert!(find_path(&file, "$[0].a", "entry").is_some());
        assert!(find_path(&file, "$[1]", "scalar").is_some());
    }

    #[test]
    fn test_anchor_and_alias() {
        let file = parse("base: &b\n  x: 1\nuse: *b\n").unwrap();
        let (mapping, node) = find_path(&file, "$.base", "mapping").unwrap();
        assert_eq!(node.anchor.as_deref(), Some("b"));
        assert_eq!(node.properties.len(), 2);

        let (alias, alias_node) = find_path(&file, "$.use", "alias").unwrap();
        assert_eq!(
            alias_node.kind,
            NodeKind::Alias {
                name: "b".into(),
                target: Some(mapping)
            }
        );
        assert_eq!(token_text(&file, alias), "*");
        assert_eq!(alias_node.properties.len(), 1);
    }

    #[test]
    fn test_anchor_on_first_key() {
        let file = parse("- &k a: 1\n").unwrap();
        let (_, key) = file
            .nodes()
            .find(|(_, n)| n.path.raw() == "$[0].a" && n.anchor.is_some())
            .unwrap();
        assert_eq!(key.kind, NodeKind::Scalar { value: "a".into() });
    }

    #[test]
    fn test_block_scalar_node() {
        let file = parse("text: |\n  one\n  two\nn: 1\n").unwrap();
        let (id, node) = file
            .nodes()
            .find(|(_, n)| {
                n.path.raw() == "$.text" && matches!(&n.kind, NodeKind::Scalar { value } if value.contains('\n'))
            })
            .unwrap();
        assert_eq!(node.kind, NodeKind::Scalar { value: "one\ntwo\n".into() });
        assert_eq!(token_text(&file, id), "|");
        assert_eq!(node.properties.len(), 1);
    }

    #[test]
    fn test_multiple_documents() {
        let file = parse("a: 1\n---\na: 2\n---\n").unwrap();
        assert_eq!(file.documents().len(), 3);
        let first = file.node(file.documents()[0]);
        assert_eq!(file.tokens()[first.token].text(), "a");
        let second = file.node(file.documents()[1]);
        assert_eq!(file.tokens()[second.token].text().trim_end(), "---");
        assert_eq!(file.node(file.documents()[2]).kind, NodeKind::Document { body: None });
    }

    #[test]
    fn test_explicit_key() {
        let file = parse("? a\n: 1\n? b\n").unwrap();
        assert!(find_path(&file, "$.a", "entry").is_some());
        assert!(find_path(&file, "$.b", "entry").is_some());
    }

    #[test]
    fn test_comments_are_ignored() {
        let file = parse("# top\na: 1 # one\n# between\nb:\n  # inner\n  c: 2\n").unwrap();
        assert!(find_path(&file, "$.b.c", "entry").is_some());
    }

    #[test]
    fn test_scalar_document() {
        let file = parse("--- hello\n").unwrap();
        let root = body(&file, 0);
        assert_eq!(file.node(root).kind, NodeKind::Scalar { value: "hello".into() });
    }
}
