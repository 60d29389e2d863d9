//! YAML document model: tokens, nodes and the parsed file.
//!
//! [`lexer`] cuts the source into a lossless [`TokenStream`](token::TokenStream);
//! [`parser`] builds the node arena of a [`YamlFile`](tree::YamlFile) on top
//! of it.

pub mod lexer;
pub mod node;
pub mod parser;
pub mod token;
pub mod tree;
