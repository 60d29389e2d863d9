//! Query paths: canonicalization, matching and completion.
//!
//! A query path is a dotted list of segments, each one a mapping key or a
//! sequence index: `spec.containers.0.image`. Every node of a
//! [`YamlFile`](crate::document::tree::YamlFile) has a canonical path in the
//! same dialect, derived from its structural path; a node matches a query
//! when the two strings are equal.
//!
//! # Example
//!
//! ```
//! use yamlnav::document::tree::YamlFile;
//! use yamlnav::query::query;
//!
//! let file = YamlFile::parse("a:\n  b: [x, y]\n").unwrap();
//! let result = query(&file, "a.b.1");
//! assert_eq!(result.matches().len(), 1);
//! ```

pub mod ast;
pub mod collector;
pub mod error;
pub mod finder;
pub mod parser;
pub mod path;
pub mod result;
pub mod suggestion;

pub use ast::{QueryPath, QuerySegment};
pub use error::QueryPathError;
pub use parser::Parser;
pub use result::{query, QueryResult};
