//! yamlnav - a terminal YAML navigator.
//!
//! A YAML file is parsed into a lossless token stream and a node tree.
//! Typing a dot-separated path such as `spec.containers.0.image` finds the
//! nodes at that path in every document, and the file is redrawn with the
//! tokens of those nodes highlighted in place.
//!
//! ```
//! use yamlnav::document::tree::YamlFile;
//! use yamlnav::query::query;
//!
//! let file = YamlFile::parse("spec:\n  replicas: 3\n").unwrap();
//! let result = query(&file, "spec.replicas");
//! assert_eq!(result.matches().len(), 1);
//! ```

pub mod app;
pub mod config;
pub mod document;
pub mod file;
pub mod input;
pub mod query;
pub mod render;
pub mod theme;
pub mod ui;
