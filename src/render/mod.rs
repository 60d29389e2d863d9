//! Syntax-colored reconstruction of a YAML file with match highlighting.
//!
//! The [`Printer`] walks the token stream once and rebuilds the source text
//! line by line. Each token is styled by its semantic [`Category`] using the
//! default or the highlighted [`RenderProperties`], depending on whether a
//! matched node owns it.
//!
//! # Example
//!
//! ```
//! use yamlnav::document::tree::YamlFile;
//! use yamlnav::render::{Printer, RenderOptions};
//!
//! let file = YamlFile::parse("a:\n  b: 1\n").unwrap();
//! let printer = Printer::default();
//! let rendered = printer.print(&file, "a.b", RenderOptions::default());
//! assert_eq!(rendered.plain(), "a:\n  b: 1");
//! assert_eq!(rendered.matches.len(), 1);
//! ```

pub mod ansi;
pub mod printer;
pub mod properties;

pub use printer::{Printer, RenderOptions, Rendered};
pub use properties::{categorize, Category, RenderFunc, RenderProperties, Transform};
