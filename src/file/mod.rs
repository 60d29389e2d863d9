//! Reading YAML input from files or standard input.

pub mod loader;
