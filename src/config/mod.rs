//! Configuration system for yamlnav.
//!
//! Settings are read from `~/.config/yamlnav/config.toml`. Every field has a
//! default, so a partial file only overrides what it names. Command-line
//! flags win over the file.
//!
//! # Example
//!
//! ```
//! use yamlnav::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.theme, "default-dark");
//! assert!(!config.line_numbers);
//!
//! let custom: Config = toml::from_str("line_numbers = true").unwrap();
//! assert!(custom.line_numbers);
//! assert_eq!(custom.scroll_step, 1);
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

/// Configuration for the yamlnav application.
///
/// # Fields
///
/// * `theme` - Color scheme name (default: "default-dark")
/// * `line_numbers` - Show the line-number gutter at startup (default: false)
/// * `scroll_step` - Lines moved per Up/Down key or wheel tick (default: 1)
/// * `enable_mouse` - Enable mouse wheel scrolling (default: true)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Color scheme name
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Show line numbers at startup
    #[serde(default)]
    pub line_numbers: bool,

    /// Lines per scroll step
    #[serde(default = "default_scroll_step")]
    pub scroll_step: usize,

    /// Enable mouse wheel scrolling
    #[serde(default = "default_enable_mouse")]
    pub enable_mouse: bool,
}

fn default_theme() -> String {
    crate::theme::DEFAULT_THEME.to_string()
}

fn default_scroll_step() -> usize {
    1
}

fn default_enable_mouse() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            line_numbers: false,
            scroll_step: default_scroll_step(),
            enable_mouse: default_enable_mouse(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yamlnav/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yamlnav");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't
    /// be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "invalid config file, using defaults");
                Self::default()
            }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable config file, using defaults");
                Self::default()
            }
        }
    }
}
