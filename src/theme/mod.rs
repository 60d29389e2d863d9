//! Theme system for yamlnav.
//!
//! This module provides the theme infrastructure for yamlnav, including:
//! - Color definitions ([`colors`] module)
//! - Theme data structure ([`Theme`])
//! - Built-in theme access ([`get_builtin_theme`])
//!
//! A theme parameterizes both the render properties used to color the
//! document and the widgets around it.
//!
//! # Built-in Themes
//!
//! - `"default-dark"`: ANSI colors for dark terminals
//! - `"default-light"`: A light theme for well-lit environments
//! - `"gruvbox-dark"`: Retro groove color scheme with warm, earthy tones
//! - `"nord"`: Arctic, north-bluish color palette
//! - `"dracula"`: Dark theme with vibrant purples and pinks
//! - `"solarized-dark"`: Precision color scheme for machines and people
//!
//! # Examples
//!
//! ```
//! use yamlnav::theme::get_builtin_theme;
//!
//! let theme = get_builtin_theme("default-dark").unwrap();
//! assert_eq!(theme.name, "default-dark");
//! ```

pub mod colors;

use colors::ThemeColors;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "default-dark";

/// A color theme for the yamlnav terminal UI.
///
/// Each theme has a name and a set of colors defined by [`ThemeColors`].
/// Themes can be loaded from the built-in set using [`get_builtin_theme`].
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// The name of the theme (e.g., "default-dark").
    pub name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors::default_dark(),
        }
    }
}

/// Returns a built-in theme by name.
///
/// # Returns
///
/// - `Some(Theme)` if the theme name is recognized
/// - `None` if the theme name is not found
///
/// # Examples
///
/// ```
/// use yamlnav::theme::get_builtin_theme;
///
/// assert!(get_builtin_theme("nord").is_some());
/// assert!(get_builtin_theme("nonexistent").is_none());
/// ```
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    let colors = match name {
        "default-dark" => ThemeColors::default_dark(),
        "default-light" => ThemeColors::default_light(),
        "gruvbox-dark" => ThemeColors::gruvbox_dark(),
        "nord" => ThemeColors::nord(),
        "dracula" => ThemeColors::dracula(),
        "solarized-dark" => ThemeColors::solarized_dark(),
        _ => return None,
    };
    Some(Theme {
        name: name.to_string(),
        colors,
    })
}

/// Returns a sorted list of all available built-in theme names.
///
/// ```
/// use yamlnav::theme::list_builtin_themes;
///
/// let themes = list_builtin_themes();
/// assert!(themes.contains(&"default-dark".to_string()));
/// ```
pub fn list_builtin_themes() -> Vec<String> {
    let mut themes = vec![
        "default-dark".to_string(),
        "default-light".to_string(),
        "dracula".to_string(),
        "gruvbox-dark".to_string(),
        "nord".to_string(),
        "solarized-dark".to_string(),
    ];
    themes.sort();
    themes
}
