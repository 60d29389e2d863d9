use ratatui::style::{Color, Modifier};
use yamlnav::render::{Category, RenderProperties};
use yamlnav::theme::{colors::ThemeColors, get_builtin_theme, list_builtin_themes, Theme};

#[test]
fn test_every_listed_theme_resolves() {
    for name in list_builtin_themes() {
        let theme = get_builtin_theme(&name).unwrap();
        assert_eq!(theme.name, name);
    }
}

#[test]
fn test_invalid_theme_returns_none() {
    assert!(get_builtin_theme("nonexistent").is_none());
}

#[test]
fn test_default_theme_is_default_dark() {
    let theme = Theme::default();
    assert_eq!(theme.name, "default-dark");
    assert_eq!(theme.colors, ThemeColors::default_dark());
}

#[test]
fn test_highlighted_properties_use_highlight_colors() {
    let theme = get_builtin_theme("nord").unwrap();
    let highlighted = RenderProperties::highlighted_for(&theme);

    for category in Category::ALL {
        let style = highlighted.get(Some(category)).style_for("key");
        assert_eq!(style.bg, Some(theme.colors.highlight_bg));
        assert_eq!(style.fg, Some(theme.colors.highlight_fg));
    }
}

#[test]
fn test_default_properties_color_keys() {
    let theme = get_builtin_theme("default-dark").unwrap();
    let properties = RenderProperties::default_for(&theme);
    let style = properties.get(Some(Category::MapKey)).style_for("key");

    assert_eq!(style.fg, Some(Color::LightCyan));
    assert!(!style.add_modifier.contains(Modifier::REVERSED));
}
