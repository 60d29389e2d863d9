//! Color definitions for yamlnav themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used by the renderer and the terminal UI. Colors are organized into
//! three categories: syntax highlighting, match highlighting, and UI elements.

use ratatui::style::Color;

/// Defines all colors used in a yamlnav theme.
///
/// - **Syntax colors**: keys, scalars by type, anchors and aliases, indicators
/// - **Highlight colors**: applied to the tokens of matched nodes
/// - **UI colors**: background, query line, help bar, line-number gutter
///
/// # Examples
///
/// ```
/// use yamlnav::theme::colors::ThemeColors;
/// use ratatui::style::Color;
///
/// let dark = ThemeColors::default_dark();
/// assert_eq!(dark.background, Color::Reset);
/// assert_eq!(dark.highlight_bg, Color::LightYellow);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    // Syntax colors
    /// Color for mapping keys.
    pub key: Color,
    /// Color for string scalars, quoted or plain, and block scalar content.
    pub string: Color,
    /// Color for integer and float scalars.
    pub number: Color,
    /// Color for boolean scalars.
    pub boolean: Color,
    /// Color for null scalars (`null`, `~`).
    pub null: Color,
    /// Color for anchors (`&name`).
    pub anchor: Color,
    /// Color for aliases (`*name`).
    pub alias: Color,
    /// Color for structural indicators (`-`, `:`, `[`, `---`, ...).
    pub indicator: Color,

    // Highlight colors
    /// Foreground of highlighted tokens.
    pub highlight_fg: Color,
    /// Background of highlighted tokens.
    pub highlight_bg: Color,

    // UI colors
    /// Main background color.
    pub background: Color,
    /// Main foreground color, also used for comments and tags.
    pub foreground: Color,
    /// Line-number gutter.
    pub line_number: Color,
    /// Query text when the last navigation found a match.
    pub match_ok: Color,
    /// Query text when the last navigation found nothing.
    pub match_fail: Color,
    /// Ghost text of the current completion.
    pub suggestion: Color,
    /// Help bar text.
    pub help: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// This theme uses ANSI colors so it adapts to the user's terminal
    /// palette. Matches are drawn on a bright yellow background.
    ///
    /// # Color Palette
    ///
    /// - Keys: Light Cyan (ANSI 14)
    /// - Strings: Light Green (ANSI 10)
    /// - Numbers and booleans: Light Magenta (ANSI 13)
    /// - Anchors and aliases: Light Yellow (ANSI 11)
    /// - Null: Dark Gray (ANSI 8)
    /// - Background: Terminal default (Color::Reset)
    ///
    /// # Examples
    ///
    /// ```
    /// use yamlnav::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.key, Color::LightCyan);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            key: Color::LightCyan,        // ANSI 14
            string: Color::LightGreen,    // ANSI 10
            number: Color::LightMagenta,  // ANSI 13
            boolean: Color::LightMagenta, // ANSI 13
            null: Color::DarkGray,        // ANSI 8
            anchor: Color::LightYellow,   // ANSI 11
            alias: Color::LightYellow,    // ANSI 11
            indicator: Color::Gray,       // ANSI 7

            highlight_fg: Color::Black,       // ANSI 0
            highlight_bg: Color::LightYellow, // ANSI 11

            background: Color::Reset,
            foreground: Color::Gray,     // ANSI 7
            line_number: Color::DarkGray, // ANSI 8
            match_ok: Color::LightGreen, // ANSI 10
            match_fail: Color::LightRed, // ANSI 9
            suggestion: Color::DarkGray, // ANSI 8
            help: Color::DarkGray,       // ANSI 8
        }
    }

    /// Returns the default light color scheme.
    ///
    /// A high contrast theme for light terminal backgrounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use yamlnav::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_light();
    /// assert_eq!(colors.background, Color::Rgb(250, 250, 250));
    /// ```
    pub fn default_light() -> Self {
        Self {
            key: Color::Rgb(166, 38, 164),
            string: Color::Rgb(80, 161, 79),
            number: Color::Rgb(152, 104, 1),
            boolean: Color::Rgb(1, 132, 188),
            null: Color::Rgb(160, 160, 160),
            anchor: Color::Rgb(193, 132, 1),
            alias: Color::Rgb(193, 132, 1),
            indicator: Color::Rgb(105, 108, 119),

            highlight_fg: Color::Rgb(56, 58, 66),
            highlight_bg: Color::Rgb(255, 230, 128),

            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            line_number: Color::Rgb(160, 161, 167),
            match_ok: Color::Rgb(80, 161, 79),
            match_fail: Color::Rgb(202, 18, 67),
            suggestion: Color::Rgb(160, 161, 167),
            help: Color::Rgb(105, 108, 119),
        }
    }

    /// Returns the Gruvbox Dark color scheme.
    ///
    /// A retro groove color scheme with warm, earthy tones.
    /// Based on the popular Gruvbox theme by morhetz.
    pub fn gruvbox_dark() -> Self {
        Self {
            key: Color::Rgb(131, 165, 152),    // aqua
            string: Color::Rgb(184, 187, 38),  // green
            number: Color::Rgb(211, 134, 155), // purple
            boolean: Color::Rgb(254, 128, 25), // bright orange
            null: Color::Rgb(146, 131, 116),   // gray
            anchor: Color::Rgb(250, 189, 47),  // yellow
            alias: Color::Rgb(250, 189, 47),   // yellow
            indicator: Color::Rgb(168, 153, 132), // fg4

            highlight_fg: Color::Rgb(40, 40, 40),   // dark bg
            highlight_bg: Color::Rgb(215, 153, 33), // yellow highlight

            background: Color::Rgb(40, 40, 40),     // dark bg
            foreground: Color::Rgb(235, 219, 178),  // light fg
            line_number: Color::Rgb(124, 111, 100), // bg4
            match_ok: Color::Rgb(184, 187, 38),     // green
            match_fail: Color::Rgb(251, 73, 52),    // red
            suggestion: Color::Rgb(124, 111, 100),  // bg4
            help: Color::Rgb(146, 131, 116),        // gray
        }
    }

    /// Returns the Nord color scheme.
    ///
    /// An arctic, north-bluish color palette.
    /// Based on the Nord theme by Arctic Ice Studio.
    pub fn nord() -> Self {
        Self {
            key: Color::Rgb(136, 192, 208),     // frost cyan
            string: Color::Rgb(163, 190, 140),  // aurora green
            number: Color::Rgb(180, 142, 173),  // aurora purple
            boolean: Color::Rgb(180, 142, 173), // aurora purple
            null: Color::Rgb(76, 86, 106),      // polar night gray
            anchor: Color::Rgb(208, 135, 112),  // aurora orange
            alias: Color::Rgb(208, 135, 112),   // aurora orange
            indicator: Color::Rgb(129, 161, 193), // frost blue

            highlight_fg: Color::Rgb(46, 52, 64),    // polar night darkest
            highlight_bg: Color::Rgb(235, 203, 139), // aurora yellow

            background: Color::Rgb(46, 52, 64),    // polar night darkest
            foreground: Color::Rgb(216, 222, 233), // snow storm lightest
            line_number: Color::Rgb(76, 86, 106),  // polar night gray
            match_ok: Color::Rgb(163, 190, 140),   // aurora green
            match_fail: Color::Rgb(191, 97, 106),  // aurora red
            suggestion: Color::Rgb(76, 86, 106),   // polar night gray
            help: Color::Rgb(76, 86, 106),         // polar night gray
        }
    }

    /// Returns the Dracula color scheme.
    ///
    /// A dark theme with vibrant purples and pinks.
    /// Based on the Dracula theme by Zeno Rocha.
    pub fn dracula() -> Self {
        Self {
            key: Color::Rgb(139, 233, 253),     // cyan
            string: Color::Rgb(241, 250, 140),  // yellow
            number: Color::Rgb(189, 147, 249),  // purple
            boolean: Color::Rgb(255, 121, 198), // pink
            null: Color::Rgb(98, 114, 164),     // comment
            anchor: Color::Rgb(255, 184, 108),  // orange
            alias: Color::Rgb(255, 184, 108),   // orange
            indicator: Color::Rgb(248, 248, 242), // foreground

            highlight_fg: Color::Rgb(40, 42, 54),    // background
            highlight_bg: Color::Rgb(80, 250, 123),  // green

            background: Color::Rgb(40, 42, 54),    // background
            foreground: Color::Rgb(248, 248, 242), // foreground
            line_number: Color::Rgb(98, 114, 164), // comment
            match_ok: Color::Rgb(80, 250, 123),    // green
            match_fail: Color::Rgb(255, 85, 85),   // red
            suggestion: Color::Rgb(98, 114, 164),  // comment
            help: Color::Rgb(98, 114, 164),        // comment
        }
    }

    /// Returns the Solarized Dark color scheme.
    ///
    /// A precision color scheme for machines and people.
    /// Based on the Solarized theme by Ethan Schoonover.
    pub fn solarized_dark() -> Self {
        Self {
            key: Color::Rgb(38, 139, 210),    // blue
            string: Color::Rgb(133, 153, 0),  // green
            number: Color::Rgb(211, 54, 130), // magenta
            boolean: Color::Rgb(108, 113, 196), // violet
            null: Color::Rgb(88, 110, 117),   // base01
            anchor: Color::Rgb(203, 75, 22),  // orange
            alias: Color::Rgb(203, 75, 22),   // orange
            indicator: Color::Rgb(147, 161, 161), // base1

            highlight_fg: Color::Rgb(0, 43, 54),     // base03
            highlight_bg: Color::Rgb(181, 137, 0),   // yellow

            background: Color::Rgb(0, 43, 54),     // base03
            foreground: Color::Rgb(131, 148, 150), // base0
            line_number: Color::Rgb(88, 110, 117), // base01
            match_ok: Color::Rgb(133, 153, 0),     // green
            match_fail: Color::Rgb(220, 50, 47),   // red
            suggestion: Color::Rgb(88, 110, 117),  // base01
            help: Color::Rgb(88, 110, 117),        // base01
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dark_uses_terminal_background() {
        let colors = ThemeColors::default_dark();
        assert_eq!(colors.background, Color::Reset);
        assert_ne!(colors.highlight_bg, colors.background);
    }

    #[test]
    fn test_highlight_is_visible_in_every_theme() {
        for colors in [
            ThemeColors::default_dark(),
            ThemeColors::default_light(),
            ThemeColors::gruvbox_dark(),
            ThemeColors::nord(),
            ThemeColors::dracula(),
            ThemeColors::solarized_dark(),
        ] {
            assert_ne!(colors.highlight_bg, colors.background);
            assert_ne!(colors.match_ok, colors.match_fail);
        }
    }
}
