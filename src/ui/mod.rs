//! UI module for the yamlnav terminal interface.
//!
//! The screen is split into three areas:
//! - Viewport (top): the highlighted YAML text
//! - Query line (middle): the path being typed, with completion and counter
//! - Help bar (bottom): key bindings

pub mod help_bar;
pub mod query_line;
pub mod viewport;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::app::AppState;
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// # Example
///
/// ```
/// use ratatui::backend::TestBackend;
/// use ratatui::Terminal;
/// use yamlnav::app::AppState;
/// use yamlnav::document::tree::YamlFile;
/// use yamlnav::theme::Theme;
/// use yamlnav::ui::UI;
///
/// let theme = Theme::default();
/// let mut state = AppState::new(YamlFile::parse("a: 1\n").unwrap(), &theme);
/// let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
/// UI::new(theme).render(&mut terminal, &mut state).unwrap();
/// ```
pub struct UI {
    theme: Theme,
}

impl UI {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Draws one frame.
    ///
    /// The viewport height of `state` is updated from the layout first, so
    /// the next navigation centers its match in the visible area.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(&self, terminal: &mut Terminal<B>, state: &mut AppState) -> Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Viewport
                    Constraint::Length(1), // Query line
                    Constraint::Length(1), // Help bar
                ])
                .split(f.area());

            state.set_viewport_height(chunks[0].height as usize);

            viewport::render_viewport(f, chunks[0], state, &self.theme.colors);
            query_line::render_query_line(f, chunks[1], state, &self.theme.colors);
            help_bar::render_help_bar(f, chunks[2], &self.theme.colors);
        })?;

        Ok(())
    }
}
