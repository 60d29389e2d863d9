//! Input event handler for reading terminal events and applying them.

use std::fs::File;
use std::io::{self, Stdin};

use anyhow::{Context, Result};
use termion::event::{Event, MouseButton, MouseEvent};
use termion::input::{Events, TermRead};
use tracing::trace;

use super::keys::{map_key_event, InputEvent};
use crate::app::AppState;

/// Lines scrolled per mouse wheel tick, in scroll steps.
const WHEEL_STEPS: usize = 3;

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
}

/// Reads terminal events and applies them to the session state.
pub struct InputHandler {
    events: EventSource,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped data.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
        })
    }

    /// Blocks until the next terminal event.
    ///
    /// Returns `None` once the input is closed.
    pub fn next_event(&mut self) -> Result<Option<Event>> {
        let next = match &mut self.events {
            EventSource::Stdin(events) => events.next(),
            EventSource::Tty(events) => events.next(),
        };
        match next {
            Some(event) => Ok(Some(event.context("Failed to read terminal event")?)),
            None => Ok(None),
        }
    }

    /// Applies a terminal event to `state`.
    ///
    /// Returns true if the application should quit.
    ///
    /// # Example
    ///
    /// ```
    /// use termion::event::{Event, Key};
    /// use yamlnav::app::AppState;
    /// use yamlnav::document::tree::YamlFile;
    /// use yamlnav::input::InputHandler;
    /// use yamlnav::theme::Theme;
    ///
    /// let file = YamlFile::parse("a: 1\n").unwrap();
    /// let mut state = AppState::new(file, &Theme::default());
    /// assert!(!InputHandler::handle_event(Event::Key(Key::Char('a')), &mut state));
    /// assert_eq!(state.input(), "a");
    /// assert!(InputHandler::handle_event(Event::Key(Key::Ctrl('c')), &mut state));
    /// ```
    pub fn handle_event(event: Event, state: &mut AppState) -> bool {
        if let Event::Mouse(mouse_event) = event {
            if state.enable_mouse() {
                let lines = state.scroll_step() * WHEEL_STEPS;
                match mouse_event {
                    MouseEvent::Press(MouseButton::WheelUp, _, _) => state.scroll_up(lines),
                    MouseEvent::Press(MouseButton::WheelDown, _, _) => state.scroll_down(lines),
                    _ => {}
                }
            }
            return false;
        }

        let input_event = map_key_event(event);
        trace!(?input_event, "input");

        match input_event {
            InputEvent::Quit => return true,
            InputEvent::ScrollUp => state.scroll_up(state.scroll_step()),
            InputEvent::ScrollDown => state.scroll_down(state.scroll_step()),
            InputEvent::PageUp => state.page_up(),
            InputEvent::PageDown => state.page_down(),
            InputEvent::Navigate => state.navigate(),
            InputEvent::AcceptCompletion => {
                state.accept_completion();
            }
            InputEvent::NextCompletion => state.next_completion(),
            InputEvent::PreviousCompletion => state.previous_completion(),
            InputEvent::ToggleLineNumbers => state.toggle_line_numbers(),
            InputEvent::InsertChar(c) => state.insert_char(c),
            InputEvent::Backspace => state.backspace(),
            InputEvent::Delete => state.delete(),
            InputEvent::CursorLeft => state.move_cursor_left(),
            InputEvent::CursorRight => state.move_cursor_right(),
            InputEvent::CursorHome => state.move_cursor_home(),
            InputEvent::CursorEnd => state.move_cursor_end(),
            InputEvent::Unknown => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::tree::YamlFile;
    use crate::theme::Theme;
    use termion::event::Key;

    fn state(src: &str) -> AppState {
        AppState::new(YamlFile::parse(src).unwrap(), &Theme::default())
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            InputHandler::handle_event(Event::Key(Key::Char(c)), state);
        }
    }

    #[test]
    fn test_type_and_navigate() {
        let mut state = state("a:\n  b: 1\n");
        type_text(&mut state, "a.b");
        assert!(!state.has_matches());
        InputHandler::handle_event(Event::Key(Key::Char('\n')), &mut state);
        assert!(state.has_matches());
        assert_eq!(state.match_counter(), Some((1, 1)));
    }

    #[test]
    fn test_tab_accepts_completion() {
        let mut state = state("alpha:\n  beta: 1\n");
        type_text(&mut state, "alpha.b");
        InputHandler::handle_event(Event::Key(Key::Char('\t')), &mut state);
        assert_eq!(state.input(), "alpha.beta");
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let src: String = (0..30).map(|i| format!("k{i}: {i}\n")).collect();
        let mut state = state(&src);
        let wheel_down = Event::Mouse(MouseEvent::Press(MouseButton::WheelDown, 1, 1));
        InputHandler::handle_event(wheel_down.clone(), &mut state);
        assert_eq!(state.scroll_offset(), 3);

        state.set_enable_mouse(false);
        InputHandler::handle_event(wheel_down, &mut state);
        assert_eq!(state.scroll_offset(), 3);
    }

    #[test]
    fn test_ctrl_l_toggles_line_numbers() {
        let mut state = state("a: 1\n");
        InputHandler::handle_event(Event::Key(Key::Ctrl('l')), &mut state);
        assert!(state.line_numbers());
    }

    #[test]
    fn test_escape_quits() {
        let mut state = state("a: 1\n");
        assert!(InputHandler::handle_event(Event::Key(Key::Esc), &mut state));
    }
}
