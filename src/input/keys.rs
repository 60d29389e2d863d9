//! Keyboard event mapping and input event types.

use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Leave the session (Ctrl-C, Esc)
    Quit,
    /// Scroll the viewport up one step
    ScrollUp,
    /// Scroll the viewport down one step
    ScrollDown,
    /// Scroll up by a page (PageUp)
    PageUp,
    /// Scroll down by a page (PageDown)
    PageDown,
    /// Navigate to the typed path, or cycle to its next match (Enter)
    Navigate,
    /// Replace the input with the current completion (Tab)
    AcceptCompletion,
    /// Select the next completion (Ctrl-N)
    NextCompletion,
    /// Select the previous completion (Ctrl-P)
    PreviousCompletion,
    /// Show or hide the line-number gutter (Ctrl-L)
    ToggleLineNumbers,
    /// Type a character into the query line
    InsertChar(char),
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character under the cursor
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Unknown or unmapped key
    Unknown,
}

/// Maps a termion Event to an InputEvent.
///
/// The query line always has focus, so every printable character is typed
/// into it and navigation lives on control and special keys.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use yamlnav::input::keys::{map_key_event, InputEvent};
///
/// assert_eq!(map_key_event(Event::Key(Key::Char('\n'))), InputEvent::Navigate);
/// assert_eq!(map_key_event(Event::Key(Key::Char('q'))), InputEvent::InsertChar('q'));
/// ```
pub fn map_key_event(event: Event) -> InputEvent {
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    match key {
        Key::Ctrl('c') | Key::Esc => InputEvent::Quit,
        Key::Ctrl('n') => InputEvent::NextCompletion,
        Key::Ctrl('p') => InputEvent::PreviousCompletion,
        Key::Ctrl('l') => InputEvent::ToggleLineNumbers,
        Key::Ctrl('a') => InputEvent::CursorHome,
        Key::Ctrl('e') => InputEvent::CursorEnd,
        Key::Up => InputEvent::ScrollUp,
        Key::Down => InputEvent::ScrollDown,
        Key::PageUp => InputEvent::PageUp,
        Key::PageDown => InputEvent::PageDown,
        Key::Left => InputEvent::CursorLeft,
        Key::Right => InputEvent::CursorRight,
        Key::Home => InputEvent::CursorHome,
        Key::End => InputEvent::CursorEnd,
        Key::Backspace => InputEvent::Backspace,
        Key::Delete => InputEvent::Delete,
        Key::Char('\n') => InputEvent::Navigate,
        Key::Char('\t') => InputEvent::AcceptCompletion,
        Key::Char(c) if !c.is_control() => InputEvent::InsertChar(c),
        _ => InputEvent::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Key::Ctrl('c'), InputEvent::Quit)]
    #[case(Key::Esc, InputEvent::Quit)]
    #[case(Key::Up, InputEvent::ScrollUp)]
    #[case(Key::Down, InputEvent::ScrollDown)]
    #[case(Key::PageUp, InputEvent::PageUp)]
    #[case(Key::PageDown, InputEvent::PageDown)]
    #[case(Key::Char('\n'), InputEvent::Navigate)]
    #[case(Key::Char('\t'), InputEvent::AcceptCompletion)]
    #[case(Key::Ctrl('n'), InputEvent::NextCompletion)]
    #[case(Key::Ctrl('p'), InputEvent::PreviousCompletion)]
    #[case(Key::Ctrl('l'), InputEvent::ToggleLineNumbers)]
    #[case(Key::Char('.'), InputEvent::InsertChar('.'))]
    #[case(Key::Backspace, InputEvent::Backspace)]
    #[case(Key::Delete, InputEvent::Delete)]
    #[case(Key::Home, InputEvent::CursorHome)]
    #[case(Key::F(5), InputEvent::Unknown)]
    fn test_key_mapping(#[case] key: Key, #[case] expected: InputEvent) {
        assert_eq!(map_key_event(Event::Key(key)), expected);
    }

    #[test]
    fn test_non_key_event_is_unknown() {
        assert_eq!(
            map_key_event(Event::Unsupported(vec![0x1b])),
            InputEvent::Unknown
        );
    }
}
