//! State of one interactive session.
//!
//! [`AppState`] owns the parsed file, the query line, the last navigation
//! result and the rendered viewport text. Every change to what is shown goes
//! through [`AppState::navigate`] or [`AppState::toggle_line_numbers`], which
//! re-render the whole file.

use tracing::{debug, info};

use crate::document::tree::YamlFile;
use crate::query::suggestion::{complete, suggestions};
use crate::query::{query, QueryResult};
use crate::render::{Printer, RenderOptions, Rendered};
use crate::theme::Theme;

/// Everything the interactive view needs between two key presses.
#[derive(Debug, Clone)]
pub struct AppState {
    file: YamlFile,
    printer: Printer,
    suggestions: Vec<String>,

    input: String,
    /// Cursor position in characters.
    cursor: usize,
    /// Selected entry among the completions of `input`.
    completion: usize,

    /// Path of the last navigation, `None` before the first one.
    navigated: Option<String>,
    result: QueryResult,
    match_index: Option<usize>,
    rendered: Rendered,

    line_numbers: bool,
    scroll_offset: usize,
    viewport_height: usize,
    scroll_step: usize,
    enable_mouse: bool,
}

impl AppState {
    /// Creates the session state and runs the initial, empty navigation.
    pub fn new(file: YamlFile, theme: &Theme) -> Self {
        let suggestions = suggestions(&file);
        debug!(count = suggestions.len(), "built suggestion index");

        let mut state = Self {
            file,
            printer: Printer::from_theme(theme),
            suggestions,
            input: String::new(),
            cursor: 0,
            completion: 0,
            navigated: None,
            result: QueryResult::default(),
            match_index: None,
            rendered: Rendered::default(),
            line_numbers: false,
            scroll_offset: 0,
            viewport_height: 20,
            scroll_step: 1,
            enable_mouse: true,
        };
        state.navigate();
        state
    }

    pub fn file(&self) -> &YamlFile {
        &self.file
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    // -- query line --

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Cursor position in characters.
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Replaces the query text and puts the cursor at its end.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.cursor = self.input.chars().count();
        self.completion = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map_or(self.input.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
        self.completion = 0;
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.input.remove(at);
        self.completion = 0;
    }

    /// Deletes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.input.chars().count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.input.remove(at);
        self.completion = 0;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.input.chars().count());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.input.chars().count();
    }

    // -- completion --

    /// Suggestions that extend the current input.
    pub fn completions(&self) -> Vec<&str> {
        complete(&self.suggestions, &self.input)
    }

    /// The completion Tab would accept.
    pub fn current_completion(&self) -> Option<&str> {
        let completions = self.completions();
        if completions.is_empty() {
            return None;
        }
        Some(completions[self.completion % completions.len()])
    }

    /// Replaces the input with the current completion.
    pub fn accept_completion(&mut self) -> bool {
        match self.current_completion().map(str::to_string) {
            Some(completion) => {
                self.set_input(&completion);
                true
            }
            None => false,
        }
    }

    pub fn next_completion(&mut self) {
        let count = self.completions().len();
        if count > 0 {
            self.completion = (self.completion % count + 1) % count;
        }
    }

    pub fn previous_completion(&mut self) {
        let count = self.completions().len();
        if count > 0 {
            self.completion = (self.completion % count + count - 1) % count;
        }
    }

    // -- navigation --

    /// Navigates to the path in the query line.
    ///
    /// Repeating the last navigated path cycles to its next match; any other
    /// path is queried afresh and its first match is focused.
    pub fn navigate(&mut self) {
        if self.navigated.as_deref() == Some(self.input.as_str()) {
            self.next_match();
            return;
        }

        self.result = query(&self.file, &self.input);
        self.navigated = Some(self.input.clone());
        self.match_index = None;
        info!(
            path = %self.input,
            matches = self.result.matches().len(),
            "navigated"
        );
        self.rerender();
        self.next_match();
    }

    /// Focuses the next match, wrapping around, and scrolls it into the
    /// middle of the viewport.
    pub fn next_match(&mut self) {
        let count = self.result.matches().len();
        if count == 0 {
            return;
        }
        let index = self.match_index.map_or(0, |i| (i + 1) % count);
        self.match_index = Some(index);

        let line = self.file.line_of(self.result.matches()[index]);
        self.scroll_offset = line.saturating_sub(self.viewport_height / 2);
        self.clamp_scroll();
    }

    pub fn navigated_path(&self) -> Option<&str> {
        self.navigated.as_deref()
    }

    pub fn result(&self) -> &QueryResult {
        &self.result
    }

    pub fn has_matches(&self) -> bool {
        !self.result.is_empty()
    }

    /// Focused match as `(position, total)`, counting from 1.
    pub fn match_counter(&self) -> Option<(usize, usize)> {
        self.match_index
            .map(|i| (i + 1, self.result.matches().len()))
    }

    // -- rendering --

    fn rerender(&mut self) {
        let options = RenderOptions {
            line_numbers: self.line_numbers,
        };
        self.rendered = self.printer.render(&self.file, &self.result, options);
        self.clamp_scroll();
    }

    pub fn rendered(&self) -> &Rendered {
        &self.rendered
    }

    pub fn line_numbers(&self) -> bool {
        self.line_numbers
    }

    pub fn set_line_numbers(&mut self, enabled: bool) {
        if self.line_numbers != enabled {
            self.line_numbers = enabled;
            self.rerender();
        }
    }

    pub fn toggle_line_numbers(&mut self) {
        self.set_line_numbers(!self.line_numbers);
    }

    // -- scrolling --

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height.max(1);
    }

    pub fn scroll_step(&self) -> usize {
        self.scroll_step
    }

    pub fn set_scroll_step(&mut self, step: usize) {
        self.scroll_step = step.max(1);
    }

    pub fn enable_mouse(&self) -> bool {
        self.enable_mouse
    }

    pub fn set_enable_mouse(&mut self, enabled: bool) {
        self.enable_mouse = enabled;
    }

    fn max_scroll(&self) -> usize {
        self.rendered.line_count().saturating_sub(1)
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(self.max_scroll());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height);
    }

    // -- exit --

    /// Text printed after the session ends: the navigated path followed by
    /// the source of every match, or `None` if nothing was found.
    pub fn output(&self) -> Option<String> {
        let path = self.navigated.as_deref().filter(|p| !p.is_empty())?;
        if self.result.is_empty() {
            return None;
        }
        let excerpts: Vec<String> = (0..self.result.matches().len())
            .map(|i| self.file.excerpt(self.result.tokens_of(i)))
            .collect();
        Some(format!("{}\n\n{}\n", path, excerpts.join("\n---\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(src: &str) -> AppState {
        AppState::new(YamlFile::parse(src).unwrap(), &Theme::default())
    }

    #[test]
    fn test_initial_navigation_is_empty() {
        let state = state("a: 1\n");
        assert_eq!(state.navigated_path(), Some(""));
        assert!(!state.has_matches());
        assert_eq!(state.match_counter(), None);
        assert_eq!(state.output(), None);
        assert_eq!(state.rendered().plain(), "a: 1");
    }

    #[test]
    fn test_editing_keeps_cursor_in_bounds() {
        let mut state = state("a: 1\n");
        state.insert_char('a');
        state.insert_char('c');
        state.move_cursor_left();
        state.insert_char('b');
        assert_eq!(state.input(), "abc");
        assert_eq!(state.cursor_position(), 2);

        state.backspace();
        assert_eq!(state.input(), "ac");
        state.move_cursor_home();
        state.backspace();
        state.delete();
        assert_eq!(state.input(), "c");
        state.move_cursor_end();
        state.move_cursor_right();
        state.delete();
        assert_eq!(state.cursor_position(), 1);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = state("é: 1\n");
        state.insert_char('é');
        state.insert_char('x');
        state.backspace();
        assert_eq!(state.input(), "é");
    }

    #[test]
    fn test_navigate_and_cycle() {
        let mut state = state("a: 1\n---\na: 2\n");
        state.set_input("a");
        state.navigate();
        assert_eq!(state.match_counter(), Some((1, 2)));
        state.navigate();
        assert_eq!(state.match_counter(), Some((2, 2)));
        state.navigate();
        assert_eq!(state.match_counter(), Some((1, 2)));
    }

    #[test]
    fn test_changed_input_requeries() {
        let mut state = state("a: 1\nb: 2\n");
        state.set_input("a");
        state.navigate();
        assert!(state.has_matches());
        state.set_input("zzz");
        state.navigate();
        assert!(!state.has_matches());
        assert_eq!(state.match_counter(), None);
    }

    #[test]
    fn test_scroll_centers_match() {
        let src: String = (0..100).map(|i| format!("k{i}: {i}\n")).collect();
        let mut state = state(&src);
        state.set_viewport_height(20);
        state.set_input("k50");
        state.navigate();
        assert_eq!(state.scroll_offset(), 51 - 10);

        state.set_input("k3");
        state.navigate();
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = state("a: 1\nb: 2\nc: 3\n");
        state.scroll_down(10);
        assert_eq!(state.scroll_offset(), 2);
        state.scroll_up(1);
        assert_eq!(state.scroll_offset(), 1);
        state.page_up();
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn test_completion_cycle_and_accept() {
        let mut state = state("alpha:\n  x: 1\nalso: 2\n");
        state.set_input("al");
        assert_eq!(state.completions(), vec!["alpha", "alpha.x", "also"]);
        assert_eq!(state.current_completion(), Some("alpha"));
        state.next_completion();
        assert_eq!(state.current_completion(), Some("alpha.x"));
        state.previous_completion();
        state.previous_completion();
        assert_eq!(state.current_completion(), Some("also"));
        assert!(state.accept_completion());
        assert_eq!(state.input(), "also");
        assert!(!state.accept_completion());
    }

    #[test]
    fn test_toggle_line_numbers_rerenders() {
        let mut state = state("a: 1\n");
        state.toggle_line_numbers();
        assert!(state.line_numbers());
        assert_eq!(state.rendered().plain(), "1 │ a: 1");
        state.toggle_line_numbers();
        assert_eq!(state.rendered().plain(), "a: 1");
    }

    #[test]
    fn test_output_joins_matches() {
        let mut state = state("a:\n  b: 1\n---\na: 2\n");
        state.set_input("a");
        state.navigate();
        assert_eq!(
            state.output().as_deref(),
            Some("a\n\na:\n  b: 1\n---\na: 2\n")
        );
    }
}
