use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Single-line search field.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_placeholder_text("Search");
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the contents, leaving the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		let placeholder = self.textarea.placeholder_text().to_string();
		let style = self.textarea.style();
		let mut textarea = TextArea::new(vec![text.to_string()]);
		textarea.set_placeholder_text(placeholder);
		textarea.set_style(style);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_newline(&key) || matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

fn inserts_newline(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_reports_changes() {
		let mut input = SearchInput::new("");
		assert!(input.input(press(KeyCode::Char('o'))));
		assert!(input.input(press(KeyCode::Char('a'))));
		assert_eq!(input.text(), "oa");
		assert!(input.input(press(KeyCode::Backspace)));
		assert_eq!(input.text(), "o");
	}

	#[test]
	fn enter_never_splits_the_line() {
		let mut input = SearchInput::new("oak");
		assert!(!input.input(press(KeyCode::Enter)));
		assert_eq!(input.text(), "oak");
	}

	#[test]
	fn tab_leaves_the_query_alone() {
		let mut input = SearchInput::new("oak");
		assert!(!input.input(press(KeyCode::Tab)));
		assert!(!input.input(press(KeyCode::BackTab)));
		assert_eq!(input.text(), "oak");
	}

	#[test]
	fn set_text_replaces_contents() {
		let mut input = SearchInput::new("oak");
		input.set_text("");
		assert_eq!(input.text(), "");
		assert!(input.input(press(KeyCode::Char('x'))));
		assert_eq!(input.text(), "x");
	}
}
