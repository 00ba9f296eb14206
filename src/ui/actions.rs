use std::ops::ControlFlow;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use super::App;

const PAGE: isize = 5;

impl<'a> App<'a> {
	/// Process a keyboard event. `Break` means the user asked to leave.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> ControlFlow<()> {
		let control = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return ControlFlow::Break(()),
			KeyCode::Char('c') if control => return ControlFlow::Break(()),
			KeyCode::F(5) => self.refresh(),
			KeyCode::Char('r') if control => self.refresh(),
			KeyCode::Char('l') if control => self.logs.toggle(),
			KeyCode::Enter => self.add_to_cart(),
			KeyCode::Up => self.move_selection(-1),
			KeyCode::Down => self.move_selection(1),
			KeyCode::PageUp => self.move_selection(-PAGE),
			KeyCode::PageDown => self.move_selection(PAGE),
			_ => {
				if self.search_input.input(key) {
					self.apply_query();
				}
			}
		}
		ControlFlow::Continue(())
	}

	/// Wheel scrolling moves the selection; scrolling up past the top pulls
	/// the list down and starts a refresh.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::ScrollUp if self.at_top() => self.refresh(),
			MouseEventKind::ScrollUp => self.move_selection(-1),
			MouseEventKind::ScrollDown => self.move_selection(1),
			_ => {}
		}
	}

	/// The cart button does nothing beyond acknowledging the press.
	fn add_to_cart(&self) {
		if let Some(product) = self.selected_product() {
			log::info!("add to cart pressed for {} ({})", product.id, product.title);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use ratatui::crossterm::event::KeyEventKind;
	use woodshop_catalog::{Catalog, ManualClock, Product};

	use super::*;
	use crate::ui::ScreenOptions;

	fn catalog() -> Catalog {
		Catalog::new(vec![
			Product::new("1", "Chairs", "oak-chair.jpg", 120.0),
			Product::new("2", "Dining Table", "table.jpg", 640.0),
		])
	}

	fn app() -> App<'static> {
		App::new(catalog(), ScreenOptions::default())
	}

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn scroll(kind: MouseEventKind) -> MouseEvent {
		MouseEvent {
			kind,
			column: 0,
			row: 0,
			modifiers: KeyModifiers::NONE,
		}
	}

	#[test]
	fn typing_filters_every_keystroke() {
		let mut app = app();
		for ch in "TAB".chars() {
			assert!(app.handle_key(key(KeyCode::Char(ch))).is_continue());
		}
		assert_eq!(app.query(), "TAB");
		assert_eq!(app.screen.state().sections().len(), 1);
		assert_eq!(app.screen.state().sections()[0].title, "Dining Table");
	}

	#[test]
	fn escape_and_ctrl_c_exit() {
		let mut app = app();
		assert!(app.handle_key(key(KeyCode::Esc)).is_break());
		let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
		assert_eq!(ctrl_c.kind, KeyEventKind::Press);
		assert!(app.handle_key(ctrl_c).is_break());
	}

	#[test]
	fn refresh_keys_start_a_refresh() {
		let mut app = app();
		let _ = app.handle_key(key(KeyCode::F(5)));
		assert!(app.is_refreshing());

		let mut app = self::app();
		let _ = app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
		assert!(app.is_refreshing());
		assert_eq!(app.query(), "");
	}

	#[test]
	fn pulling_past_the_top_refreshes() {
		let mut app = app();
		app.handle_mouse(scroll(MouseEventKind::ScrollDown));
		app.handle_mouse(scroll(MouseEventKind::ScrollUp));
		assert!(!app.is_refreshing());
		app.handle_mouse(scroll(MouseEventKind::ScrollUp));
		assert!(app.is_refreshing());
	}

	#[test]
	fn second_pull_restarts_the_refresh_timer() {
		let clock = ManualClock::new();
		let mut app = App::with_clock(catalog(), ScreenOptions::default(), Box::new(clock.clone()));
		app.handle_mouse(scroll(MouseEventKind::ScrollUp));
		assert!(app.is_refreshing());

		clock.advance(Duration::from_millis(1500));
		app.handle_mouse(scroll(MouseEventKind::ScrollUp));
		clock.advance(Duration::from_millis(600));
		app.tick();
		assert!(app.is_refreshing());

		clock.advance(Duration::from_millis(1400));
		app.tick();
		assert!(!app.is_refreshing());
	}

	#[test]
	fn enter_keeps_the_screen_unchanged() {
		let mut app = app();
		let before = app.screen.state().clone();
		assert!(app.handle_key(key(KeyCode::Enter)).is_continue());
		assert_eq!(app.screen.state(), &before);
	}

	#[test]
	fn ctrl_l_toggles_the_log_pane() {
		let mut app = app();
		let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
		let _ = app.handle_key(ctrl_l);
		assert!(app.logs.visible);
		let _ = app.handle_key(ctrl_l);
		assert!(!app.logs.visible);
	}
}
