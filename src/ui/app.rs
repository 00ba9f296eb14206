//! State container for the terminal front-end.
//!
//! [`App`] pairs the [`ScreenController`] with the widgets that present it:
//! the search field, list selection, spinner and log pane.

use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;
use woodshop_catalog::{Catalog, Clock, Product, ScreenController, Section, SystemClock};

use super::config::ScreenOptions;
use super::input::SearchInput;
use super::logs::LogPane;
use super::theme::Theme;

/// One visual row of the sectioned list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListRow {
	Header { section: usize },
	Item { section: usize, item: usize },
}

impl ListRow {
	pub(crate) fn is_item(self) -> bool {
		matches!(self, Self::Item { .. })
	}
}

/// Flatten sections into header and item rows in display order.
pub(crate) fn list_rows(sections: &[Section]) -> Vec<ListRow> {
	let mut rows = Vec::new();
	for (section_index, section) in sections.iter().enumerate() {
		rows.push(ListRow::Header {
			section: section_index,
		});
		rows.extend((0..section.items.len()).map(|item| ListRow::Item {
			section: section_index,
			item,
		}));
	}
	rows
}

pub struct App<'a> {
	pub(crate) screen: ScreenController<Box<dyn Clock>>,
	pub(crate) search_input: SearchInput<'a>,
	pub(crate) list_state: ListState,
	pub(crate) title: String,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) logs: LogPane,
}

impl<'a> App<'a> {
	/// Mount the screen using the wall clock.
	pub fn new(catalog: Catalog, options: ScreenOptions) -> Self {
		Self::with_clock(catalog, options, Box::new(SystemClock))
	}

	pub fn with_clock(catalog: Catalog, options: ScreenOptions, clock: Box<dyn Clock>) -> Self {
		crate::logging::initialize(options.log_level);
		let screen = ScreenController::with_clock(catalog, options.refresh, clock);
		let mut search_input = SearchInput::new(options.initial_query.clone());
		search_input.set_style(options.theme.prompt);

		let mut app = Self {
			screen,
			search_input,
			list_state: ListState::default(),
			title: options.title,
			theme: options.theme,
			throbber_state: ThrobberState::default(),
			logs: LogPane::new(options.log_level),
		};
		if !options.initial_query.is_empty() {
			app.screen.on_search_change(options.initial_query);
		}
		app.reset_selection();
		log::info!(
			"mounted with {} products in {} sections",
			app.screen.product_count(),
			app.screen.state().sections().len()
		);
		app
	}

	/// Advance timers and background bookkeeping for one frame.
	pub fn tick(&mut self) {
		if self.screen.state().refreshing() {
			self.throbber_state.calc_next();
		}
		if self.screen.tick() {
			if self.search_input.text() != self.screen.state().search_query() {
				let query = self.screen.state().search_query().to_string();
				self.search_input.set_text(&query);
			}
			self.reset_selection();
		}
	}

	pub(crate) fn apply_query(&mut self) {
		let query = self.search_input.text().to_string();
		self.screen.on_search_change(query);
		self.reset_selection();
	}

	pub(crate) fn refresh(&mut self) {
		self.screen.on_refresh();
	}

	pub(crate) fn rows(&self) -> Vec<ListRow> {
		list_rows(self.screen.state().sections())
	}

	/// Select the first item row, or nothing when the list is empty.
	pub(crate) fn reset_selection(&mut self) {
		let first = self.rows().iter().position(|row| row.is_item());
		self.list_state.select(first);
		*self.list_state.offset_mut() = 0;
	}

	/// Move the selection by `delta` item rows, skipping headers.
	pub(crate) fn move_selection(&mut self, delta: isize) {
		let items: Vec<usize> = self
			.rows()
			.iter()
			.enumerate()
			.filter(|(_, row)| row.is_item())
			.map(|(index, _)| index)
			.collect();
		if items.is_empty() {
			self.list_state.select(None);
			return;
		}
		let current = self
			.list_state
			.selected()
			.and_then(|selected| items.iter().position(|row| *row == selected))
			.unwrap_or(0);
		let target = current
			.saturating_add_signed(delta)
			.min(items.len() - 1);
		self.list_state.select(Some(items[target]));
	}

	/// Whether the first item is selected, i.e. the list is scrolled to the top.
	pub(crate) fn at_top(&self) -> bool {
		let first = self.rows().iter().position(|row| row.is_item());
		match self.list_state.selected() {
			Some(selected) => Some(selected) == first,
			None => true,
		}
	}

	pub(crate) fn selected_product(&self) -> Option<&Product> {
		let selected = self.list_state.selected()?;
		let row = *self.rows().get(selected)?;
		match row {
			ListRow::Item { section, item } => self
				.screen
				.state()
				.sections()
				.get(section)?
				.items
				.get(item),
			ListRow::Header { .. } => None,
		}
	}

	pub fn query(&self) -> &str {
		self.screen.state().search_query()
	}

	pub fn is_refreshing(&self) -> bool {
		self.screen.state().refreshing()
	}
}

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.screen.unmount();
	}
}
