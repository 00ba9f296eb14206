use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout, Rect},
	text::{Line, Span, Text},
	widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthStr;
use woodshop_catalog::{Product, Section};

use super::App;
use super::app::ListRow;
use super::theme::Theme;

const HEADING_HEIGHT: u16 = 3;
const SEARCH_HEIGHT: u16 = 3;
const LOG_HEIGHT: u16 = 8;
const MENU_GLYPH: &str = "≡";
const CART_LABEL: &str = "[ Add to cart ]";

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let mut constraints = vec![
			Constraint::Length(HEADING_HEIGHT),
			Constraint::Length(SEARCH_HEIGHT),
			Constraint::Min(1),
			Constraint::Length(1),
		];
		if self.logs.visible {
			constraints.push(Constraint::Length(LOG_HEIGHT));
		}
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints(constraints)
			.split(frame.area());

		self.render_heading(frame, layout[0]);
		self.render_search(frame, layout[1]);
		self.render_sections(frame, layout[2]);
		self.render_status(frame, layout[3]);
		if self.logs.visible {
			self.logs.render(frame, layout[4], &self.theme);
		}
	}

	fn render_heading(&self, frame: &mut Frame, area: Rect) {
		let line = Line::from(vec![
			Span::raw(format!("  {MENU_GLYPH}  ")),
			Span::raw(self.title.as_str()),
		]);
		let heading = Paragraph::new(vec![Line::default(), line])
			.style(self.theme.heading)
			.alignment(Alignment::Left);
		frame.render_widget(heading, area);
	}

	fn render_search(&self, frame: &mut Frame, area: Rect) {
		let block = Block::default()
			.borders(Borders::ALL)
			.title(" Search ")
			.border_style(self.theme.prompt);
		let inner = block.inner(area);
		frame.render_widget(block, area);
		frame.render_widget(self.search_input.widget(), inner);
	}

	fn render_sections(&mut self, frame: &mut Frame, area: Rect) {
		let sections = self.screen.state().sections();
		if sections.is_empty() {
			let empty = Paragraph::new("No results")
				.alignment(Alignment::Center)
				.style(self.theme.empty);
			frame.render_widget(Clear, area);
			frame.render_widget(empty, area);
			return;
		}

		let items: Vec<ListItem> = self
			.rows()
			.into_iter()
			.map(|row| row_item(row, sections, &self.theme, area.width))
			.collect();
		let list = List::new(items).highlight_style(self.theme.row_highlight);
		frame.render_stateful_widget(list, area, &mut self.list_state);
	}

	fn render_status(&self, frame: &mut Frame, area: Rect) {
		let state = self.screen.state();
		let counts = format!(
			"{} of {} products",
			state.visible_count(),
			self.screen.product_count()
		);
		let mut line = Line::default();
		if state.refreshing() {
			let spinner = Throbber::default()
				.style(self.theme.muted)
				.throbber_style(self.theme.muted);
			line.spans.push(spinner.to_symbol_span(&self.throbber_state));
			line.spans
				.push(Span::styled(format!("Refreshing… {counts}"), self.theme.muted));
		} else {
			line.spans.push(Span::styled(
				format!("{counts} • F5 refresh • Ctrl+L log • Esc quit"),
				self.theme.muted,
			));
		}
		frame.render_widget(Paragraph::new(line), area);
	}
}

fn row_item<'a>(row: ListRow, sections: &'a [Section], theme: &Theme, width: u16) -> ListItem<'a> {
	match row {
		ListRow::Header { section } => section_header(&sections[section], theme, width),
		ListRow::Item { section, item } => product_card(&sections[section].items[item], theme),
	}
}

/// Full-width header line so the background band spans the list.
fn section_header<'a>(section: &'a Section, theme: &Theme, width: u16) -> ListItem<'a> {
	let label = format!(" {} ({})", section.title, section.items.len());
	let padding = usize::from(width).saturating_sub(label.width());
	let line = Line::from(format!("{label}{}", " ".repeat(padding)));
	ListItem::new(line).style(theme.section)
}

fn product_card<'a>(product: &'a Product, theme: &Theme) -> ListItem<'a> {
	let text = Text::from(vec![
		Line::from(vec![
			Span::raw("   "),
			Span::styled(product.title.as_str(), theme.item_title),
			Span::raw("  "),
			Span::styled(product.rate.to_string(), theme.rate),
		]),
		Line::from(vec![
			Span::raw("   "),
			Span::styled(product.image_uri.as_str(), theme.muted),
		]),
		Line::from(vec![Span::raw("   "), Span::styled(CART_LABEL, theme.button)]),
		Line::default(),
	]);
	ListItem::new(text)
}
