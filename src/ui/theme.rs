use ratatui::style::{Color, Modifier, Style};

/// Styles for every element of the catalog screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Title bar across the top of the screen.
	pub heading: Style,
	/// Search prompt and its border.
	pub prompt: Style,
	/// Section header rows.
	pub section: Style,
	/// Product title on a card.
	pub item_title: Style,
	pub rate: Style,
	/// The "Add to cart" affordance.
	pub button: Style,
	/// Secondary text such as image references and the status line.
	pub muted: Style,
	/// Selected card.
	pub row_highlight: Style,
	pub empty: Style,
}

impl Default for Theme {
	fn default() -> Self {
		FOREST
	}
}

pub const FOREST: Theme = Theme {
	heading: Style::new()
		.fg(Color::White)
		.bg(Color::Rgb(0, 128, 0))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(0, 128, 0)),
	section: Style::new()
		.fg(Color::Black)
		.bg(Color::Rgb(244, 244, 244))
		.add_modifier(Modifier::BOLD),
	item_title: Style::new().fg(Color::Gray).add_modifier(Modifier::BOLD),
	rate: Style::new().fg(Color::Red),
	button: Style::new().fg(Color::White).bg(Color::Rgb(0, 128, 0)),
	muted: Style::new().fg(Color::DarkGray),
	row_highlight: Style::new().bg(Color::Rgb(30, 60, 30)),
	empty: Style::new().fg(Color::DarkGray),
};

pub const SLATE: Theme = Theme {
	heading: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(51, 65, 85))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(148, 163, 184)),
	section: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59))
		.add_modifier(Modifier::BOLD),
	item_title: Style::new()
		.fg(Color::Rgb(203, 213, 225))
		.add_modifier(Modifier::BOLD),
	rate: Style::new().fg(Color::Rgb(251, 146, 60)),
	button: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(148, 163, 184)),
	muted: Style::new().fg(Color::Rgb(100, 116, 139)),
	row_highlight: Style::new().bg(Color::Rgb(51, 65, 85)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
};

pub const LIGHT: Theme = Theme {
	heading: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	section: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(241, 245, 249))
		.add_modifier(Modifier::BOLD),
	item_title: Style::new()
		.fg(Color::Rgb(71, 85, 105))
		.add_modifier(Modifier::BOLD),
	rate: Style::new().fg(Color::Rgb(185, 28, 28)),
	button: Style::new().fg(Color::White).bg(Color::Rgb(0, 102, 153)),
	muted: Style::new().fg(Color::Rgb(100, 100, 100)),
	row_highlight: Style::new().bg(Color::Rgb(200, 200, 200)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
};

const BUILTINS: &[(&str, Theme)] = &[("forest", FOREST), ("slate", SLATE), ("light", LIGHT)];

/// Names of the bundled themes, default first.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILTINS.iter().map(|(name, _)| *name)
}

/// Look up a bundled theme, ignoring case.
pub fn by_name(name: &str) -> Option<Theme> {
	BUILTINS
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name.trim()))
		.map(|(_, theme)| *theme)
}
