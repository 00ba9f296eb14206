use log::LevelFilter;
use woodshop_catalog::RefreshPolicy;

use super::theme::Theme;

pub const DEFAULT_TITLE: &str = "Wood Furniture";

/// Presentation settings for a screen session.
#[derive(Debug, Clone)]
pub struct ScreenOptions {
	pub title: String,
	pub initial_query: String,
	pub theme: Theme,
	pub refresh: RefreshPolicy,
	pub log_level: LevelFilter,
}

impl Default for ScreenOptions {
	fn default() -> Self {
		Self {
			title: DEFAULT_TITLE.to_string(),
			initial_query: String::new(),
			theme: Theme::default(),
			refresh: RefreshPolicy::default(),
			log_level: LevelFilter::Info,
		}
	}
}
