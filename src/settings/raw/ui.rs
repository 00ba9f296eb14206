use serde::Deserialize;
use woodshop::ui::DEFAULT_TITLE;

use crate::cli::CliArgs;

pub(super) const DEFAULT_THEME: &str = "forest";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) title: String,
	pub(super) initial_query: String,
	pub(super) theme: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let title = self
			.title
			.map(|title| title.trim().to_string())
			.filter(|title| !title.is_empty())
			.unwrap_or_else(|| DEFAULT_TITLE.to_string());
		UiResolution {
			title,
			initial_query: self.initial_query.unwrap_or_default(),
			theme: self.theme.unwrap_or_else(|| DEFAULT_THEME.to_string()),
		}
	}
}
