use serde::Deserialize;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RefreshSection {
	pub(super) delay_ms: Option<u64>,
	pub(super) clear_query: Option<bool>,
}

impl RefreshSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(delay) = cli.refresh_delay_ms {
			self.delay_ms = Some(delay);
		}
		if let Some(clear) = cli.clear_query_on_refresh {
			self.clear_query = Some(clear);
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}
}
