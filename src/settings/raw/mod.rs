use std::env;
use std::time::Duration;

use anyhow::{Error, Result};
use serde::Deserialize;
use woodshop::RefreshPolicy;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, validation};

mod catalog;
mod refresh;
mod ui;

use catalog::CatalogSection;
use refresh::{LoggingSection, RefreshSection};
use ui::UiSection;

const DEFAULT_REFRESH_DELAY_MS: u64 = 2000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	ui: UiSection,
	refresh: RefreshSection,
	logging: LoggingSection,
}

impl RawConfig {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.catalog.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.refresh.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Validate values and fill defaults.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			refresh_delay: detect_source(
				cli.refresh_delay_ms.is_some(),
				self.refresh.delay_ms.is_some(),
				"WOODSHOP__REFRESH__DELAY_MS",
				"--refresh-delay-ms",
				"refresh.delay_ms",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"WOODSHOP__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"WOODSHOP__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let delay_ms = self.refresh.delay_ms.unwrap_or(DEFAULT_REFRESH_DELAY_MS);
		validation::validate_delay(delay_ms, &sources).map_err(Error::new)?;
		let refresh = RefreshPolicy {
			delay: Duration::from_millis(delay_ms),
			clear_query: self.refresh.clear_query.unwrap_or(false),
		};

		let ui = self.ui.finalize();
		let theme = validation::resolve_theme(&ui.theme, &sources).map_err(Error::new)?;

		let level_name = self
			.logging
			.level
			.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
		let log_level = validation::resolve_level(&level_name, &sources).map_err(Error::new)?;

		Ok(ResolvedConfig {
			catalog_path: self.catalog.resolve(),
			title: ui.title,
			initial_query: ui.initial_query,
			theme_name: ui.theme,
			theme,
			refresh,
			log_level,
		})
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
