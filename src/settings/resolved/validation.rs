use log::LevelFilter;
use woodshop::Theme;
use woodshop::logging;
use woodshop::ui::theme;

use super::{ConfigError, ConfigSources};

const MAX_REFRESH_DELAY_MS: u64 = 60_000;

pub(crate) fn validate_delay(delay_ms: u64, sources: &ConfigSources) -> Result<(), ConfigError> {
	if delay_ms == 0 || delay_ms > MAX_REFRESH_DELAY_MS {
		return Err(ConfigError::invalid(
			"refresh.delay_ms",
			delay_ms.to_string(),
			sources.source_for_refresh_delay(),
			format!("must be between 1 and {MAX_REFRESH_DELAY_MS}"),
		));
	}
	Ok(())
}

pub(crate) fn resolve_theme(name: &str, sources: &ConfigSources) -> Result<Theme, ConfigError> {
	theme::by_name(name).ok_or_else(|| {
		let known: Vec<_> = theme::names().collect();
		ConfigError::invalid(
			"ui.theme",
			name,
			sources.source_for_theme(),
			format!("expected one of {}", known.join(", ")),
		)
	})
}

pub(crate) fn resolve_level(name: &str, sources: &ConfigSources) -> Result<LevelFilter, ConfigError> {
	logging::parse_level(name).ok_or_else(|| {
		ConfigError::invalid(
			"logging.level",
			name,
			sources.source_for_log_level(),
			"expected off, error, warn, info, debug or trace",
		)
	})
}
