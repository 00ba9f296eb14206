use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;
use woodshop::{Catalog, RefreshPolicy, ScreenOptions, Theme};

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub catalog_path: Option<PathBuf>,
	pub title: String,
	pub initial_query: String,
	pub theme_name: String,
	pub theme: Theme,
	pub refresh: RefreshPolicy,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	/// Read the configured catalog, or the built-in list when none is set.
	pub fn load_catalog(&self) -> Result<Catalog> {
		match &self.catalog_path {
			Some(path) => Catalog::load(path)
				.with_context(|| format!("unable to use catalog {}", path.display())),
			None => Ok(Catalog::builtin()),
		}
	}

	pub fn screen_options(&self) -> ScreenOptions {
		ScreenOptions {
			title: self.title.clone(),
			initial_query: self.initial_query.clone(),
			theme: self.theme,
			refresh: self.refresh,
			log_level: self.log_level,
		}
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
