use std::path::PathBuf;

use serde::Deserialize;
use woodshop::app_dirs;

use crate::cli::CliArgs;

const DEFAULT_CATALOG_FILE: &str = "catalog.json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) path: Option<PathBuf>,
}

impl CatalogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalog.clone() {
			self.path = Some(path);
		}
	}

	/// Explicit path, else `catalog.json` in the data directory when present.
	pub(super) fn resolve(self) -> Option<PathBuf> {
		self.path.or_else(|| {
			let candidate = app_dirs::get_data_dir().ok()?.join(DEFAULT_CATALOG_FILE);
			candidate.is_file().then_some(candidate)
		})
	}
}
