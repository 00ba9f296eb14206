use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use clap::Parser;

	use super::*;

	#[test]
	fn explicit_config_file_is_merged() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("woodshop.toml");
		std::fs::write(
			&path,
			"[ui]\ntitle = \"Cedar Loft\"\n\n[refresh]\ndelay_ms = 1500\n",
		)
		.unwrap();

		let cli = CliArgs::parse_from([
			"woodshop",
			"--no-config",
			"--config",
			path.to_str().unwrap(),
		]);
		let resolved = load(&cli).unwrap();
		assert_eq!(resolved.title, "Cedar Loft");
		assert_eq!(resolved.refresh.delay, Duration::from_millis(1500));
	}

	#[test]
	fn missing_explicit_config_file_fails() {
		let cli = CliArgs::parse_from([
			"woodshop",
			"--no-config",
			"--config",
			"/definitely/missing/woodshop.toml",
		]);
		assert!(load(&cli).is_err());
	}
}
