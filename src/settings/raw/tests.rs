use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use woodshop::ui::theme;

use super::RawConfig;
use crate::cli::CliArgs;

fn cli(args: &[&str]) -> CliArgs {
	let mut full = vec!["woodshop", "--no-config"];
	full.extend_from_slice(args);
	CliArgs::parse_from(full)
}

fn from_toml(toml: &str) -> RawConfig {
	config::Config::builder()
		.add_source(config::File::from_str(toml, config::FileFormat::Toml))
		.build()
		.unwrap()
		.try_deserialize()
		.unwrap()
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = cli(&[
		"--catalog",
		"/tmp/catalog.json",
		"--title",
		"Pine",
		"--query",
		"bed",
		"--theme",
		"slate",
		"--refresh-delay-ms",
		"750",
		"--clear-query-on-refresh",
		"true",
		"--log-level",
		"debug",
	]);

	let mut config = from_toml(
		r#"
		[ui]
		title = "Oak"
		theme = "light"

		[refresh]
		delay_ms = 3000
		"#,
	);
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).unwrap();

	assert_eq!(resolved.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
	assert_eq!(resolved.title, "Pine");
	assert_eq!(resolved.initial_query, "bed");
	assert_eq!(resolved.theme, theme::SLATE);
	assert_eq!(resolved.refresh.delay, Duration::from_millis(750));
	assert!(resolved.refresh.clear_query);
	assert_eq!(resolved.log_level, LevelFilter::Debug);
}

#[test]
fn file_values_apply_without_flags() {
	let cli = cli(&[]);
	let mut config = from_toml(
		r#"
		[ui]
		title = "Oak Corner"
		initial_query = "chair"

		[refresh]
		clear_query = true
		"#,
	);
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).unwrap();

	assert_eq!(resolved.title, "Oak Corner");
	assert_eq!(resolved.initial_query, "chair");
	assert!(resolved.refresh.clear_query);
	assert_eq!(resolved.refresh.delay, Duration::from_secs(2));
}

#[test]
fn defaults_use_wood_furniture_heading_and_two_second_refresh() {
	let cli = cli(&[]);
	let resolved = RawConfig::default().resolve(&cli).unwrap();
	assert_eq!(resolved.title, "Wood Furniture");
	assert_eq!(resolved.initial_query, "");
	assert_eq!(resolved.theme_name, "forest");
	assert_eq!(resolved.refresh.delay, Duration::from_secs(2));
	assert!(!resolved.refresh.clear_query);
	assert_eq!(resolved.log_level, LevelFilter::Info);
}

#[test]
fn unknown_theme_is_rejected_with_its_origin() {
	let cli = cli(&["--theme", "neon"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.theme"));
	assert!(message.contains("CLI flag `--theme`"));
	assert!(message.contains("value: neon"));
}

#[test]
fn zero_delay_from_file_is_rejected() {
	let cli = cli(&[]);
	let config = from_toml("[refresh]\ndelay_ms = 0\n");
	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("refresh.delay_ms"));
	assert!(message.contains("configuration key"));
}
