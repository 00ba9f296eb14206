use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	match &config.catalog_path {
		Some(path) => {
			let _ = writeln!(out, "  Catalog: {}", path.display());
		}
		None => {
			let _ = writeln!(out, "  Catalog: (built-in)");
		}
	}
	let _ = writeln!(out, "  Title: {}", config.title);
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	let _ = writeln!(out, "  Theme: {}", config.theme_name);
	let _ = writeln!(
		out,
		"  Refresh delay: {} ms",
		config.refresh.delay.as_millis()
	);
	let _ = writeln!(
		out,
		"  Clear query on refresh: {}",
		bool_to_word(config.refresh.clear_query)
	);
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use log::LevelFilter;
	use woodshop::{RefreshPolicy, Theme};

	use super::*;

	#[test]
	fn summary_lists_every_setting() {
		let config = ResolvedConfig {
			catalog_path: Some(PathBuf::from("/srv/catalog.json")),
			title: "Wood Furniture".into(),
			initial_query: "oak".into(),
			theme_name: "forest".into(),
			theme: Theme::default(),
			refresh: RefreshPolicy {
				delay: Duration::from_millis(2000),
				clear_query: false,
			},
			log_level: LevelFilter::Info,
		};

		insta::assert_snapshot!(format_summary(&config), @r"
		Effective configuration:
		  Catalog: /srv/catalog.json
		  Title: Wood Furniture
		  Initial query: oak
		  Theme: forest
		  Refresh delay: 2000 ms
		  Clear query on refresh: no
		  Log level: INFO
		");
	}
}
