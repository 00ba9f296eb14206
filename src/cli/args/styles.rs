use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use woodshop::app_dirs;

/// Version banner that also lists the directories in use.
pub(super) fn long_version() -> &'static str {
	let mut details = format!("woodshop {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	for (label, dir) in [
		("config", app_dirs::get_config_dir()),
		("data", app_dirs::get_data_dir()),
		("cache", app_dirs::get_cache_dir()),
	] {
		let dir = match dir {
			Ok(path) => path.display().to_string(),
			Err(err) => format!("unavailable ({err})"),
		};
		let _ = writeln!(details, "{label} directory: {dir}");
	}

	Box::leak(details.into_boxed_str())
}

pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
