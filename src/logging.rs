//! Route `log` records into an in-memory buffer drawn by the log pane.
//!
//! Writing to stderr would corrupt the alternate screen, so records are held
//! by `tui-logger`, whose own thread moves them into the widget history.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the logger. Later calls only adjust the default level.
pub fn initialize(level: LevelFilter) {
	INIT.call_once(|| {
		// Another logger may already be installed when embedded; keep it.
		let _ = tui_logger::init_logger(LevelFilter::Trace);
	});
	tui_logger::set_default_level(level);
}

/// Parse a level name such as `info` or `debug`.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
	name.trim().parse().ok()
}
