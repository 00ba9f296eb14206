mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use woodshop::ScreenController;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in woodshop::ui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.dump {
		return dump_sections(cli.output, &resolved);
	}

	if !cli.launches_ui() {
		return Ok(());
	}

	let catalog = resolved.load_catalog()?;
	woodshop::run(catalog, resolved.screen_options())
}

/// Print the sections for the configured query without starting the UI.
fn dump_sections(format: OutputFormat, settings: &ResolvedConfig) -> Result<()> {
	let catalog = settings.load_catalog()?;
	let mut screen = ScreenController::new(catalog, settings.refresh);
	screen.on_search_change(settings.initial_query.as_str());
	let state = screen.state();

	match format {
		OutputFormat::Plain => print_plain(state.search_query(), state.sections()),
		OutputFormat::Json => print_json(state.search_query(), state.sections())?,
	}

	Ok(())
}
