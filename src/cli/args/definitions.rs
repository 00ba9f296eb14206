use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `woodshop` binary.
#[derive(Parser, Debug)]
#[command(
	name = "woodshop",
	version,
	long_version = long_version(),
	about = "Browse the wood furniture catalog",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "WOODSHOP_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "PATH",
		help = "Read products from a JSON catalog (default: built-in list)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the heading text (default: Wood Furniture)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: forest)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "refresh-delay-ms",
		value_name = "MS",
		help = "Duration of the simulated refresh (default: 2000)"
	)]
	pub(crate) refresh_delay_ms: Option<u64>,
	#[arg(
		long = "clear-query-on-refresh",
		value_parser = BoolishValueParser::new(),
		help = "Reset the search text when a refresh completes (default: disabled)"
	)]
	pub(crate) clear_query_on_refresh: Option<bool>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level shown in the log pane (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration and exit, or before --dump output (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'd',
		long = "dump",
		help = "Print the grouped sections for the query and exit (default: disabled)"
	)]
	pub(crate) dump: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how --dump prints sections"
	)]
	pub(crate) output: OutputFormat,
}

impl CliArgs {
	/// Whether the interactive screen should start after the one-shot flags.
	pub(crate) fn launches_ui(&self) -> bool {
		!(self.print_config || self.dump)
	}
}
