use clap::{CommandFactory, FromArgMatches};

use super::{CliArgs, OutputFormat};

fn parse(args: &[&str]) -> CliArgs {
	let mut matches = CliArgs::command()
		.try_get_matches_from(args)
		.expect("arguments parse");
	CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
}

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = parse(&["woodshop"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.catalog.is_none());
	assert!(parsed.clear_query_on_refresh.is_none());
	assert!(!parsed.dump);
}

#[test]
fn refresh_flags_parse() {
	let parsed = parse(&[
		"woodshop",
		"--refresh-delay-ms",
		"500",
		"--clear-query-on-refresh",
		"yes",
		"-q",
		"oak",
		"--dump",
		"-o",
		"json",
	]);
	assert_eq!(parsed.refresh_delay_ms, Some(500));
	assert_eq!(parsed.clear_query_on_refresh, Some(true));
	assert_eq!(parsed.initial_query.as_deref(), Some("oak"));
	assert!(parsed.dump);
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn print_config_alone_does_not_launch_the_screen() {
	assert!(parse(&["woodshop"]).launches_ui());
	assert!(!parse(&["woodshop", "--print-config"]).launches_ui());
	assert!(!parse(&["woodshop", "-p", "--dump"]).launches_ui());
	assert!(!parse(&["woodshop", "--dump"]).launches_ui());
}
