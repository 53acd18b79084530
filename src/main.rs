//! citysort command line interface
//!
//! Sorts the world cities dataset by one column with a chosen algorithm,
//! reports the timing and verifies the result, or benchmarks every
//! algorithm with `--performance-test`.

use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use std::process;

use citysort::{
    config::{RunConfig, RunConfigBuilder, SortField, DEFAULT_DATASET},
    error::{CitySortError, CitySortResult},
    run,
};

fn main() {
    let matches = build_cli().get_matches();

    let config = match parse_config_from_matches(&matches) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    init_logging(config.debug);

    match run(config) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => fail(e),
    }
}

fn fail(e: CitySortError) -> ! {
    eprintln!("citysort: {}", e);
    process::exit(e.exit_code());
}

/// Warnings by default, everything with `--debug`; `RUST_LOG` overrides both
fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn build_cli() -> Command {
    Command::new("citysort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("citysort -a <algo> -k <key> [-r] [-n N] [-f FILE]\n       citysort --performance-test [-f FILE]")
        .about("Sort world city records with a choice of sorting algorithm")
        .long_about("Sort world city records by one column with a choice of sorting algorithm.\n\nThe sort is timed and its output verified; a verification failure is fatal.")

        .arg(Arg::new("algorithm")
            .short('a')
            .long("algorithm")
            .help("Sorting algorithm: bubble|insertion|merge|quick|heap|std")
            .value_name("ALGO")
            .required_unless_present("performance-test"))
        .arg(Arg::new("key")
            .short('k')
            .long("key")
            .help("Sorting key (column)")
            .value_name("KEY")
            .value_parser(SortField::ALL.map(|field| field.as_str()))
            .required_unless_present("performance-test"))
        .arg(Arg::new("reverse")
            .short('r')
            .long("reverse")
            .help("Reverse sort order (descending)")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("limit")
            .short('n')
            .long("limit")
            .help("Print only the first N rows (N > 0)")
            .value_name("N")
            .allow_hyphen_values(true))
        .arg(Arg::new("file")
            .short('f')
            .long("file")
            .help("CSV dataset to read")
            .value_name("FILE")
            .default_value(DEFAULT_DATASET))
        .arg(Arg::new("performance-test")
            .short('P')
            .long("performance-test")
            .help("Benchmark every algorithm; ignores every other selection flag")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("debug")
            .long("debug")
            .help("Log diagnostics (skipped rows, timings) to stderr")
            .action(ArgAction::SetTrue))
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> CitySortResult<RunConfig> {
    let mut builder = RunConfigBuilder::new();

    if let Some(algorithm) = matches.get_one::<String>("algorithm") {
        builder = builder.algorithm(algorithm);
    }
    if let Some(key) = matches.get_one::<String>("key") {
        builder = builder.field(key.parse()?);
    }
    if matches.get_flag("reverse") {
        builder = builder.reverse();
    }
    if let Some(limit) = matches.get_one::<String>("limit") {
        builder = builder.limit(parse_limit(limit)?);
    }
    if let Some(file) = matches.get_one::<String>("file") {
        builder = builder.dataset(file);
    }
    if matches.get_flag("performance-test") {
        builder = builder.performance_test();
    }
    if matches.get_flag("debug") {
        builder = builder.debug();
    }

    builder.build()
}

/// Row limits must be positive integers
fn parse_limit(value: &str) -> CitySortResult<usize> {
    match value.parse::<usize>() {
        Ok(rows) if rows > 0 => Ok(rows),
        _ => Err(CitySortError::invalid_row_limit(value)),
    }
}
