//! Command-line front end for the tabsort engine
//!
//! Reads non-blank lines from a file or stdin, sorts or checks them by one
//! tab-separated column, and writes the result to stdout or a file.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::Path;
use std::process;

use tabsort::{
    config::{KeyMode, SortConfig, Strategy},
    error::{SortError, SortResult},
    line_io::result_path,
    run,
};

fn main() {
    match try_main() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("sort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn try_main() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let config = parse_config_from_matches(&matches)?;
    run(&config)
}

fn build_cli() -> Command {
    Command::new("tabsort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("tabsort [OPTION]... [FILE]")
        .about("Sort lines of a file by one tab-separated column")
        .disable_help_flag(true) // -h is human-numeric sort
        .arg(Arg::new("file")
            .help("Input file (use '-' or omit for stdin)")
            .value_name("FILE"))
        .arg(Arg::new("key")
            .short('k')
            .long("key")
            .help("Sort by column N (1-based, tab separated)")
            .value_name("N")
            .default_value("1")
            .allow_negative_numbers(true)
            .value_parser(clap::value_parser!(i64)))
        .arg(Arg::new("numeric-sort")
            .short('n')
            .long("numeric-sort")
            .help("Compare the column as an integer")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("human-numeric-sort")
            .short('h')
            .long("human-numeric-sort")
            .help("Compare human readable sizes (e.g., 512, 2K, 1G)")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("month-sort")
            .short('M')
            .long("month-sort")
            .help("Compare by month abbreviation (Jan < ... < Dec)")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("reverse")
            .short('r')
            .long("reverse")
            .help("Reverse the result of comparisons")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("unique")
            .short('u')
            .long("unique")
            .help("Drop repeated adjacent lines after sorting")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("ignore-trailing-blanks")
            .short('b')
            .long("ignore-trailing-blanks")
            .help("Ignore trailing spaces and tabs in the key")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("check")
            .short('c')
            .long("check")
            .help("Check for sorted input; do not sort")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("strategy")
            .long("strategy")
            .help("Key evaluation strategy")
            .value_name("STRATEGY")
            .default_value("precomputed")
            .value_parser(["precomputed", "lazy"]))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Write result to FILE instead of standard output")
            .value_name("FILE")
            .conflicts_with("to-file"))
        .arg(Arg::new("to-file")
            .short('f')
            .long("to-file")
            .help("Write result to result_FILE next to the input")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("debug")
            .long("debug")
            .help("Print diagnostics to stderr")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("help")
            .long("help")
            .help("Display this help and exit")
            .action(ArgAction::Help))
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &ArgMatches) -> SortResult<SortConfig> {
    let mut config = SortConfig::new();

    if let Some(&column) = matches.get_one::<i64>("key") {
        config.set_column_from_signed(column)?;
    }

    config.mode = KeyMode::from_flags(
        matches.get_flag("numeric-sort"),
        matches.get_flag("human-numeric-sort"),
        matches.get_flag("month-sort"),
    );

    if let Some(strategy) = matches.get_one::<String>("strategy") {
        config.strategy = strategy.parse::<Strategy>()?;
    }

    config.reverse = matches.get_flag("reverse");
    config.unique = matches.get_flag("unique");
    config.trim_trailing_blanks = matches.get_flag("ignore-trailing-blanks");
    config.check = matches.get_flag("check");
    config.debug = matches.get_flag("debug");
    config.input_file = matches.get_one::<String>("file").cloned();

    if let Some(output) = matches.get_one::<String>("output") {
        config.output_file = Some(output.clone());
    }

    if matches.get_flag("to-file") {
        if config.reading_from_stdin() {
            return Err(SortError::invalid_config("--to-file needs an input file"));
        }
        let target = result_path(Path::new(config.input_name()));
        config.output_file = Some(target.display().to_string());
    }

    config.validate()?;

    Ok(config)
}
