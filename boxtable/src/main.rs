//! # boxtable
//!
//! Render JSON table data as a box-drawn text table.
//!
//! ## Usage
//!
//! ```bash
//! # Rows only, from a file
//! echo '[["Lemon"], ["Sebastiaan"]]' > names.json
//! boxtable names.json
//!
//! # Labels and rows from stdin, centered
//! echo '{"labels": ["Name", "Duckiness"], "rows": [["Ducky Dave", 12]]}' | boxtable --centered
//!
//! # Override labels, reject ragged rows
//! boxtable data.json --labels User,Messages,Role --strict
//! ```

mod input;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use boxtablelib::{Alignment, RenderOptions};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("boxtable")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render JSON rows as a box-drawn text table")
        .arg(
            Arg::new("input")
                .help("JSON file to read ('-' for stdin)")
                .default_value(input::STDIN),
        )
        .arg(
            Arg::new("labels")
                .short('l')
                .long("labels")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Comma-separated column labels (replaces labels in the input)"),
        )
        .arg(
            Arg::new("align")
                .short('a')
                .long("align")
                .value_parser(|s: &str| s.parse::<Alignment>())
                .help("Cell alignment: left or center"),
        )
        .arg(
            Arg::new("centered")
                .short('c')
                .long("centered")
                .action(ArgAction::SetTrue)
                .help("Center every cell (same as --align center)"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Fail if rows or labels differ in length"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (repeatable; RUST_LOG overrides)"),
        )
}

/// Send logs to stderr so stdout carries only the table
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn render_options(matches: &ArgMatches) -> RenderOptions {
    let alignment = if matches.get_flag("centered") {
        Alignment::Centered
    } else {
        matches
            .get_one::<Alignment>("align")
            .copied()
            .unwrap_or_default()
    };

    RenderOptions::new()
        .alignment(alignment)
        .strict(matches.get_flag("strict"))
}

fn run(matches: &ArgMatches) -> Result<String> {
    let source = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or(input::STDIN);

    let mut table = input::load_table(source)?;
    if let Some(labels) = matches.get_many::<String>("labels") {
        table = table.with_labels(labels.cloned());
    }

    let options = render_options(matches);
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "rendering table"
    );
    debug!(
        widths = ?table.column_widths().as_slice(),
        alignment = %options.alignment,
        strict = options.strict,
        "layout"
    );

    Ok(table.render(&options)?)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_tracing(matches.get_count("verbose"));

    match run(&matches) {
        Ok(table) => {
            println!("{}", table);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["boxtable"];
        argv.extend(args);
        build_command().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_default_options() {
        let options = render_options(&matches(&[]));
        assert_eq!(options, RenderOptions::new());
    }

    #[test]
    fn test_align_flag() {
        let options = render_options(&matches(&["--align", "center"]));
        assert_eq!(options.alignment, Alignment::Centered);

        let options = render_options(&matches(&["--align", "left", "--centered"]));
        assert_eq!(options.alignment, Alignment::Centered);
    }

    #[test]
    fn test_invalid_align_is_rejected() {
        let result = build_command().try_get_matches_from(["boxtable", "--align", "right"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_strict_flag() {
        assert!(render_options(&matches(&["--strict"])).strict);
    }

    #[test]
    fn test_labels_are_split_on_commas() {
        let m = matches(&["--labels", "User,Messages", "-l", "Role"]);
        let labels: Vec<&String> = m.get_many::<String>("labels").unwrap().collect();
        assert_eq!(labels, ["User", "Messages", "Role"]);
    }
}
