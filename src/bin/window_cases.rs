use std::env;
use std::process;

use colored::Colorize;
use tracing::error;

use sliding_window::cases::{self, CaseOutcome, Outcome, Report};
use sliding_window::{catalog, logging, CaseError};

const DEFAULT_PATTERN: &str = "cases/*.toml";

const USAGE: &str = "\
Usage: window-cases [OPTIONS] [PATTERN]...

Runs every case in the given TOML files (default: cases/*.toml).

Options:
  --verify   also run the brute-force reference and flag disagreements
  --json     print the report as JSON instead of text
  --list     print the exercise catalog as markdown and exit
  -h, --help print this message";

#[derive(Debug, Default)]
struct Options {
    verify: bool,
    json: bool,
    list: bool,
    patterns: Vec<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    for arg in args {
        match arg.as_str() {
            "--verify" => options.verify = true,
            "--json" => options.json = true,
            "--list" => options.list = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option '{flag}'\n\n{USAGE}"))
            }
            pattern => options.patterns.push(pattern.to_string()),
        }
    }
    if options.patterns.is_empty() {
        options.patterns.push(DEFAULT_PATTERN.to_string());
    }
    Ok(options)
}

fn format_outcome(outcome: &CaseOutcome) -> String {
    let id = format!("#{}", outcome.exercise.leetcode_id()).dimmed();
    match &outcome.outcome {
        Outcome::Passed { actual } => {
            format!("{} {} {} = {}", "PASS".green(), id, outcome.label, actual)
        }
        Outcome::Failed { expected, actual } => format!(
            "{} {} {}: expected {}, got {}",
            "FAIL".red(),
            id,
            outcome.label,
            expected,
            actual
        ),
        Outcome::Mismatch {
            incremental,
            reference,
        } => format!(
            "{} {} {}: incremental {} vs brute force {}",
            "DIFF".magenta(),
            id,
            outcome.label,
            incremental,
            reference
        ),
        Outcome::Errored { message } => {
            format!("{} {} {}: {}", "ERR ".yellow(), id, outcome.label, message)
        }
    }
}

fn format_summary(report: &Report) -> String {
    let line = format!(
        "{} passed, {} failed, {} mismatched, {} errored ({} total)",
        report.passed,
        report.failed,
        report.mismatched,
        report.errored,
        report.total()
    );
    if report.is_success() {
        line.green().bold().to_string()
    } else {
        line.red().bold().to_string()
    }
}

fn run(options: &Options) -> Result<Report, CaseError> {
    let mut all = Vec::new();
    for path in cases::expand_patterns(&options.patterns)? {
        all.extend(cases::load_case_file(&path)?);
    }
    Ok(Report::from_outcomes(cases::run_cases(&all, options.verify)))
}

fn main() {
    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    if options.list {
        print!("{}", catalog::render_listing());
        return;
    }

    logging::init();

    let report = match run(&options) {
        Ok(report) => report,
        Err(err) => {
            error!(error = %err, "could not load cases");
            process::exit(2);
        }
    };

    if options.json {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(error = %err, "could not serialize report");
                process::exit(2);
            }
        }
    } else {
        for outcome in &report.outcomes {
            println!("{}", format_outcome(outcome));
        }
        println!("\n{}", format_summary(&report));
    }

    if !report.is_success() {
        process::exit(1);
    }
}
