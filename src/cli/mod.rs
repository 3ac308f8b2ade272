//! Line-oriented front end for the search engine.
//!
//! Reads one command per line from stdin:
//! `solve <strategy> [size N] [time SECS] [start SQ] [scope run|path]`,
//! `strategies`, `help` and `quit`.

use std::fmt;
use std::io::{self, BufRead};

use crate::board::{run_search, SearchConfig, SquareError, StrategyError};

pub mod command;
pub mod print;

use command::{parse_cli_command, try_parse_solve, CliCommand};

/// Error type for malformed `solve` commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Strategy name not recognized
    Strategy(StrategyError),
    /// Start square not in `a1` notation
    Square(SquareError),
    /// Option given without a value
    MissingValue { key: String },
    /// Option value does not parse
    InvalidValue { key: String, value: String },
    /// Option name not recognized
    UnknownKey { key: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Strategy(e) => write!(f, "{e}"),
            CliError::Square(e) => write!(f, "{e}"),
            CliError::MissingValue { key } => write!(f, "Missing value for '{key}'"),
            CliError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{value}' for '{key}'")
            }
            CliError::UnknownKey { key } => write!(f, "Unknown option '{key}'"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<StrategyError> for CliError {
    fn from(e: StrategyError) -> Self {
        CliError::Strategy(e)
    }
}

impl From<SquareError> for CliError {
    fn from(e: SquareError) -> Self {
        CliError::Square(e)
    }
}

/// Handle one `solve` command, printing the result or the error.
pub fn handle_solve(parts: &[&str], defaults: &SearchConfig) {
    let config = match try_parse_solve(parts, defaults) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    match run_search(&config) {
        Ok(result) => print::print_result(&result),
        Err(e) => eprintln!("Error: {e}"),
    }
}

pub fn run_loop() {
    let defaults = SearchConfig::default();
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let Some(cmd) = parse_cli_command(&line) else {
            continue;
        };

        match cmd {
            CliCommand::Solve(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                handle_solve(&parts, &defaults);
            }
            CliCommand::Strategies => print::print_strategies(),
            CliCommand::Help => print::print_help(),
            CliCommand::Quit => break,
            CliCommand::Unknown(text) => eprintln!("Unknown command: {text}"),
        }
    }
}
