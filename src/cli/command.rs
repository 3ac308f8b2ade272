use std::time::Duration;

use crate::board::{SearchConfig, Square, Strategy, VisitedScope};

use super::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Solve(Vec<String>),
    Strategies,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_cli_command(line: &str) -> Option<CliCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let first = *parts.first()?;

    let cmd = match first {
        "solve" | "go" => CliCommand::Solve(parts.iter().map(|p| (*p).to_string()).collect()),
        "strategies" | "list" => CliCommand::Strategies,
        "help" | "?" => CliCommand::Help,
        "quit" | "exit" => CliCommand::Quit,
        _ => CliCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

/// Parse `solve <strategy> [size N] [time SECS] [start SQ] [scope run|path]`
/// on top of `defaults`.
pub fn try_parse_solve(parts: &[&str], defaults: &SearchConfig) -> Result<SearchConfig, CliError> {
    let mut config = defaults.clone();
    let mut i = 1;

    if let Some(name) = parts.get(i).filter(|p| !is_keyword(p)) {
        config.strategy = name.parse::<Strategy>()?;
        i += 1;
    }

    while i < parts.len() {
        let key = parts[i];
        let value = *parts
            .get(i + 1)
            .ok_or_else(|| CliError::MissingValue { key: key.to_string() })?;
        match key {
            "size" => config.board_size = parse_value(key, value)?,
            "time" => {
                let secs: f64 = parse_value(key, value)?;
                config.time_limit = Duration::try_from_secs_f64(secs).map_err(|_| {
                    CliError::InvalidValue {
                        key: key.to_string(),
                        value: value.to_string(),
                    }
                })?;
            }
            "start" => config.start = value.parse::<Square>()?,
            "scope" => {
                config.visited_scope = Some(match value {
                    "run" => VisitedScope::Run,
                    "path" => VisitedScope::Path,
                    _ => {
                        return Err(CliError::InvalidValue {
                            key: key.to_string(),
                            value: value.to_string(),
                        })
                    }
                });
            }
            _ => return Err(CliError::UnknownKey { key: key.to_string() }),
        }
        i += 2;
    }

    Ok(config)
}

fn is_keyword(part: &str) -> bool {
    matches!(part, "size" | "time" | "start" | "scope")
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
