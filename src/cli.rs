// SPDX-License-Identifier: MPL-2.0
//! Line commands understood by the `story-toaster` binary.
//!
//! ```text
//! add [--id N] <severity> <message...>
//! remove <index>
//! reset
//! list
//! quit
//! ```

use crate::notifications::{Notification, Severity, ToastId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Notification),
    Remove(usize),
    Reset,
    List,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("invalid {name}: {value}")]
    InvalidArgument { name: &'static str, value: String },
}

/// Parses one input line.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Err(ParseError::Empty);
    };

    match verb {
        "add" => parse_add(tokens),
        "remove" | "rm" => {
            let raw = tokens.next().ok_or(ParseError::MissingArgument("index"))?;
            raw.parse()
                .map(Command::Remove)
                .map_err(|_| ParseError::InvalidArgument {
                    name: "index",
                    value: raw.to_string(),
                })
        }
        "reset" => Ok(Command::Reset),
        "list" | "ls" => Ok(Command::List),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_add<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<Command, ParseError> {
    let mut id = None;
    let mut first = tokens.next().ok_or(ParseError::MissingArgument("severity"))?;
    if first == "--id" {
        let raw = tokens.next().ok_or(ParseError::MissingArgument("id"))?;
        let value = raw.parse().map_err(|_| ParseError::InvalidArgument {
            name: "id",
            value: raw.to_string(),
        })?;
        id = Some(ToastId(value));
        first = tokens.next().ok_or(ParseError::MissingArgument("severity"))?;
    }

    let severity: Severity = first.parse().map_err(|_| ParseError::InvalidArgument {
        name: "severity",
        value: first.to_string(),
    })?;
    let message = tokens.collect::<Vec<_>>().join(" ");
    if message.is_empty() {
        return Err(ParseError::MissingArgument("message"));
    }

    let notification = Notification::new(severity, message);
    Ok(Command::Add(match id {
        Some(id) => notification.with_id(id),
        None => notification,
    }))
}
