//! Request models for the line protocol
//!
//! Maps a parsed command line onto the store operation it names.

use std::time::Duration;

use crate::error::ProtocolError;
use crate::protocol::ParsedCommand;

/// A command understood by the server.
///
/// Command names are matched case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// `GET <key> [max_age_secs]`
    Get {
        key: String,
        max_age: Option<Duration>,
    },
    /// `SET <key> <value...>` (also `PUT`)
    ///
    /// Both parts are passed through as parsed; the store rejects absent ones.
    Set {
        key: Option<String>,
        value: Option<String>,
    },
    /// `KEYS` (also `DUMP`)
    Keys,
    /// `QUIT`
    Quit,
}

impl TryFrom<ParsedCommand> for Request {
    type Error = ProtocolError;

    fn try_from(parsed: ParsedCommand) -> Result<Self, Self::Error> {
        let command = parsed.command.ok_or(ProtocolError::EmptyCommand)?;

        match command.to_ascii_uppercase().as_str() {
            "GET" => {
                let key = parsed.arg1.ok_or(ProtocolError::MissingArgument {
                    command: "GET",
                    argument: "key",
                })?;
                let max_age = parsed.remainder.as_deref().map(parse_max_age).transpose()?;
                Ok(Request::Get { key, max_age })
            }
            "SET" | "PUT" => Ok(Request::Set {
                key: parsed.arg1,
                value: parsed.remainder,
            }),
            "KEYS" | "DUMP" => Ok(Request::Keys),
            "QUIT" => Ok(Request::Quit),
            _ => Err(ProtocolError::UnknownCommand(command)),
        }
    }
}

/// Parses a max age given in (possibly fractional) seconds.
///
/// Finite bounds too large for a `Duration` saturate to `Duration::MAX`.
fn parse_max_age(raw: &str) -> Result<Duration, ProtocolError> {
    raw.parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .map(|secs| Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX))
        .ok_or_else(|| ProtocolError::InvalidMaxAge(raw.to_string()))
}
