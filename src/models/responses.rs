//! Response models for the line protocol
//!
//! Every request is answered with exactly one line. Values are prefixed
//! with `VALUE ` so a stored value such as `NOT_FOUND` or `ERR x` cannot be
//! mistaken for a status reply.

use std::fmt::Display;

/// A reply to one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The write was accepted
    Ok,
    /// The value found for a `GET`, sent as `VALUE <value>`
    Value(String),
    /// No value, or none young enough
    NotFound,
    /// All keys, rendered as a JSON array
    Keys(Vec<String>),
    /// Acknowledges `QUIT`; the connection closes after it
    Bye,
    /// Something went wrong with the command
    Error(String),
}

impl Response {
    /// Creates an error response from any displayable error
    pub fn error(err: impl Display) -> Self {
        Response::Error(err.to_string())
    }

    /// Renders the response as a newline-terminated line.
    pub fn to_line(&self) -> String {
        match self {
            Response::Ok => "OK\n".to_string(),
            Response::Value(value) => format!("VALUE {}\n", value),
            Response::NotFound => "NOT_FOUND\n".to_string(),
            Response::Keys(keys) => match serde_json::to_string(keys) {
                Ok(json) => format!("{}\n", json),
                Err(e) => format!("ERR {}\n", e),
            },
            Response::Bye => "BYE\n".to_string(),
            Response::Error(message) => format!("ERR {}\n", message),
        }
    }
}
