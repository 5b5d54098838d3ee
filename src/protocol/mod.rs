//! Protocol Module
//!
//! Splits raw command lines into their parts.

mod parser;

pub use parser::{parse_command, ParsedCommand};
