//! Server Module
//!
//! TCP front end for the cache: accepts connections, reads one command per
//! line and writes one response line back.
//!
//! # Commands
//! - `SET <key> <value...>` - Store a value (alias `PUT`)
//! - `GET <key> [max_age_secs]` - Retrieve a value, optionally bounded by age
//! - `KEYS` - List all keys as a JSON array (alias `DUMP`)
//! - `QUIT` - Close the connection

pub mod connection;
pub mod handlers;

pub use connection::{handle_connection, serve};
pub use handlers::{handle_line, handle_request, AppState};
