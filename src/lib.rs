//! Mini Cache - A minimal networked key-value cache
//!
//! Clients send one text command per line; the server answers from an
//! in-memory store whose lookups can be bounded by entry age.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod protocol;
pub mod server;

pub use cache::TtlStore;
pub use config::Config;
pub use protocol::{parse_command, ParsedCommand};
pub use server::AppState;
