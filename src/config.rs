//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Default address the server binds to
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default TCP port
pub const DEFAULT_PORT: u16 = 7878;

/// Default maximum length of a single command line, in bytes
pub const DEFAULT_MAX_LINE_LENGTH: usize = 256;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface the listener binds to
    pub server_host: String,
    /// TCP server port
    pub server_port: u16,
    /// Longest accepted command line in bytes, excluding the newline
    pub max_line_length: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_HOST` - Bind address (default: 127.0.0.1)
    /// - `SERVER_PORT` - TCP server port (default: 7878)
    /// - `MAX_LINE_LENGTH` - Longest command line in bytes (default: 256)
    pub fn from_env() -> Self {
        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_PORT),
            max_line_length: parse_var("MAX_LINE_LENGTH").unwrap_or(DEFAULT_MAX_LINE_LENGTH),
        }
    }

    /// Returns the `host:port` pair for binding or connecting.
    pub fn address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}
