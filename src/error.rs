//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// The single failure the store can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A write was attempted with an absent key or value
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

// == Protocol Error Enum ==
/// Errors raised while turning a command line into a store call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProtocolError {
    /// The line held no command
    #[error("empty command")]
    EmptyCommand,

    /// The command name is not part of the vocabulary
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// A required argument was missing
    #[error("{command} requires a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// The max age was not a non-negative finite number of seconds
    #[error("invalid max age '{0}'")]
    InvalidMaxAge(String),

    /// The line exceeded the configured limit
    #[error("line too long (limit {0} bytes)")]
    LineTooLong(usize),

    /// The store rejected the operation
    #[error(transparent)]
    Cache(#[from] CacheError),
}

// == Result Type Alias ==
/// Convenience Result type for store operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_error_message() {
        let err = CacheError::InvalidArgument("key is absent".to_string());
        assert_eq!(err.to_string(), "invalid argument: key is absent");
    }

    #[test]
    fn test_protocol_error_wraps_cache_error() {
        let err: ProtocolError = CacheError::InvalidArgument("value is absent".to_string()).into();
        assert_eq!(err.to_string(), "invalid argument: value is absent");
    }

    #[test]
    fn test_missing_argument_message() {
        let err = ProtocolError::MissingArgument {
            command: "GET",
            argument: "key",
        };
        assert_eq!(err.to_string(), "GET requires a key");
    }
}
