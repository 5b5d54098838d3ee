//! Command Handlers
//!
//! Runs typed requests against the shared store.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::TtlStore;
use crate::models::{Request, Response};
use crate::protocol::parse_command;

/// Application state shared across all connections.
///
/// Contains the store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Thread-safe store
    pub cache: Arc<RwLock<TtlStore>>,
}

impl AppState {
    /// Creates a new AppState with the given store.
    pub fn new(cache: TtlStore) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }
}

/// Parses one command line and runs it.
///
/// Malformed commands are answered with an error response.
pub async fn handle_line(state: &AppState, line: &str) -> Response {
    match Request::try_from(parse_command(line)) {
        Ok(request) => handle_request(state, request).await,
        Err(e) => {
            debug!(error = %e, "rejected command line");
            Response::error(e)
        }
    }
}

/// Runs a single request against the store.
pub async fn handle_request(state: &AppState, request: Request) -> Response {
    match request {
        Request::Get { key, max_age } => {
            // Lookups never modify the store
            let cache = state.cache.read().await;
            match cache.get(&key, max_age) {
                Some(value) => Response::Value(value),
                None => Response::NotFound,
            }
        }
        Request::Set { key, value } => {
            let mut cache = state.cache.write().await;
            match cache.set(key, value) {
                Ok(()) => Response::Ok,
                Err(e) => {
                    debug!(error = %e, "SET rejected");
                    Response::error(e)
                }
            }
        }
        Request::Keys => {
            let mut keys = state.cache.read().await.keys();
            keys.sort_unstable();
            Response::Keys(keys)
        }
        Request::Quit => Response::Bye,
    }
}
