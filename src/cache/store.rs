//! Cache Store Module
//!
//! Key-value map whose lookups can be bounded by how long ago a key was written.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{Clock, Entry, SystemClock};
use crate::error::{CacheError, Result};

// == TTL Store ==
/// Holds the latest value per key and answers age-bounded lookups.
///
/// Expired entries are never removed: a lookup with a tighter bound hides
/// them, a lookup with a looser bound (or none) still sees them.
#[derive(Debug)]
pub struct TtlStore {
    /// Key-value storage
    entries: HashMap<String, Entry>,
    /// Set by the first successful write
    ever_written: bool,
    /// Time source used to stamp and age entries
    clock: Arc<dyn Clock>,
}

impl TtlStore {
    // == Constructor ==
    /// Creates an empty store backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store backed by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            ever_written: false,
            clock,
        }
    }

    // == Set ==
    /// Stores `value` under `key`, stamped with the current time.
    ///
    /// An existing entry is replaced wholesale, so its age restarts at zero.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidArgument`] if either argument is absent;
    /// the store is left unchanged.
    pub fn set(&mut self, key: Option<String>, value: Option<String>) -> Result<()> {
        let (key, value) = match (key, value) {
            (Some(key), Some(value)) => (key, value),
            (None, _) => return Err(CacheError::InvalidArgument("key is absent".to_string())),
            (_, None) => return Err(CacheError::InvalidArgument("value is absent".to_string())),
        };

        let entry = Entry::new(value, self.clock.now());
        self.entries.insert(key, entry);
        self.ever_written = true;

        Ok(())
    }

    // == Get ==
    /// Retrieves the value stored under `key`.
    ///
    /// With `max_age`, the value is returned only if it was written no more
    /// than `max_age` ago. A zero bound only matches within the clock's
    /// resolution of the write, so treat it as best-effort.
    pub fn get(&self, key: &str, max_age: Option<Duration>) -> Option<String> {
        if !self.ever_written {
            return None;
        }

        let entry = self.entries.get(key)?;
        match max_age {
            Some(max_age) if !entry.is_fresh(max_age, self.clock.now()) => None,
            _ => Some(entry.value().to_string()),
        }
    }

    // == Keys ==
    /// Returns every stored key, including ones too old for a bounded lookup.
    ///
    /// Order is unspecified.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TtlStore {
    fn default() -> Self {
        Self::new()
    }
}
