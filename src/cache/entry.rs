//! Cache Entry Module
//!
//! Defines a stored value together with the time it was written.

use std::time::Duration;

use chrono::{DateTime, Utc};

// == Cache Entry ==
/// A single stored value and its insertion timestamp.
///
/// Entries are never mutated; a write to an existing key replaces the
/// whole entry, which refreshes both the value and the timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    value: String,
    inserted_at: DateTime<Utc>,
}

impl Entry {
    // == Constructor ==
    /// Creates an entry stamped with `inserted_at`.
    pub fn new(value: String, inserted_at: DateTime<Utc>) -> Self {
        Self { value, inserted_at }
    }

    /// Returns the stored value.
    pub fn value(&self) -> &str {
        &self.value
    }

    // == Age ==
    /// Returns how long ago the entry was written, as seen at `now`.
    ///
    /// A `now` earlier than the insertion time counts as zero age.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        (now - self.inserted_at).to_std().unwrap_or(Duration::ZERO)
    }

    // == Freshness ==
    /// Checks whether the entry's age at `now` is within `max_age`.
    ///
    /// The bound is inclusive: an entry exactly `max_age` old is still fresh.
    pub fn is_fresh(&self, max_age: Duration, now: DateTime<Utc>) -> bool {
        self.age(now) <= max_age
    }
}
