//! Cache Module
//!
//! Provides the in-memory key-value store with age-bounded lookups.

mod clock;
mod entry;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::Entry;
pub use store::TtlStore;
