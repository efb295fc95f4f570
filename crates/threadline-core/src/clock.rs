//! Time source behind a seam.
//!
//! Order dates and catalog timestamps come from a `Clock` rather than
//! `Utc::now()` directly, so checkout and seeding tests can pin time to a
//! fixed instant.

use chrono::{DateTime, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// The current moment, UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock. Everything outside tests uses this.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
