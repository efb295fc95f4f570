//! Test clock — deterministic `Clock` implementation for tests.

use chrono::{DateTime, Utc};
use threadline_core::clock::Clock;

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A fixed timestamp shared by tests that do not care about the value.
    ///
    /// # Panics
    ///
    /// Never; the components are valid.
    #[must_use]
    pub fn default_instant() -> Self {
        Self(
            chrono::TimeZone::with_ymd_and_hms(&Utc, 2026, 1, 15, 10, 0, 0)
                .single()
                .unwrap(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
