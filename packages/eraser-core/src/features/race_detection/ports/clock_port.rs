/// Clock port
use chrono::{DateTime, Utc};
use std::cell::Cell;

/// Time source for access records and race events
///
/// The core never reads the system clock directly, so embedders and tests
/// control event timestamps.
pub trait ClockPort {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time (default)
#[derive(Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock, advanced explicitly; intended for tests
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        self.now
            .set(self.now.get() + chrono::Duration::seconds(secs));
    }
}

impl ClockPort for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}
