//! Wall-clock abstraction so round timing is testable.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" in milliseconds
pub trait Clock: Send {
    fn now_ms(&self) -> u64;
}

/// Real wall clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
