//! Time source abstraction for entity timestamps.
//!
//! # Responsibility
//! - Supply Unix-epoch-millisecond timestamps to store mutations.
//! - Keep wall-clock access behind a trait so tests can pin time.

use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond-resolution time source.
pub trait Clock {
    /// Current time as Unix epoch milliseconds.
    fn now_epoch_ms(&self) -> i64;
}

/// Wall-clock implementation used outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as i64,
            // Pre-epoch system clocks are not worth propagating an error for;
            // clamp to epoch instead.
            Err(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, SystemClock};

    #[test]
    fn system_clock_is_monotonic_enough() {
        let first = SystemClock.now_epoch_ms();
        let second = SystemClock.now_epoch_ms();
        assert!(first > 0);
        assert!(second >= first);
    }
}
