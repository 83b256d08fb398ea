/*
[INPUT]:  Wall-clock time (or a fixed instant in tests)
[OUTPUT]: Unix timestamps in milliseconds for request signing
[POS]:    Auth layer - injectable time source
[UPDATE]: When signing needs a different time representation
*/

use chrono::Utc;

/// Source of the `Api-Timestamp` value
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

/// Real system clock for production use
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // Pre-epoch system time would be a misconfigured host; clamp instead of wrapping.
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let first = clock.now_millis();
        thread::sleep(Duration::from_millis(10));
        let second = clock.now_millis();
        assert!(second >= first + 9);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(1_700_000_000_000);
        assert_eq!(clock.now_millis(), 1_700_000_000_000);
        assert_eq!(clock.now_millis(), clock.now_millis());
    }
}
