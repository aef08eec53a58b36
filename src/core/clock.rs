//! Time source for the timer table

use chrono::Utc;

pub trait Clock: Send + Sync {
    /// Milliseconds since a fixed epoch.
    fn now_millis(&self) -> i64;
}

/// Wall-clock milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_moves_forward() {
        let first = SystemClock.now_millis();
        let second = SystemClock.now_millis();
        assert!(first > 0);
        assert!(second >= first);
    }
}
