//! System clock adapter.

use chrono::{DateTime, Utc};

use crate::ports::Clock;

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2023() {
        assert!(SystemClock::new().now_millis() > 1_672_531_200_000);
    }

    #[test]
    fn system_clock_does_not_run_backwards() {
        let clock = SystemClock::default();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
