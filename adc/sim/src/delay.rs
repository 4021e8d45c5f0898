//! Delay provider that records instead of waiting

use embedded_hal::delay::DelayNs;

/// A [`DelayNs`] that returns immediately and keeps count of what was asked
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimDelay {
    calls: u32,
    total_ns: u64,
}

impl SimDelay {
    /// Create a delay with empty counters
    pub const fn new() -> Self {
        Self {
            calls: 0,
            total_ns: 0,
        }
    }

    /// Number of delay requests seen
    pub fn calls(&self) -> u32 {
        self.calls
    }

    /// Sum of all requested delays, in nanoseconds
    pub fn total_ns(&self) -> u64 {
        self.total_ns
    }

    /// Sum of all requested delays, in whole microseconds
    pub fn total_us(&self) -> u64 {
        self.total_ns / 1_000
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += ns as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_microseconds() {
        let mut delay = SimDelay::new();
        delay.delay_us(2);
        delay.delay_us(2);
        assert_eq!(delay.calls(), 2);
        assert_eq!(delay.total_us(), 4);
    }
}
