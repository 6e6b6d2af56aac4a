use instant::Instant;
use std::time::Duration;

/// Recurring wall-clock timer polled by the owner. Fires once per elapsed period, independently of
/// how often it is polled, until cancelled.
#[derive(Clone, Debug)]
pub struct Interval {
    pub period: Duration,

    next: Instant,
    cancelled: bool,
}

impl Interval {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self { period, next: now + period, cancelled: false }
    }

    /// Returns how many periods have elapsed since the previous poll.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if self.cancelled || self.period.is_zero() {
            return 0;
        }

        let mut fired = 0;
        while self.next <= now {
            self.next += self.period;
            fired += 1;
        }

        fired
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
