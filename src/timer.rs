use std::time::{Duration, Instant};

/// Fixed-period tick schedule driven by explicit clock readings.
///
/// Disarmed timers never fire. A poll that finds the timer late fires once
/// and reschedules from `now`, so a stalled loop does not replay a burst of
/// missed ticks.
#[derive(Debug, Clone)]
pub struct TickTimer {
    period: Duration,
    deadline: Option<Instant>,
}

impl TickTimer {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Schedules the first tick one period after `now`. No-op when armed.
    pub fn arm(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.period);
        }
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Returns true when a tick is due at `now` and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let next = deadline + self.period;
        self.deadline = Some(if next <= now { now + self.period } else { next });
        true
    }

    /// Time left until the next tick, or `None` while disarmed.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
