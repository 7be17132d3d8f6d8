//! One-shot deadlines polled from the event loop.
//!
//! Nothing here spawns a task or sleeps. The owner stores a [`Timer`],
//! schedules it with the current instant, and polls it on every tick.
//! Scheduling a pending timer replaces its deadline, so a superseded
//! deadline can never fire.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timer {
    due: Option<Instant>,
}

impl Timer {
    pub fn new() -> Self {
        Self { due: None }
    }

    /// Arm the timer to fire `delay` after `now`, dropping any pending deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Fire at most once: returns `true` the first time `now` reaches the
    /// deadline and disarms the timer.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_deadline() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.schedule(t0, Duration::from_secs(2));

        assert!(!timer.poll(t0 + Duration::from_millis(1999)));
        assert!(timer.poll(t0 + Duration::from_secs(2)));
        assert!(!timer.poll(t0 + Duration::from_secs(3)));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_reschedule_supersedes_earlier_deadline() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.schedule(t0, Duration::from_secs(2));
        timer.schedule(t0 + Duration::from_secs(1), Duration::from_secs(2));

        // The first deadline (t0 + 2s) must not fire.
        assert!(!timer.poll(t0 + Duration::from_millis(2500)));
        assert!(timer.poll(t0 + Duration::from_secs(3)));
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut timer = Timer::new();
        timer.schedule(t0, Duration::from_millis(10));
        timer.cancel();
        assert!(!timer.poll(t0 + Duration::from_secs(1)));
        assert_eq!(timer.remaining(t0), None);
    }
}
