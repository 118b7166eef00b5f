//! Virtual-clock scheduler
//!
//! Time is fed in with [`ManualScheduler::advance`]; due ticks are taken one
//! at a time with [`ManualScheduler::take_due`]. `start` discards the
//! partial period; `reschedule` keeps it so due ticks still fire.

use super::Scheduler;

/// Maximum ticks owed at once, to prevent a spiral of death after a stall
pub const MAX_CATCHUP_TICKS: u32 = 8;

#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    interval_ms: Option<u32>,
    accumulator_ms: u64,
    /// Number of `start` calls
    pub starts: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `elapsed_ms` of wall time pass. Ignored while stopped.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let Some(interval) = self.interval_ms else {
            return;
        };
        let cap = interval as u64 * MAX_CATCHUP_TICKS as u64;
        self.accumulator_ms = (self.accumulator_ms + elapsed_ms).min(cap);
    }

    /// Consume one due tick, if any
    pub fn take_due(&mut self) -> bool {
        match self.interval_ms {
            Some(interval) if self.accumulator_ms >= interval as u64 => {
                self.accumulator_ms -= interval as u64;
                true
            }
            _ => false,
        }
    }

    /// Milliseconds until the next tick, or `None` while stopped
    pub fn until_next_ms(&self) -> Option<u64> {
        self.interval_ms
            .map(|i| (i as u64).saturating_sub(self.accumulator_ms))
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, interval_ms: u32) {
        self.interval_ms = Some(interval_ms.max(1));
        self.accumulator_ms = 0;
        self.starts += 1;
    }

    fn reschedule(&mut self, interval_ms: u32) {
        let interval = interval_ms.max(1);
        self.interval_ms = Some(interval);
        let cap = interval as u64 * MAX_CATCHUP_TICKS as u64;
        self.accumulator_ms = self.accumulator_ms.min(cap);
    }

    fn stop(&mut self) {
        self.interval_ms = None;
        self.accumulator_ms = 0;
    }

    fn interval_ms(&self) -> Option<u32> {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_never_due() {
        let mut s = ManualScheduler::new();
        s.advance(10_000);
        assert!(!s.take_due());
        assert!(!s.is_running());
    }

    #[test]
    fn test_due_ticks() {
        let mut s = ManualScheduler::new();
        s.start(150);
        s.advance(149);
        assert!(!s.take_due());
        s.advance(152);
        assert!(s.take_due());
        assert!(s.take_due());
        assert!(!s.take_due());
        assert_eq!(s.until_next_ms(), Some(149));
    }

    #[test]
    fn test_catchup_capped() {
        let mut s = ManualScheduler::new();
        s.start(100);
        s.advance(60_000);
        let mut n = 0;
        while s.take_due() {
            n += 1;
        }
        assert_eq!(n, MAX_CATCHUP_TICKS);
    }

    #[test]
    fn test_restart_discards_partial_period() {
        let mut s = ManualScheduler::new();
        s.start(150);
        s.advance(120);
        s.start(140);
        s.advance(30);
        assert!(!s.take_due());
        assert_eq!(s.starts, 2);
    }

    #[test]
    fn test_reschedule_keeps_elapsed_time() {
        let mut s = ManualScheduler::new();
        s.start(150);
        s.advance(300);
        assert!(s.take_due());
        s.reschedule(140);
        assert!(s.take_due());
        assert!(!s.take_due());
        assert_eq!(s.until_next_ms(), Some(130));
        assert_eq!(s.starts, 1);
    }

    #[test]
    fn test_stop_cancels_pending() {
        let mut s = ManualScheduler::new();
        s.start(100);
        s.advance(250);
        s.stop();
        assert!(!s.take_due());
        assert_eq!(s.interval_ms(), None);
    }
}
