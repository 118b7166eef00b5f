//! Platform abstraction layer
//!
//! The engine never owns a timer. It tells a [`Scheduler`] which period it
//! wants and the host calls `Engine::tick` when the period elapses.
//! - [`ManualScheduler`]: virtual clock for native runs and tests
//! - `IntervalScheduler` (wasm only): `setInterval` / `clearInterval`

#[cfg(target_arch = "wasm32")]
mod interval;
mod manual;

#[cfg(target_arch = "wasm32")]
pub use interval::IntervalScheduler;
pub use manual::{MAX_CATCHUP_TICKS, ManualScheduler};

/// Periodic tick source driven by the host
pub trait Scheduler {
    /// Begin ticking every `interval_ms`. Any existing schedule is cancelled
    /// first, so a restart never fires a stale tick.
    fn start(&mut self, interval_ms: u32);

    /// Switch a running schedule to a new period without losing time that
    /// has already elapsed, so a speed change never skips a due tick.
    fn reschedule(&mut self, interval_ms: u32);

    /// Cancel the schedule; no tick fires afterwards.
    fn stop(&mut self);

    /// Current period, or `None` while stopped
    fn interval_ms(&self) -> Option<u32>;

    fn is_running(&self) -> bool {
        self.interval_ms().is_some()
    }
}
