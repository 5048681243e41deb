//! Cycle scheduling for the main loop.
//!
//! The loop polls window events every `POLL_INTERVAL` and asks a
//! [`CycleTimer`] whether a cycle is due. The timer fires on the first poll
//! and then once per interval. Deadlines that slipped (the window was
//! dragged, the machine slept) fire a single cycle and re-anchor to the
//! current time instead of bursting through the backlog.
//!
//! [`Shutdown`] is the clean-exit hook. The loop checks it at the top of each
//! iteration; the quit request sets it, and so can any other thread holding a
//! reference.
//!
//! Time is passed in explicitly so the timer is testable without sleeping.

use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

/// Fixed-interval cycle timer.
#[derive(Clone, Copy, Debug)]
pub struct CycleTimer {
    interval: Duration,
    next: Option<Instant>,
}

impl CycleTimer {
    pub const fn new(interval: Duration) -> Self { Self { interval, next: None } }

    #[inline]
    pub const fn interval(&self) -> Duration { self.interval }

    /// Returns `true` if a cycle is due at `now`, and schedules the next one.
    pub fn poll(
        &mut self,
        now: Instant,
    ) -> bool {
        match self.next {
            Some(deadline) if now < deadline => false,
            Some(deadline) => {
                let next = deadline + self.interval;
                // Stalled past the following deadline: skip the backlog
                self.next = Some(if next <= now { now + self.interval } else { next });
                true
            }
            None => {
                self.next = Some(now + self.interval);
                true
            }
        }
    }

    /// Time left until the next cycle, zero if one is due.
    pub fn remaining(
        &self,
        now: Instant,
    ) -> Duration {
        self.next.map_or(Duration::ZERO, |deadline| deadline.saturating_duration_since(now))
    }
}

/// Clean shutdown request, shareable across threads.
#[derive(Debug, Default)]
pub struct Shutdown {
    requested: AtomicBool,
}

impl Shutdown {
    pub const fn new() -> Self { Self { requested: AtomicBool::new(false) } }

    #[inline]
    pub fn request(&self) { self.requested.store(true, Ordering::Relaxed); }

    #[inline]
    pub fn is_requested(&self) -> bool { self.requested.load(Ordering::Relaxed) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_fires_on_first_poll() {
        let mut timer = CycleTimer::new(SECOND);
        assert!(timer.poll(Instant::now()), "First cycle runs immediately");
    }

    #[test]
    fn test_waits_for_interval() {
        let start = Instant::now();
        let mut timer = CycleTimer::new(SECOND);
        assert!(timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(20)));
        assert!(!timer.poll(start + Duration::from_millis(999)));
        assert!(timer.poll(start + SECOND), "Fires exactly at the deadline");
        assert!(!timer.poll(start + SECOND + Duration::from_millis(500)));
        assert!(timer.poll(start + 2 * SECOND));
    }

    #[test]
    fn test_small_lateness_keeps_cadence() {
        let start = Instant::now();
        let mut timer = CycleTimer::new(SECOND);
        timer.poll(start);
        assert!(timer.poll(start + Duration::from_millis(1015)), "Late by one poll");
        assert!(timer.poll(start + 2 * SECOND), "Next deadline stays on the 1 s grid");
    }

    #[test]
    fn test_no_burst_after_stall() {
        let start = Instant::now();
        let mut timer = CycleTimer::new(SECOND);
        timer.poll(start);

        let after_stall = start + 5 * SECOND + Duration::from_millis(300);
        assert!(timer.poll(after_stall), "One cycle after the stall");
        assert!(!timer.poll(after_stall + Duration::from_millis(20)), "No catch-up burst");
        assert!(timer.poll(after_stall + SECOND), "Re-anchored to the stall end");
    }

    #[test]
    fn test_remaining() {
        let start = Instant::now();
        let mut timer = CycleTimer::new(SECOND);
        assert_eq!(timer.remaining(start), Duration::ZERO, "Due before the first poll");
        timer.poll(start);
        assert_eq!(timer.remaining(start + Duration::from_millis(400)), Duration::from_millis(600));
        assert_eq!(timer.remaining(start + 3 * SECOND), Duration::ZERO);
    }

    #[test]
    fn test_shutdown_flag() {
        let shutdown = Shutdown::new();
        assert!(!shutdown.is_requested());
        shutdown.request();
        assert!(shutdown.is_requested());
        shutdown.request();
        assert!(shutdown.is_requested(), "Requesting twice is harmless");
    }

    #[test]
    fn test_shutdown_requested_from_another_thread() {
        let shutdown = Shutdown::new();
        std::thread::scope(|s| {
            s.spawn(|| shutdown.request());
        });
        assert!(shutdown.is_requested(), "Loop sees a request made outside it");
    }
}
