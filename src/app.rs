//! The cycle loop: update, render, display, wait.
//!
//! [`Dashboard`] owns the session and runs one cycle at a time against any
//! draw target, which is what the tests drive. [`run`] wraps it in the
//! desktop window loop:
//!
//! ```text
//! while !shutdown.is_requested() {
//!     drain window events   -> selector, quit flag
//!     quit pressed?         -> request shutdown, break
//!     selection changed?    -> redraw control panel
//!     cycle due?            -> read selector, update, render, draw cluster
//!     present window, sleep POLL_INTERVAL
//! }
//! ```
//!
//! The selector is read once per cycle: a change made between two cycles
//! takes effect on the next one, while the control panel reflects it
//! immediately.

use std::{
    thread,
    time::{Duration, Instant},
};

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use embedded_graphics_simulator::{SimulatorDisplay, Window};
use tracing::{debug, info};

use crate::{
    config::{CYCLE_INTERVAL, POLL_INTERVAL},
    display::{draw_cluster, draw_frame},
    input::{Selector, process_events},
    render::render_cluster,
    state::{CarStatus, CycleEvents, Session},
    timing::{CycleTimer, Shutdown},
    widgets::draw_sidebar,
};

// =============================================================================
// Dashboard
// =============================================================================

/// Counters kept across the whole run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleStats {
    pub cycles: u64,
    /// Cycles that ran with the car ON.
    pub active_cycles: u64,
    /// Slowest render+draw seen so far.
    pub max_render_time: Duration,
}

/// Outcome of one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleReport {
    /// Session after the update.
    pub session: Session,
    pub events: CycleEvents,
    /// Time spent rendering and drawing the cluster.
    pub render_time: Duration,
}

/// Session plus the per-cycle pipeline.
#[derive(Clone, Debug, Default)]
pub struct Dashboard {
    session: Session,
    stats: CycleStats,
}

impl Dashboard {
    pub const fn new() -> Self { Self::with_session(Session::new()) }

    /// Start from an explicit session instead of the initial one.
    pub const fn with_session(session: Session) -> Self {
        Self {
            session,
            stats: CycleStats { cycles: 0, active_cycles: 0, max_render_time: Duration::ZERO },
        }
    }

    #[inline]
    pub const fn session(&self) -> &Session { &self.session }

    #[inline]
    pub const fn stats(&self) -> &CycleStats { &self.stats }

    /// Run one cycle with the car status read from the control input.
    ///
    /// Updates the session, renders the cluster and replaces the cluster
    /// region of `display`. Only drawing can fail.
    pub fn run_cycle<D>(
        &mut self,
        display: &mut D,
        status: CarStatus,
    ) -> Result<CycleReport, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.session.set_car_status(status) {
            info!(%status, "car status changed");
        }

        let events = self.session.advance();
        self.stats.cycles += 1;
        if status.is_on() {
            self.stats.active_cycles += 1;
        }
        if events.fuel_exhausted {
            info!(cycle = self.stats.cycles, "fuel exhausted");
        }

        let render_start = Instant::now();
        let cluster = render_cluster(&self.session);
        draw_cluster(display, &cluster)?;
        let render_time = render_start.elapsed();
        self.stats.max_render_time = self.stats.max_render_time.max(render_time);

        debug!(
            cycle = self.stats.cycles,
            speed = self.session.speed(),
            rpm = self.session.rpm(),
            fuel = self.session.fuel_level(),
            %status,
            render_us = render_time.as_micros() as u64,
            "cycle"
        );

        Ok(CycleReport { session: self.session, events, render_time })
    }
}

// =============================================================================
// Window Loop
// =============================================================================

/// Run the cluster in `window` until `shutdown` is requested. Returns the
/// run's stats.
///
/// The quit key and closing the window request `shutdown` themselves; any
/// other holder of the flag can stop the loop the same way.
pub fn run(
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    shutdown: &Shutdown,
) -> CycleStats {
    let mut dashboard = Dashboard::new();
    let mut selector = Selector::default();
    let mut timer = CycleTimer::new(CYCLE_INTERVAL);

    let Ok(()) = draw_frame(display, &render_cluster(dashboard.session()), selector.selected());
    window.update(display);

    info!(
        interval_ms = timer.interval().as_millis() as u64,
        status = %selector.selected(),
        "cluster running"
    );

    while !shutdown.is_requested() {
        let input = process_events(&mut selector, window.events());
        if input.quit {
            shutdown.request();
            break;
        }

        if let Some(status) = input.new_status {
            debug!(%status, "selector changed");
            let Ok(()) = draw_sidebar(display, status);
        }

        if timer.poll(Instant::now()) {
            let Ok(_report) = dashboard.run_cycle(display, selector.selected());
        }

        window.update(display);
        thread::sleep(POLL_INTERVAL.min(timer.remaining(Instant::now())));
    }

    let stats = *dashboard.stats();
    info!(
        cycles = stats.cycles,
        active_cycles = stats.active_cycles,
        max_render_us = stats.max_render_time.as_micros() as u64,
        "shutting down"
    );
    stats
}

#[cfg(test)]
mod tests {
    use embedded_graphics::{pixelcolor::RgbColor, primitives::PointsIter};

    use super::*;
    use crate::{
        config::{SCREEN_HEIGHT, SCREEN_WIDTH},
        display::CLUSTER_REGION,
    };

    fn screen() -> SimulatorDisplay<Rgb565> { SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)) }

    fn region_pixels(display: &SimulatorDisplay<Rgb565>) -> Vec<Rgb565> {
        CLUSTER_REGION.points().map(|p| display.get_pixel(p)).collect()
    }

    #[test]
    fn test_first_cycle_from_initial_session() {
        let mut dashboard = Dashboard::new();
        let mut display = screen();
        let report = dashboard.run_cycle(&mut display, CarStatus::On).unwrap();

        assert_eq!(
            (report.session.speed(), report.session.rpm(), report.session.fuel_level()),
            (5, 200, 99)
        );
        assert_eq!(dashboard.stats().cycles, 1);
        assert_eq!(dashboard.stats().active_cycles, 1);
    }

    #[test]
    fn test_off_cycle_keeps_values_and_counts() {
        let start = Session::try_new(120, 4000, 50, CarStatus::On).unwrap();
        let mut dashboard = Dashboard::with_session(start);
        let mut display = screen();

        let report = dashboard.run_cycle(&mut display, CarStatus::Off).unwrap();
        assert_eq!(report.session.speed(), 120);
        assert_eq!(report.session.rpm(), 4000);
        assert_eq!(report.session.fuel_level(), 50);
        assert_eq!(report.session.car_status(), CarStatus::Off);
        assert!(!report.events.fuel_exhausted);
        assert_eq!(dashboard.stats().cycles, 1, "OFF cycles still count");
        assert_eq!(dashboard.stats().active_cycles, 0);
    }

    #[test]
    fn test_status_read_each_cycle() {
        let mut dashboard = Dashboard::new();
        let mut display = screen();
        dashboard.run_cycle(&mut display, CarStatus::On).unwrap();
        dashboard.run_cycle(&mut display, CarStatus::Off).unwrap();
        dashboard.run_cycle(&mut display, CarStatus::Off).unwrap();
        let report = dashboard.run_cycle(&mut display, CarStatus::On).unwrap();
        assert_eq!(report.session.speed(), 10, "Two ON cycles advanced speed twice");
    }

    #[test]
    fn test_cycle_draws_cluster() {
        let mut dashboard = Dashboard::new();
        let mut display = screen();
        dashboard.run_cycle(&mut display, CarStatus::On).unwrap();
        assert!(
            region_pixels(&display).iter().any(|&c| c != Rgb565::BLACK),
            "Cluster region holds the gauges after a cycle"
        );
    }

    #[test]
    fn test_off_cycles_redraw_identical_frames() {
        let mut dashboard = Dashboard::with_session(Session::try_new(60, 2000, 80, CarStatus::Off).unwrap());
        let mut display = screen();
        dashboard.run_cycle(&mut display, CarStatus::Off).unwrap();
        let first = region_pixels(&display);
        dashboard.run_cycle(&mut display, CarStatus::Off).unwrap();
        assert!(first == region_pixels(&display), "Frozen values give a frozen picture");
    }
}
