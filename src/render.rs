//! Gauge renderer: session values to cluster descriptors.
//!
//! Pure mapping, no drawing. Given the same session the renderer always
//! returns an identical [`Cluster`], so callers can compare descriptors
//! instead of pixels.
//!
//! # Layout
//!
//! A 2x2 grid with no spacing between rows:
//!
//! ```text
//! ┌───────────────────────────────┐
//! │        SPEED (0, 0) x2        │
//! ├───────────────┬───────────────┤
//! │   RPM (1, 0)  │  FUEL (1, 1)  │
//! └───────────────┴───────────────┘
//! ```
//!
//! # Gauges
//!
//! | Gauge | Axis | Bands | Bar | Marker | Border |
//! |-------|------|-------|-----|--------|--------|
//! | Speed | 0-240 | green/yellow/red at 80, 160 | hidden | white, 4px | none |
//! | RPM | 0-8000 | green/yellow/red at 3000, 6000 | hidden | white, 2px | none |
//! | Fuel | 0-100 | none | green | none | white, 2px |

use crate::{
    colors::{BLACK, GREEN, RED, WHITE, YELLOW},
    gauge::{Axis, Band, Bar, Border, Cluster, Gauge, Grid, Marker, Panel, Readout, Slot, TickFormat, Title},
    state::Session,
    thresholds::{
        FUEL_TICK_STEP, MAX_FUEL, MAX_RPM, MAX_SPEED, RPM_GREEN_MAX, RPM_TICK_STEP, RPM_YELLOW_MAX, SPEED_GREEN_MAX,
        SPEED_TICK_STEP, SPEED_YELLOW_MAX,
    },
};

// =============================================================================
// Layout Constants
// =============================================================================

/// Heading shown above the cluster.
pub const CLUSTER_TITLE: &str = "Futuristic Instrument Cluster";

/// Two rows, two columns.
pub const CLUSTER_GRID: Grid = Grid { rows: 2, cols: 2 };

/// Speedometer: top row, centered across both columns.
pub const SPEED_SLOT: Slot = Slot { row: 0, col: 0, colspan: 2 };

/// Tachometer: bottom left.
pub const RPM_SLOT: Slot = Slot { row: 1, col: 0, colspan: 1 };

/// Fuel gauge: bottom right.
pub const FUEL_SLOT: Slot = Slot { row: 1, col: 1, colspan: 1 };

/// Font size of the speedometer title.
const SPEED_TITLE_SIZE: u32 = 18;

/// Font size of the RPM and fuel titles.
const SMALL_TITLE_SIZE: u32 = 14;

const SPEED_MARKER_WIDTH: u32 = 4;
const RPM_MARKER_WIDTH: u32 = 2;
const FUEL_BORDER_WIDTH: u32 = 2;
const FUEL_TICK_WIDTH: u32 = 1;

// =============================================================================
// Gauge Builders
// =============================================================================

/// Three-band gauge shared by the speedometer and the tachometer.
fn banded_gauge(
    title: Title,
    value: u32,
    axis: Axis,
    tick_format: TickFormat,
    green_max: u32,
    yellow_max: u32,
    marker_width: u32,
) -> Gauge {
    Gauge {
        title,
        value,
        axis,
        tick_format,
        background: None,
        bands: vec![
            Band { from: axis.min, to: green_max, color: GREEN },
            Band { from: green_max, to: yellow_max, color: YELLOW },
            Band { from: yellow_max, to: axis.max, color: RED },
        ],
        bar: Bar { color: None },
        marker: Some(Marker { value, color: WHITE, width: marker_width }),
        border: Border { width: 0, color: WHITE },
        readout: Some(Readout { color: WHITE }),
    }
}

/// Speedometer descriptor.
pub fn speed_gauge(speed: u32) -> Gauge {
    banded_gauge(
        Title { text: "Speed (km/h)", size: SPEED_TITLE_SIZE, color: WHITE },
        speed,
        Axis { min: 0, max: MAX_SPEED, tick_step: SPEED_TICK_STEP, tick_width: 0, tick_color: WHITE },
        TickFormat::Plain,
        SPEED_GREEN_MAX,
        SPEED_YELLOW_MAX,
        SPEED_MARKER_WIDTH,
    )
}

/// Tachometer descriptor.
pub fn rpm_gauge(rpm: u32) -> Gauge {
    banded_gauge(
        Title { text: "RPM", size: SMALL_TITLE_SIZE, color: WHITE },
        rpm,
        Axis { min: 0, max: MAX_RPM, tick_step: RPM_TICK_STEP, tick_width: 0, tick_color: WHITE },
        TickFormat::Thousands,
        RPM_GREEN_MAX,
        RPM_YELLOW_MAX,
        RPM_MARKER_WIDTH,
    )
}

/// Fuel descriptor: a single proportional bar, no bands.
pub fn fuel_gauge(fuel_level: u32) -> Gauge {
    Gauge {
        title: Title { text: "Fuel (%)", size: SMALL_TITLE_SIZE, color: WHITE },
        value: fuel_level,
        axis: Axis {
            min: 0,
            max: MAX_FUEL,
            tick_step: FUEL_TICK_STEP,
            tick_width: FUEL_TICK_WIDTH,
            tick_color: WHITE,
        },
        tick_format: TickFormat::Plain,
        background: None,
        bands: Vec::new(),
        bar: Bar { color: Some(GREEN) },
        marker: None,
        border: Border { width: FUEL_BORDER_WIDTH, color: WHITE },
        readout: Some(Readout { color: WHITE }),
    }
}

/// Build the full cluster view for the current session.
pub fn render_cluster(session: &Session) -> Cluster {
    Cluster {
        title: CLUSTER_TITLE,
        background: BLACK,
        font_color: WHITE,
        grid: CLUSTER_GRID,
        panels: vec![
            Panel { slot: SPEED_SLOT, gauge: speed_gauge(session.speed()) },
            Panel { slot: RPM_SLOT, gauge: rpm_gauge(session.rpm()) },
            Panel { slot: FUEL_SLOT, gauge: fuel_gauge(session.fuel_level()) },
        ],
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
