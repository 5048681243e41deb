//! Application configuration constants.
//!
//! Everything here is fixed at compile time. The cluster has no runtime
//! configuration surface: no CLI flags, no config file, no environment
//! variables (apart from `RUST_LOG`, which only the logging layer reads).
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │           FUTURISTIC INSTRUMENT CLUSTER (header)          │  26px
//! ├──────────┬───────────────────────────────────────────────┤
//! │ CONTROLS │                 SPEED (row 0, colspan 2)        │
//! │          │                                               │
//! │ CAR      ├───────────────────────┬───────────────────────┤
//! │ STATUS   │     RPM (row 1, 0)    │    FUEL (row 1, 1)    │
//! │ [ON]     │                       │                       │
//! │  OFF     │                       │                       │
//! └──────────┴───────────────────────┴───────────────────────┘
//!    96px                   cluster region
//! ```

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Simulator framebuffer width in pixels.
pub const SCREEN_WIDTH: u32 = 480;

/// Simulator framebuffer height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

/// Window pixel scale (each framebuffer pixel is drawn as a 2x2 block).
pub const WINDOW_SCALE: u32 = 2;

/// Window title.
pub const WINDOW_TITLE: &str = "Futuristic Instrument Cluster";

// =============================================================================
// Timing Configuration
// =============================================================================

/// Delay between two update/render/display cycles.
pub const CYCLE_INTERVAL: Duration = Duration::from_secs(1);

/// How often window events are polled between cycles.
/// Keeps the control input and the quit request responsive.
pub const POLL_INTERVAL: Duration = Duration::from_millis(20);

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Width of the control panel on the left edge.
pub const SIDEBAR_WIDTH: u32 = 96;

/// Left edge of the cluster placeholder region.
pub const CLUSTER_X: u32 = SIDEBAR_WIDTH;

/// Top edge of the cluster placeholder region.
pub const CLUSTER_Y: u32 = HEADER_HEIGHT;

/// Width of the cluster placeholder region.
pub const CLUSTER_WIDTH: u32 = SCREEN_WIDTH - SIDEBAR_WIDTH;

/// Height of the cluster placeholder region.
pub const CLUSTER_HEIGHT: u32 = SCREEN_HEIGHT - HEADER_HEIGHT;

/// Cluster margins, scaled from the 50/20/20/20 px margins of a 600 px tall layout.
pub const MARGIN_TOP: u32 = 12;
pub const MARGIN_BOTTOM: u32 = 6;
pub const MARGIN_LEFT: u32 = 6;
pub const MARGIN_RIGHT: u32 = 6;

/// Number of straight segments used to approximate a full 180° gauge arc.
pub const ARC_SEGMENTS: usize = 90;

/// Ring thickness as a fraction of the dial radius.
pub const RING_THICKNESS_RATIO: f32 = 0.25;

/// Bar thickness as a fraction of the ring thickness.
pub const BAR_THICKNESS_RATIO: f32 = 0.6;

const _: () = assert!(CLUSTER_WIDTH > MARGIN_LEFT + MARGIN_RIGHT);
const _: () = assert!(CLUSTER_HEIGHT > MARGIN_TOP + MARGIN_BOTTOM);
