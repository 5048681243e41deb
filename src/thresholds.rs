//! Centralized value ranges and gauge band boundaries.
//!
//! All thresholds are compile-time constants with validation assertions, so
//! the updater, the renderer and the tests agree on a single set of numbers.
//! If the bands are reordered incorrectly (e.g. `SPEED_YELLOW_MAX <
//! SPEED_GREEN_MAX`), compilation fails.

// =============================================================================
// Speed (km/h)
// =============================================================================

/// Exclusive upper bound of the speed counter. The gauge axis spans `[0, MAX_SPEED]`.
pub const MAX_SPEED: u32 = 240;

/// Speed added on every ON cycle.
pub const SPEED_STEP: u32 = 5;

/// End of the green speed band (`[0, 80)`).
pub const SPEED_GREEN_MAX: u32 = 80;

/// End of the yellow speed band (`[80, 160)`). Red runs from here to `MAX_SPEED`.
pub const SPEED_YELLOW_MAX: u32 = 160;

/// Distance between speed tick labels.
pub const SPEED_TICK_STEP: u32 = 40;

const _: () = assert!(SPEED_GREEN_MAX < SPEED_YELLOW_MAX);
const _: () = assert!(SPEED_YELLOW_MAX < MAX_SPEED);
const _: () = assert!(SPEED_STEP < MAX_SPEED);

// =============================================================================
// Engine Speed (RPM)
// =============================================================================

/// Exclusive upper bound of the RPM counter. The gauge axis spans `[0, MAX_RPM]`.
pub const MAX_RPM: u32 = 8000;

/// RPM added on every ON cycle.
pub const RPM_STEP: u32 = 200;

/// End of the green RPM band (`[0, 3000)`).
pub const RPM_GREEN_MAX: u32 = 3000;

/// End of the yellow RPM band (`[3000, 6000)`). Red runs from here to `MAX_RPM`.
pub const RPM_YELLOW_MAX: u32 = 6000;

/// Distance between RPM tick labels (labelled in thousands: `2k`, `4k`, ...).
pub const RPM_TICK_STEP: u32 = 2000;

const _: () = assert!(RPM_GREEN_MAX < RPM_YELLOW_MAX);
const _: () = assert!(RPM_YELLOW_MAX < MAX_RPM);
const _: () = assert!(RPM_STEP < MAX_RPM);

// =============================================================================
// Fuel Level (%)
// =============================================================================

/// Full tank. Fuel starts here and is never replenished.
pub const MAX_FUEL: u32 = 100;

/// Fuel burned on every ON cycle. The level clamps at zero.
pub const FUEL_BURN: u32 = 1;

/// Distance between fuel tick labels.
pub const FUEL_TICK_STEP: u32 = 25;

const _: () = assert!(FUEL_BURN <= MAX_FUEL);
const _: () = assert!(MAX_FUEL % FUEL_TICK_STEP == 0);

