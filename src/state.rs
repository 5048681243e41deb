//! Session state and the per-cycle update policy.
//!
//! The [`Session`] holds the four tracked values for the whole process run:
//!
//! | Value | Range | On each ON cycle |
//! |-------|-------|------------------|
//! | speed | `[0, 240)` | `+5`, wraps via modulo |
//! | rpm | `[0, 8000)` | `+200`, wraps via modulo |
//! | fuel level | `[0, 100]` | `-1`, clamps at 0, never refilled |
//! | car status | ON / OFF | set by the control input |
//!
//! When the car is OFF, an update leaves every value untouched.
//!
//! # Range Guarantee
//!
//! Fields are private. A session is either the initial one ([`Session::new`])
//! or built through [`Session::try_new`], which rejects out-of-range values.
//! The update step preserves the ranges, so every `Session` in existence is
//! valid and the update itself needs no error path.
//!
//! # Fuel
//!
//! Reaching zero fuel does not switch the car off and nothing refills the
//! tank. [`Session::advance`] reports the cycle on which the tank ran dry so
//! the application can log it, but the behaviour is otherwise unchanged.

use core::fmt;

use crate::{
    error::ClusterError,
    thresholds::{FUEL_BURN, MAX_FUEL, MAX_RPM, MAX_SPEED, RPM_STEP, SPEED_STEP},
};

// =============================================================================
// Car Status
// =============================================================================

/// Ignition state chosen by the control input.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Hash)]
pub enum CarStatus {
    /// Values advance every cycle.
    #[default]
    On,

    /// Values are frozen.
    Off,
}

impl CarStatus {
    /// Selector options in display order.
    pub const ALL: [Self; 2] = [Self::On, Self::Off];

    /// Label shown in the control panel and in log output.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
        }
    }

    /// Switch to the other state.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    #[inline]
    pub const fn is_on(self) -> bool { matches!(self, Self::On) }
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

// =============================================================================
// Session
// =============================================================================

/// What happened during one [`Session::advance`] call.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct CycleEvents {
    /// Fuel hit zero on this cycle (true only on the transition).
    pub fuel_exhausted: bool,
}

/// The tracked values, persisted across cycles for one process run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Session {
    speed: u32,
    rpm: u32,
    fuel_level: u32,
    car_status: CarStatus,
}

impl Session {
    /// Initial session: standing still, engine idle at 0, full tank, car ON.
    pub const fn new() -> Self {
        Self {
            speed: 0,
            rpm: 0,
            fuel_level: MAX_FUEL,
            car_status: CarStatus::On,
        }
    }

    /// Build a session from explicit values, rejecting anything out of range.
    pub fn try_new(
        speed: u32,
        rpm: u32,
        fuel_level: u32,
        car_status: CarStatus,
    ) -> Result<Self, ClusterError> {
        if speed >= MAX_SPEED {
            return Err(ClusterError::OutOfRange { field: "speed", value: speed, max: MAX_SPEED - 1 });
        }
        if rpm >= MAX_RPM {
            return Err(ClusterError::OutOfRange { field: "rpm", value: rpm, max: MAX_RPM - 1 });
        }
        if fuel_level > MAX_FUEL {
            return Err(ClusterError::OutOfRange { field: "fuel_level", value: fuel_level, max: MAX_FUEL });
        }
        Ok(Self { speed, rpm, fuel_level, car_status })
    }

    #[inline]
    pub const fn speed(&self) -> u32 { self.speed }

    #[inline]
    pub const fn rpm(&self) -> u32 { self.rpm }

    #[inline]
    pub const fn fuel_level(&self) -> u32 { self.fuel_level }

    #[inline]
    pub const fn car_status(&self) -> CarStatus { self.car_status }

    /// Store the control input. Returns `true` if the status changed.
    pub const fn set_car_status(
        &mut self,
        status: CarStatus,
    ) -> bool {
        let changed = !matches!(
            (self.car_status, status),
            (CarStatus::On, CarStatus::On) | (CarStatus::Off, CarStatus::Off)
        );
        self.car_status = status;
        changed
    }

    /// The session one cycle later.
    ///
    /// Identity when OFF. When ON, speed and rpm step forward and wrap, fuel
    /// drops by one and clamps at zero.
    #[must_use]
    pub const fn advanced(self) -> Self {
        if !self.car_status.is_on() {
            return self;
        }
        Self {
            speed: (self.speed + SPEED_STEP) % MAX_SPEED,
            rpm: (self.rpm + RPM_STEP) % MAX_RPM,
            fuel_level: self.fuel_level.saturating_sub(FUEL_BURN),
            car_status: self.car_status,
        }
    }

    /// Advance in place and report what happened.
    pub fn advance(&mut self) -> CycleEvents {
        let before = *self;
        *self = before.advanced();
        CycleEvents { fuel_exhausted: before.fuel_level > 0 && self.fuel_level == 0 }
    }
}

impl Default for Session {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
