//! Declarative gauge and cluster descriptors.
//!
//! These are plain data: a description of *what* a gauge shows, with no
//! knowledge of how it gets drawn. The renderer ([`crate::render`]) builds
//! them from a session and the display layer ([`crate::display`]) turns them
//! into pixels. Any other backend could consume the same values.
//!
//! # Gauge Anatomy
//!
//! ```text
//!              title
//!         ╭────────────╮
//!      ╭──╯  ▲ marker  ╰──╮     ring: bands fill it, bar fills a
//!     ╱   ╭──────────╮    ╲     narrower concentric strip from min
//!    │    │  readout  │    │    to the value
//!   min                   max
//! ```

use crate::colors::Color;

// =============================================================================
// Gauge Parts
// =============================================================================

/// Gauge heading text and its font size in points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Title {
    pub text: &'static str,
    pub size: u32,
    pub color: Color,
}

/// Bounded axis of a gauge with its tick layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axis {
    pub min: u32,
    pub max: u32,
    /// Distance between tick labels.
    pub tick_step: u32,
    /// Tick mark stroke width; `0` hides the marks but keeps the labels.
    pub tick_width: u32,
    pub tick_color: Color,
}

impl Axis {
    /// Tick values from `min` to `max` inclusive.
    pub fn ticks(&self) -> impl Iterator<Item = u32> + '_ {
        (self.min..=self.max).step_by(self.tick_step.max(1) as usize)
    }

    /// Position of `value` along the axis in `[0.0, 1.0]`, clamped.
    pub fn fraction(
        &self,
        value: u32,
    ) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }
        let clamped = value.clamp(self.min, self.max);
        (clamped - self.min) as f32 / (self.max - self.min) as f32
    }
}

/// How tick labels are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Plain integer: `0`, `40`, `80`.
    Plain,
    /// Thousands with a `k` suffix: `0`, `2k`, `4k`.
    Thousands,
}

/// A colored sub-range of the axis, `[from, to)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub from: u32,
    pub to: u32,
    pub color: Color,
}

/// A line across the ring at one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    pub value: u32,
    pub color: Color,
    pub width: u32,
}

/// Value bar from the axis minimum to the current value. `None` color = invisible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bar {
    pub color: Option<Color>,
}

/// Outline around the ring. Width `0` draws nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Border {
    pub width: u32,
    pub color: Color,
}

/// Numeric readout of the current value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Readout {
    pub color: Color,
}

// =============================================================================
// Gauge
// =============================================================================

/// Complete description of one gauge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gauge {
    pub title: Title,
    pub value: u32,
    pub axis: Axis,
    pub tick_format: TickFormat,
    /// Ring background; `None` is transparent.
    pub background: Option<Color>,
    pub bands: Vec<Band>,
    pub bar: Bar,
    pub marker: Option<Marker>,
    pub border: Border,
    /// `None` hides the number (gauge-only mode).
    pub readout: Option<Readout>,
}

// =============================================================================
// Cluster Layout
// =============================================================================

/// Cell of the layout grid a gauge occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub row: u32,
    pub col: u32,
    pub colspan: u32,
}

/// Grid dimensions of the cluster layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub rows: u32,
    pub cols: u32,
}

/// A gauge placed in the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    pub slot: Slot,
    pub gauge: Gauge,
}

/// The whole rendered view for one cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cluster {
    pub title: &'static str,
    pub background: Color,
    pub font_color: Color,
    pub grid: Grid,
    pub panels: Vec<Panel>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;

    fn axis(
        min: u32,
        max: u32,
        tick_step: u32,
    ) -> Axis {
        Axis { min, max, tick_step, tick_width: 0, tick_color: WHITE }
    }

    #[test]
    fn test_axis_ticks_include_both_ends() {
        let ticks: Vec<u32> = axis(0, 100, 25).ticks().collect();
        assert_eq!(ticks, vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn test_axis_ticks_zero_step_does_not_hang() {
        let ticks: Vec<u32> = axis(0, 3, 0).ticks().collect();
        assert_eq!(ticks, vec![0, 1, 2, 3], "Zero step falls back to 1");
    }

    #[test]
    fn test_axis_fraction() {
        let a = axis(0, 240, 40);
        assert_eq!(a.fraction(0), 0.0);
        assert_eq!(a.fraction(120), 0.5);
        assert_eq!(a.fraction(240), 1.0);
        assert_eq!(a.fraction(999), 1.0, "Values past max clamp to the end");
    }

    #[test]
    fn test_axis_fraction_degenerate() {
        assert_eq!(axis(5, 5, 1).fraction(5), 0.0, "Empty axis never divides by zero");
    }
}
