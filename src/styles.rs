//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! # Optimization: Static Style Constants
//!
//! The cluster redraws every gauge once per cycle. Text styles that never
//! change color (the control panel) are `const` so they live in read-only
//! data and cost nothing at runtime.
//!
//! # Dynamic Color Styles
//!
//! Gauge and header text take their color from the descriptors, so widgets
//! build `MonoTextStyle::new(font, color)` on the fly. Only the color varies;
//! the font references below are shared.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_10_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{LIGHT_GRAY, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered on the alphabetic baseline. Used for the header and readouts.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Centered horizontally, position is the top edge. Used for gauge titles.
pub const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Centered both ways. Used for tick labels placed around the ring.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Left-aligned, position is the top edge. Used in the control panel.
pub const LEFT_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels) for tick labels.
/// Usage: `MonoTextStyle::new(LABEL_FONT, tick_color)`
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Medium font (10x20 pixels) for the header title, colored by the cluster theme.
pub const HEADER_FONT: &MonoFont = &FONT_10X20;

/// Large font for the numeric readout (`ProFont` 24pt).
pub const READOUT_FONT: &MonoFont = &PROFONT_24_POINT;

/// Pick the `ProFont` size closest to a title's point size, rounding down.
///
/// Titles are 18pt (speedometer) or 14pt (tachometer, fuel); anything smaller
/// falls back to 10pt.
pub const fn title_font(size: u32) -> &'static MonoFont<'static> {
    if size >= 18 {
        &PROFONT_18_POINT
    } else if size >= 14 {
        &PROFONT_14_POINT
    } else {
        &PROFONT_10_POINT
    }
}

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Medium white text for the control panel heading.
pub const PANEL_HEADING_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE.to_rgb565());

/// Small white text for control panel labels and the selected option.
pub const PANEL_LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE.to_rgb565());

/// Small gray text for unselected options and key hints.
pub const PANEL_HINT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, LIGHT_GRAY.to_rgb565());
