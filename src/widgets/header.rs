//! Header bar and panel divider rendering.
//!
//! # Optimizations Applied
//!
//! ## 1. Pre-computed Position Constants
//! The header rectangle, title anchor and divider endpoints are `const Point`
//! and `const Size` values derived from the layout in [`crate::config`].
//!
//! ## 2. Const `PrimitiveStyle`
//! `PrimitiveStyle::with_fill` and `with_stroke` are const fn in embedded-graphics 0.8,
//! and [`Color::to_rgb565`](crate::colors::Color::to_rgb565) is const too, so
//! `HEADER_FILL_STYLE` and `DIVIDER_STYLE` are computed at compile time.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};

use crate::{
    colors::{Color, GRAY, RED},
    config::{HEADER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, SIDEBAR_WIDTH},
    styles::{CENTERED, HEADER_FONT},
};

// =============================================================================
// Header Layout Constants
// =============================================================================

/// Baseline anchor of the title text (centered horizontally).
const HEADER_TITLE_POS: Point = Point::new((SCREEN_WIDTH / 2) as i32, 19);

/// Top-left corner of header rectangle.
const HEADER_RECT_POS: Point = Point::new(0, 0);

/// Size of header rectangle (full width).
const HEADER_RECT_SIZE: Size = Size::new(SCREEN_WIDTH, HEADER_HEIGHT);

/// Vertical divider between the control panel and the cluster.
const DIV_START: Point = Point::new((SIDEBAR_WIDTH - 1) as i32, HEADER_HEIGHT as i32);
/// Divider end point (last pixel row, not `SCREEN_HEIGHT`).
const DIV_END: Point = Point::new((SIDEBAR_WIDTH - 1) as i32, (SCREEN_HEIGHT - 1) as i32);

// =============================================================================
// Pre-computed Primitive Styles
// =============================================================================

/// Gray stroke style for the divider line (1px wide).
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY.to_rgb565(), 1);

/// Red fill style for header background.
const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED.to_rgb565());

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the header bar with the page title.
///
/// The header is a red rectangle spanning the full width of the display with
/// `title` centered in `font_color`.
pub fn draw_header<D>(
    display: &mut D,
    title: &str,
    font_color: Color,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(HEADER_RECT_POS, HEADER_RECT_SIZE)
        .into_styled(HEADER_FILL_STYLE)
        .draw(display)?;

    let style = MonoTextStyle::new(HEADER_FONT, font_color.to_rgb565());
    Text::with_text_style(title, HEADER_TITLE_POS, style, CENTERED).draw(display)?;
    Ok(())
}

/// Draw the divider between the control panel and the cluster region.
pub fn draw_divider<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(DIV_START, DIV_END).into_styled(DIVIDER_STYLE).draw(display)
}
