//! Semicircular gauge dial.
//!
//! Draws one [`Gauge`] descriptor inside a pixel rectangle. Draw order is
//! back to front so later layers sit on top:
//!
//! 1. Ring background (if any)
//! 2. Colored bands
//! 3. Value bar (narrower, concentric)
//! 4. Border around the ring
//! 5. Tick marks and tick labels
//! 6. Marker across the ring
//! 7. Title above, readout under the arc
//!
//! # Fitting
//!
//! The dial radius is the largest that fits the rectangle once the title and
//! the tick labels have their room. The center sits near the bottom edge, so
//! the half dial fills the slot.
//!
//! # Optimizations
//!
//! Tick labels and the readout are formatted into `heapless::String`, and
//! arcs into a stack vertex buffer (see [`super::primitives`]).

use core::fmt::Write;

use embedded_graphics::{mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*, primitives::Rectangle, text::Text};
use heapless::String;

use super::primitives::{draw_arc, draw_radial_line, fraction_angle, point_on_arc};
use crate::{
    config::{BAR_THICKNESS_RATIO, RING_THICKNESS_RATIO},
    gauge::{Gauge, TickFormat},
    styles::{CENTERED, CENTERED_MIDDLE, CENTERED_TOP, LABEL_FONT, READOUT_FONT, title_font},
};

// =============================================================================
// Dial Layout Constants
// =============================================================================

/// Gap between the slot top and the title.
const TITLE_TOP_PAD: i32 = 2;

/// Gap between the title and the top of the tick labels.
const TITLE_GAP: i32 = 4;

/// Room kept around the ring for tick labels (one label height plus a gap).
const LABEL_ROOM: i32 = 14;

/// Tick labels sit this far outside the ring.
const LABEL_OFFSET: f32 = 9.0;

/// Tick marks extend this far outside the ring.
const TICK_LENGTH: f32 = 4.0;

/// Space kept below the center line for the end labels.
const BOTTOM_PAD: i32 = 8;

/// Gap between the readout baseline and the center line.
const READOUT_LIFT: i32 = 4;

/// Smallest radius worth drawing.
const MIN_RADIUS: i32 = 8;

// =============================================================================
// Geometry
// =============================================================================

/// Pixel geometry of one dial, derived from its slot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialGeometry {
    pub center: Point,
    /// Outer radius of the ring.
    pub radius: f32,
    /// Ring thickness.
    pub thickness: f32,
    /// Top-center anchor of the title.
    pub title_pos: Point,
}

impl DialGeometry {
    /// Fit a dial into `area`, leaving room for a title of `title_height` px.
    ///
    /// Returns `None` when the area is too small to hold a dial.
    pub fn fit(
        area: &Rectangle,
        title_height: u32,
    ) -> Option<Self> {
        let top = area.top_left.y;
        let left = area.top_left.x;
        let width = area.size.width as i32;
        let height = area.size.height as i32;

        let dial_top = top + TITLE_TOP_PAD + title_height as i32 + TITLE_GAP + LABEL_ROOM;
        let center_y = top + height - BOTTOM_PAD;
        let radius = (center_y - dial_top).min(width / 2 - 2 * LABEL_ROOM);
        if radius < MIN_RADIUS {
            return None;
        }

        let center = Point::new(left + width / 2, center_y);
        Some(Self {
            center,
            radius: radius as f32,
            thickness: (radius as f32 * RING_THICKNESS_RATIO).round().max(1.0),
            title_pos: Point::new(center.x, top + TITLE_TOP_PAD),
        })
    }

    /// Radius of the ring's center line.
    #[inline]
    pub fn mid_radius(&self) -> f32 { self.radius - self.thickness / 2.0 }

    /// Inner edge of the ring.
    #[inline]
    pub fn inner_radius(&self) -> f32 { self.radius - self.thickness }
}

// =============================================================================
// Drawing
// =============================================================================

/// Format a tick value for display.
pub fn tick_label(
    value: u32,
    format: TickFormat,
) -> String<8> {
    let mut label: String<8> = String::new();
    match format {
        TickFormat::Plain => {
            let _ = write!(label, "{value}");
        }
        TickFormat::Thousands if value == 0 => {
            let _ = write!(label, "0");
        }
        TickFormat::Thousands => {
            let _ = write!(label, "{}k", value / 1000);
        }
    }
    label
}

/// Draw `gauge` inside `area`.
///
/// Areas too small for a dial are skipped silently.
pub fn draw_dial<D>(
    display: &mut D,
    gauge: &Gauge,
    area: &Rectangle,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let font = title_font(gauge.title.size);
    let Some(geo) = DialGeometry::fit(area, font.character_size.height) else {
        return Ok(());
    };
    let ring = geo.thickness as u32;
    let axis = &gauge.axis;

    if let Some(bg) = gauge.background {
        draw_arc(display, geo.center, geo.mid_radius(), 0.0, 1.0, bg.into(), ring)?;
    }

    for band in &gauge.bands {
        draw_arc(
            display,
            geo.center,
            geo.mid_radius(),
            axis.fraction(band.from),
            axis.fraction(band.to),
            band.color.into(),
            ring,
        )?;
    }

    if let Some(color) = gauge.bar.color {
        let bar = (geo.thickness * BAR_THICKNESS_RATIO).round().max(1.0) as u32;
        draw_arc(display, geo.center, geo.mid_radius(), 0.0, axis.fraction(gauge.value), color.into(), bar)?;
    }

    let border = gauge.border;
    if border.width > 0 {
        let color: Rgb565 = border.color.into();
        draw_arc(display, geo.center, geo.radius, 0.0, 1.0, color, border.width)?;
        draw_arc(display, geo.center, geo.inner_radius(), 0.0, 1.0, color, border.width)?;
        draw_radial_line(display, geo.center, geo.inner_radius(), geo.radius, 0.0, color, border.width)?;
        draw_radial_line(display, geo.center, geo.inner_radius(), geo.radius, 1.0, color, border.width)?;
    }

    let label_style = MonoTextStyle::new(LABEL_FONT, axis.tick_color.to_rgb565());
    for tick in axis.ticks() {
        let fraction = axis.fraction(tick);
        draw_radial_line(
            display,
            geo.center,
            geo.radius,
            geo.radius + TICK_LENGTH,
            fraction,
            axis.tick_color.into(),
            axis.tick_width,
        )?;
        let pos = point_on_arc(geo.center, geo.radius + LABEL_OFFSET, fraction_angle(fraction));
        Text::with_text_style(&tick_label(tick, gauge.tick_format), pos, label_style, CENTERED_MIDDLE)
            .draw(display)?;
    }

    if let Some(marker) = gauge.marker {
        draw_radial_line(
            display,
            geo.center,
            geo.inner_radius(),
            geo.radius,
            axis.fraction(marker.value),
            marker.color.into(),
            marker.width,
        )?;
    }

    let title_style = MonoTextStyle::new(font, gauge.title.color.to_rgb565());
    Text::with_text_style(gauge.title.text, geo.title_pos, title_style, CENTERED_TOP).draw(display)?;

    if let Some(readout) = gauge.readout {
        let mut value_str: String<12> = String::new();
        let _ = write!(value_str, "{}", gauge.value);
        let pos = Point::new(geo.center.x, geo.center.y - READOUT_LIFT);
        let readout_style = MonoTextStyle::new(READOUT_FONT, readout.color.to_rgb565());
        Text::with_text_style(&value_str, pos, readout_style, CENTERED).draw(display)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use embedded_graphics::{pixelcolor::RgbColor, primitives::PointsIter};
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::{
        colors::{GREEN, RED, YELLOW},
        render::{fuel_gauge, rpm_gauge, speed_gauge},
    };

    const AREA: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(372, 138));

    fn draw(gauge: &Gauge) -> SimulatorDisplay<Rgb565> {
        let mut display = SimulatorDisplay::new(AREA.size);
        draw_dial(&mut display, gauge, &AREA).unwrap();
        display
    }

    fn pixels(display: &SimulatorDisplay<Rgb565>) -> Vec<Rgb565> {
        AREA.points().map(|p| display.get_pixel(p)).collect()
    }

    fn geometry(gauge: &Gauge) -> DialGeometry {
        DialGeometry::fit(&AREA, title_font(gauge.title.size).character_size.height).unwrap()
    }

    /// Pixel on the ring's center line at an axis value.
    fn ring_pixel(
        display: &SimulatorDisplay<Rgb565>,
        gauge: &Gauge,
        value: u32,
    ) -> Rgb565 {
        let geo = geometry(gauge);
        let angle = fraction_angle(gauge.axis.fraction(value));
        display.get_pixel(point_on_arc(geo.center, geo.mid_radius(), angle))
    }

    // -------------------------------------------------------------------------
    // Geometry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_fit_stays_inside_area() {
        let geo = DialGeometry::fit(&AREA, 22).unwrap();
        assert!(geo.center.y < AREA.size.height as i32);
        assert!(geo.center.y - geo.radius as i32 > 22, "Ring top clears the title");
        assert!(geo.center.x - geo.radius as i32 >= LABEL_ROOM, "Left labels fit");
        assert_eq!(geo.center.x, AREA.center().x);
    }

    #[test]
    fn test_fit_rejects_tiny_area() {
        let tiny = Rectangle::new(Point::zero(), Size::new(20, 20));
        assert!(DialGeometry::fit(&tiny, 10).is_none());
    }

    #[test]
    fn test_tick_labels() {
        assert_eq!(tick_label(40, TickFormat::Plain).as_str(), "40");
        assert_eq!(tick_label(0, TickFormat::Thousands).as_str(), "0");
        assert_eq!(tick_label(2000, TickFormat::Thousands).as_str(), "2k");
        assert_eq!(tick_label(8000, TickFormat::Thousands).as_str(), "8k");
    }

    // -------------------------------------------------------------------------
    // Pixel Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_speed_bands_are_colored() {
        let gauge = speed_gauge(0);
        let display = draw(&gauge);
        assert_eq!(ring_pixel(&display, &gauge, 40), Rgb565::from(GREEN), "Middle of the green band");
        assert_eq!(ring_pixel(&display, &gauge, 120), Rgb565::from(YELLOW), "Middle of the yellow band");
        assert_eq!(ring_pixel(&display, &gauge, 200), Rgb565::from(RED), "Middle of the red band");
    }

    #[test]
    fn test_marker_crosses_the_ring() {
        let gauge = speed_gauge(120);
        let display = draw(&gauge);
        assert_eq!(ring_pixel(&display, &gauge, 120), Rgb565::WHITE, "Marker covers the band at the value");
    }

    #[test]
    fn test_fuel_bar_length_follows_level() {
        let gauge = fuel_gauge(50);
        let display = draw(&gauge);
        assert_eq!(ring_pixel(&display, &gauge, 25), Rgb565::from(GREEN), "Filled below the level");
        assert_eq!(ring_pixel(&display, &gauge, 75), Rgb565::BLACK, "Empty above the level");
    }

    #[test]
    fn test_empty_fuel_draws_no_bar() {
        let gauge = fuel_gauge(0);
        let display = draw(&gauge);
        assert_eq!(ring_pixel(&display, &gauge, 50), Rgb565::BLACK);
    }

    #[test]
    fn test_same_gauge_same_pixels() {
        let gauge = rpm_gauge(4200);
        assert!(pixels(&draw(&gauge)) == pixels(&draw(&gauge)), "Drawing is deterministic");
    }

    #[test]
    fn test_different_values_different_pixels() {
        assert!(pixels(&draw(&rpm_gauge(1000))) != pixels(&draw(&rpm_gauge(7000))));
    }
}
