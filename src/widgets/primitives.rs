//! Low-level drawing primitives shared across widgets.
//!
//! # Dial Geometry
//!
//! Every gauge is a half dial: the axis minimum sits at 9 o'clock, the
//! maximum at 3 o'clock, and values sweep clockwise over the top. A value at
//! axis fraction `f` lies at angle `θ = π·(1 − f)` measured counter-clockwise
//! from 3 o'clock, so on screen (y grows downward):
//!
//! ```text
//! x = cx + r·cos θ
//! y = cy − r·sin θ
//! ```
//!
//! Arcs are approximated by a polyline with up to `ARC_SEGMENTS` segments per
//! half turn and stroked with the requested thickness. The strip covered by
//! an arc drawn at radius `r` with thickness `t` is `[r − t/2, r + t/2]`.
//!
//! # Optimization: Stack Point Buffer
//!
//! Polyline vertices go into a `heapless::Vec` sized for the longest arc, so
//! drawing a gauge never touches the heap.

use core::f32::consts::PI;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Polyline},
};
use heapless::Vec;

use crate::config::ARC_SEGMENTS;

/// Capacity of the vertex buffer: one more point than segments.
const ARC_POINTS: usize = ARC_SEGMENTS + 1;

/// Angle (radians, counter-clockwise from 3 o'clock) of an axis fraction.
#[inline]
pub fn fraction_angle(fraction: f32) -> f32 { PI * (1.0 - fraction.clamp(0.0, 1.0)) }

/// Screen point at `radius` from `center` along `angle`.
pub fn point_on_arc(
    center: Point,
    radius: f32,
    angle: f32,
) -> Point {
    Point::new(
        center.x + (radius * angle.cos()).round() as i32,
        center.y - (radius * angle.sin()).round() as i32,
    )
}

/// Vertices of the arc between two axis fractions.
///
/// Returns an empty buffer when the span is empty. Segment count is
/// proportional to the span so short arcs stay cheap.
pub fn arc_points(
    center: Point,
    radius: f32,
    from: f32,
    to: f32,
) -> Vec<Point, ARC_POINTS> {
    let mut points = Vec::new();
    let from = from.clamp(0.0, 1.0);
    let to = to.clamp(0.0, 1.0);
    if to <= from {
        return points;
    }

    let segments = ((ARC_SEGMENTS as f32 * (to - from)).ceil() as usize).clamp(1, ARC_SEGMENTS);
    for i in 0..=segments {
        let fraction = from + (to - from) * i as f32 / segments as f32;
        // Capacity is ARC_SEGMENTS + 1, never exceeded
        let _ = points.push(point_on_arc(center, radius, fraction_angle(fraction)));
    }
    points
}

/// Stroke an arc between two axis fractions.
pub fn draw_arc<D>(
    display: &mut D,
    center: Point,
    radius: f32,
    from: f32,
    to: f32,
    color: Rgb565,
    thickness: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if thickness == 0 {
        return Ok(());
    }
    let points = arc_points(center, radius, from, to);
    if points.len() < 2 {
        return Ok(());
    }
    Polyline::new(&points)
        .into_styled(PrimitiveStyle::with_stroke(color, thickness))
        .draw(display)
}

/// Stroke a radial line between two radii at one axis fraction.
pub fn draw_radial_line<D>(
    display: &mut D,
    center: Point,
    inner: f32,
    outer: f32,
    fraction: f32,
    color: Rgb565,
    width: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if width == 0 {
        return Ok(());
    }
    let angle = fraction_angle(fraction);
    Line::new(point_on_arc(center, inner, angle), point_on_arc(center, outer, angle))
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;

    const CENTER: Point = Point::new(100, 100);

    #[test]
    fn test_fraction_angle_endpoints() {
        assert!((fraction_angle(0.0) - PI).abs() < 1e-6, "Minimum sits at 9 o'clock");
        assert!((fraction_angle(0.5) - PI / 2.0).abs() < 1e-6, "Midpoint sits at 12 o'clock");
        assert!(fraction_angle(1.0).abs() < 1e-6, "Maximum sits at 3 o'clock");
        assert!(fraction_angle(2.0).abs() < 1e-6, "Fractions past 1 clamp");
    }

    #[test]
    fn test_point_on_arc_cardinal_points() {
        assert_eq!(point_on_arc(CENTER, 50.0, fraction_angle(0.0)), Point::new(50, 100));
        assert_eq!(point_on_arc(CENTER, 50.0, fraction_angle(0.5)), Point::new(100, 50));
        assert_eq!(point_on_arc(CENTER, 50.0, fraction_angle(1.0)), Point::new(150, 100));
    }

    #[test]
    fn test_arc_points_span() {
        let full = arc_points(CENTER, 50.0, 0.0, 1.0);
        assert_eq!(full.len(), ARC_SEGMENTS + 1, "Full sweep uses every segment");
        assert_eq!(full.first(), Some(&Point::new(50, 100)));
        assert_eq!(full.last(), Some(&Point::new(150, 100)));

        let third = arc_points(CENTER, 50.0, 0.0, 1.0 / 3.0);
        assert!(third.len() < full.len(), "Shorter arcs use fewer segments");
    }

    #[test]
    fn test_arc_points_empty_span() {
        assert!(arc_points(CENTER, 50.0, 0.5, 0.5).is_empty());
        assert!(arc_points(CENTER, 50.0, 0.7, 0.2).is_empty(), "Reversed span draws nothing");
    }

    #[test]
    fn test_draw_arc_colors_the_strip() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(200, 120));
        draw_arc(&mut display, CENTER, 50.0, 0.0, 1.0, Rgb565::RED, 10).unwrap();

        assert_eq!(display.get_pixel(Point::new(100, 50)), Rgb565::RED, "Top of the arc is stroked");
        assert_eq!(display.get_pixel(CENTER), Rgb565::BLACK, "Center stays clear");
        assert_eq!(display.get_pixel(Point::new(100, 30)), Rgb565::BLACK, "Outside the strip stays clear");
    }

    #[test]
    fn test_zero_width_draws_nothing() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(200, 120));
        draw_arc(&mut display, CENTER, 50.0, 0.0, 1.0, Rgb565::RED, 0).unwrap();
        draw_radial_line(&mut display, CENTER, 0.0, 50.0, 0.5, Rgb565::RED, 0).unwrap();
        assert_eq!(display.get_pixel(Point::new(100, 50)), Rgb565::BLACK);
        assert_eq!(display.get_pixel(Point::new(100, 75)), Rgb565::BLACK);
    }

    #[test]
    fn test_radial_line() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(200, 120));
        draw_radial_line(&mut display, CENTER, 20.0, 50.0, 0.5, Rgb565::WHITE, 1).unwrap();
        assert_eq!(display.get_pixel(Point::new(100, 65)), Rgb565::WHITE, "Vertical line at 12 o'clock");
        assert_eq!(display.get_pixel(Point::new(100, 90)), Rgb565::BLACK, "Nothing inside the inner radius");
    }
}
