//! Color palette for the instrument cluster.
//!
//! Gauge descriptors carry library-independent [`Color`] values (plain 8-bit
//! RGB, matching the CSS named colors the cluster was designed with). The
//! display layer converts them to the panel's native `Rgb565` only at draw
//! time, via [`Color::to_rgb565`] (const, so widget styles stay compile-time
//! constants) or the equivalent `From<Color> for Rgb565` impl.
//!
//! Transparency is expressed as `Option<Color>`: `None` means "draw nothing".

use embedded_graphics::pixelcolor::Rgb565;

/// 8-bit RGB color, independent of any drawing library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Truncate to 5-6-5 bits per channel.
    #[inline]
    pub const fn to_rgb565(self) -> Rgb565 { Rgb565::new(self.r >> 3, self.g >> 2, self.b >> 3) }
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self { color.to_rgb565() }
}

// =============================================================================
// Named Colors (CSS values)
// =============================================================================

/// `black` (0, 0, 0). Page and cluster background.
pub const BLACK: Color = Color::new(0, 0, 0);

/// `white` (255, 255, 255). Font, marker and border color.
pub const WHITE: Color = Color::new(255, 255, 255);

/// `green` (0, 128, 0). Low band and fuel bar. Note: CSS green is half intensity.
pub const GREEN: Color = Color::new(0, 128, 0);

/// `yellow` (255, 255, 0). Middle band.
pub const YELLOW: Color = Color::new(255, 255, 0);

/// `red` (255, 0, 0). High band and header bar.
pub const RED: Color = Color::new(255, 0, 0);

// =============================================================================
// Chrome Colors (control panel, header)
// =============================================================================

/// Dark gray for the control panel background and dividers.
pub const GRAY: Color = Color::new(64, 64, 64);

/// Light gray for unselected option text.
pub const LIGHT_GRAY: Color = Color::new(170, 170, 170);
