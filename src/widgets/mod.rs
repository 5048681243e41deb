//! Widget components for the instrument cluster display.
//!
//! - [`dial`]: one semicircular gauge drawn from a [`Gauge`](crate::gauge::Gauge) descriptor
//! - [`header`]: title bar and the panel divider
//! - [`sidebar`]: the car status control panel
//! - [`primitives`]: dial geometry and arc drawing shared by the above
//!
//! Every drawing function is generic over `DrawTarget<Color = Rgb565>` and
//! returns the target's error, so the same widgets draw into the simulator
//! window and into off-screen buffers in tests.

mod dial;
mod header;
mod primitives;
mod sidebar;

pub use dial::{DialGeometry, draw_dial, tick_label};
pub use header::{draw_divider, draw_header};
pub use primitives::{arc_points, draw_arc, draw_radial_line, fraction_angle, point_on_arc};
pub use sidebar::{draw_sidebar, option_rect};
