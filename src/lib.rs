// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32->f32 in dial geometry
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for screen coordinates
#![allow(clippy::cast_sign_loss)] // f32->u32 where the value is known positive

//! Simulated vehicle instrument cluster.
//!
//! Three counters (speed, RPM, fuel level) advance once per second while the
//! car is ON and are shown as three semicircular gauges: the speedometer on
//! top spanning the full width, the tachometer and fuel gauge side by side
//! below. A control panel on the left selects ON or OFF.
//!
//! # Pipeline
//!
//! ```text
//! Selector ──status──▶ Session::advance ──▶ render_cluster ──▶ draw_cluster
//!  (input)              (state)              (render)           (display)
//! ```
//!
//! - [`state`]: the session values and the update policy
//! - [`render`]: session to [`gauge::Cluster`] descriptor, pure
//! - [`display`] and [`widgets`]: descriptor to pixels on any `DrawTarget`
//! - [`input`]: keyboard and window events to selector actions
//! - [`timing`]: the 1 s cycle timer and the shutdown hook
//! - [`app`]: the cycle pipeline and the window loop
//!
//! # Configuration
//!
//! Compile-time only: [`config`] for screen, timing and layout, [`thresholds`]
//! for value ranges and band boundaries. `RUST_LOG` tunes logging.

pub mod app;
pub mod colors;
pub mod config;
pub mod display;
pub mod error;
pub mod gauge;
pub mod input;
pub mod logging;
pub mod render;
pub mod state;
pub mod styles;
pub mod thresholds;
pub mod timing;
pub mod widgets;

pub use error::ClusterError;
