//! Futuristic Instrument Cluster: desktop window binary.
//!
//! Opens the simulator window and runs the cycle loop until `Q` is pressed
//! or the window is closed.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};
use instrument_cluster::{
    app,
    config::{CYCLE_INTERVAL, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_SCALE, WINDOW_TITLE},
    logging::init_tracing,
    timing::Shutdown,
};
use tracing::info;

fn main() {
    init_tracing();
    info!(
        width = SCREEN_WIDTH,
        height = SCREEN_HEIGHT,
        scale = WINDOW_SCALE,
        cycle_ms = CYCLE_INTERVAL.as_millis() as u64,
        "starting instrument cluster"
    );

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new(WINDOW_TITLE, &output_settings);

    let shutdown = Shutdown::new();
    app::run(&mut display, &mut window, &shutdown);
}
