//! Tracing subscriber setup.
//!
//! `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=instrument_cluster=debug`
//! to see every cycle's values and render time.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,instrument_cluster=info";

/// Initialize the global tracing subscriber. Call once, at startup.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}
