//! Process-wide tracing setup.
//!
//! The scheduler core only emits `tracing` events; whether they are
//! rendered (and at what level) is decided by whichever entry point calls
//! `init_logger`, be that a bot binary, the dashboard bridge, or a test
//! run.

use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Install the fmt subscriber once. Safe to call from multiple entry
/// points; later calls are no-ops.
pub fn init_logger(service_name: &'static str) {
    LOGGER_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_line_number(true)
            .init();

        tracing::info!(service = service_name, "logger initialized");
    });
}
