//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `FACTCHECK_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "factcheck=info";

/// Initialize the factcheck tracing/logging system.
///
/// Reads the `FACTCHECK_LOG` environment variable for per-module levels,
/// e.g. `FACTCHECK_LOG=factcheck_analysis::corpus=debug,factcheck_analysis=info`.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("FACTCHECK_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
