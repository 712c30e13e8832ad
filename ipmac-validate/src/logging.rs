use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the stderr log subscriber.
///
/// Verbosity comes from `RUST_LOG` (e.g. `RUST_LOG=dhcpd_conf_core=debug`);
/// without it only warnings and errors are shown. Stdout is left to the
/// JSON output. Safe to call more than once.
pub fn init() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
