use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::formatter::BracketedFormatter;

/// Filter used by the binary when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global diagnostic subscriber.
///
/// Diagnostics go to stderr so stdout stays free for the program's own
/// output. `RUST_LOG` overrides `default_filter` when set.
pub fn setup_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .event_format(BracketedFormatter::new())
        .with_writer(std::io::stderr);

    // A subscriber may already be installed, e.g. by an embedding test harness
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
