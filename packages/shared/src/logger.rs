//! Logging setup shared by the workspace binaries.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_level` when it is set. The default filter
/// applies `default_level` to the calling binary and `store_core`, and
/// keeps everything else at `warn`.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    // A second call (e.g. from tests) is a no-op.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}

fn default_directives(bin_name: &str, default_level: &str) -> String {
    let bin_target = bin_name.replace('-', "_");
    format!("warn,{bin_target}={default_level},store_core={default_level}")
}
