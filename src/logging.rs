//! Logging configuration using tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging subsystem
///
/// Diagnostics go to stderr so the filtered log file stays the only file
/// artifact. Log level is controlled by the `LOGSIFT_LOG` environment
/// variable.
///
/// # Examples
/// ```bash
/// LOGSIFT_LOG=debug logsift input.log output.log
/// ```
pub fn init() {
    // Default to info, allow override via LOGSIFT_LOG
    let env_filter = EnvFilter::try_from_env("LOGSIFT_LOG")
        .unwrap_or_else(|_| EnvFilter::new("logsift=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();
}
