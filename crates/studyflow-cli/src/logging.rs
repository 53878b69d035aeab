//! Diagnostics via `tracing`, written to stderr so the countdown line on
//! stdout stays clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Reads `STUDYFLOW_LOG` (same syntax as `RUST_LOG`). Defaults to `warn`.
///
/// ```bash
/// STUDYFLOW_LOG=studyflow_core=debug studyflow timer run
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_env("STUDYFLOW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
