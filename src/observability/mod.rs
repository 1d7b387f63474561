use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::AppConfig;

/// Install the global tracing subscriber for the process.
///
/// `RUST_LOG` wins when set; otherwise the filter follows the profile's
/// debug flag. The hosting bootstrap calls this once, right after the
/// profile resolves. Subsequent calls are no-ops.
pub fn init_tracing(config: &AppConfig) {
    let fallback = if config.server.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true),
        )
        .try_init();
}
