//! Logging initialization and configuration.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "info,editor=debug";

/// Initialize the logging system with tracing.
///
/// `RUST_LOG` wins when set. Otherwise the given filter is used, falling
/// back to `info,editor=debug`. Calling this twice is harmless: the second
/// subscriber is rejected and the first one stays installed.
///
/// # Example
/// ```
/// editor_core::init_logging(None);
/// tracing::info!("Editor initialized");
/// ```
pub fn init_logging(filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .try_init();
}
