pub mod assistant;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod estimator;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod providers;
pub mod server;
pub mod signals;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` wins over the configured level. `log_format = "json"` switches
/// the fmt layer to structured JSON lines.
pub fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
