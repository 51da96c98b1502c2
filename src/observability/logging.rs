//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global `tracing` subscriber
//! - Pick the output format from the run mode
//!
//! # Design Decisions
//! - JSON format for production, human-readable format otherwise
//! - `RUST_LOG` overrides the configured level when set

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::RunMode;

/// Default filter directives for `level`.
pub fn default_directives(level: &str) -> String {
    format!("{level},car_gateway={level},tower_http=info")
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logging(mode: RunMode, level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    if mode.json_logs() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_file(true).with_line_number(true))
            .init();
    }

    tracing::info!(mode = %mode, level = %level, "Logging initialized");
}
