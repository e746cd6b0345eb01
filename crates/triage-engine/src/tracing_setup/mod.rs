//! Tracing setup: structured logging plus span definitions for the triage loop.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use triage_core::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding the filter directive, e.g. `TRIAGE_LOG=triage_engine=debug`.
pub const LOG_ENV_VAR: &str = "TRIAGE_LOG";

/// Initialize tracing with default settings.
///
/// Respects `TRIAGE_LOG`; falls back to `info`. Safe to call more than once.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize tracing from the `[observability]` config section.
/// `TRIAGE_LOG` still takes precedence over `log_level`.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json_logs);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        let result = if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .try_init()
        };
        // Another subscriber may already be installed by the host application.
        let _ = result;
    });
}
