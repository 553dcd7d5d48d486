use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Build the filter for the configured level.
///
/// `RUST_LOG` wins when set. The configured level accepts either a bare level (`debug`)
/// or full directives (`info,minipub::broker=trace`); anything unparsable falls back to `info`.
pub fn filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.level.trim()))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a fmt subscriber filtered by `settings`.
///
/// Returns false when a subscriber was already installed by tests or the host process.
pub fn init(settings: &LoggingSettings) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(settings))
        .with_target(false)
        .try_init()
        .is_ok()
}
