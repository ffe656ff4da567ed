use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Output format for process logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Human-readable output on a terminal, JSON everywhere else.
pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

pub fn init_logging() {
    init_logging_with(default_log_format());
}

/// Install the global subscriber.
///
/// - Filter comes from `RUST_LOG`, defaulting to "info"
/// - Logs go to stderr so stdout stays free for command output
/// - JSON events are flattened for cleaner log lines
pub fn init_logging_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
        LogFormat::Pretty => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init(),
    }
}
