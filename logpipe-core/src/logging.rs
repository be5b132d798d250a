use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with environment-based filtering.
///
/// - Uses `RUST_LOG` for level filtering (defaults to "info" if not set)
/// - JSON output with flattened event fields when stdout is not a terminal
/// - Human-readable output otherwise
pub fn init_logging() {
    match default_log_mode() {
        LogMode::Json => init_json_logging(),
        LogMode::Pretty => init_pretty_logging(),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_json_logging() {
    fmt()
        .with_env_filter(env_filter())
        .json()
        .flatten_event(true)
        .init();
}

fn init_pretty_logging() {
    fmt().with_env_filter(env_filter()).compact().init();
}

pub fn default_log_mode() -> LogMode {
    if io::stdout().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LogMode {
    Json,
    Pretty,
}
