//! Logging and tracing utilities
//!
//! Structured logging goes through the `tracing` crate. Binaries call
//! [`init_with_config`] once at startup; libraries only emit events.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Whether tracing has been initialized
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize tracing with a custom configuration
///
/// `RUST_LOG` takes precedence over `config.default_level` when set.
/// Calls after the first are ignored.
pub fn init_with_config(config: TracingConfig) {
    if TRACING_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::Relaxed)
        .is_err()
    {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.show_target)
        .with_thread_ids(config.show_thread_ids)
        .with_file(config.show_file)
        .with_line_number(config.show_line_number);

    // try_init: a host process may already own the global subscriber
    let _ = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init();
}

/// Configuration for tracing initialization
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Default log level filter (e.g., "info", "debug", "warn")
    pub default_level: String,
    /// Show the target (module path) in log output
    pub show_target: bool,
    /// Show thread IDs in log output
    pub show_thread_ids: bool,
    /// Show source file in log output
    pub show_file: bool,
    /// Show line number in log output
    pub show_line_number: bool,
}

impl TracingConfig {
    /// Map a `-v` count to a configuration
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };

        Self {
            default_level: level.to_string().to_lowercase(),
            show_target: verbosity >= 2,
            show_thread_ids: verbosity >= 3,
            show_file: verbosity >= 3,
            show_line_number: verbosity >= 3,
        }
    }

    /// Use an explicit filter directive (e.g. from a settings file)
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }
}

/// Macros for common logging patterns
#[macro_export]
macro_rules! log_parse_start {
    ($parser:expr, $path:expr) => {
        tracing::debug!(
            parser = %$parser,
            path = %$path.display(),
            "Starting parse"
        );
    };
}

#[macro_export]
macro_rules! log_parse_complete {
    ($parser:expr, $duration:expr, $path:expr) => {
        tracing::info!(
            parser = %$parser,
            duration_ms = %$duration.as_millis(),
            path = %$path,
            "Parse complete"
        );
    };
}

#[macro_export]
macro_rules! log_parse_error {
    ($parser:expr, $error:expr) => {
        tracing::error!(
            parser = %$parser,
            error = %$error,
            "Parse failed"
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(TracingConfig::from_verbosity(0).default_level, "warn");
        assert_eq!(TracingConfig::from_verbosity(1).default_level, "info");
        assert_eq!(TracingConfig::from_verbosity(2).default_level, "debug");

        let loud = TracingConfig::from_verbosity(5);
        assert_eq!(loud.default_level, "trace");
        assert!(loud.show_file && loud.show_line_number && loud.show_thread_ids);
    }

    #[test]
    fn test_with_level_overrides() {
        let config = TracingConfig::from_verbosity(0).with_level("modlist_diff=trace");
        assert_eq!(config.default_level, "modlist_diff=trace");
    }
}
