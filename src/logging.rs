//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays clean for tables and `--json` output.
//! When `log_dir` is configured a daily-rolling file is added through a
//! non-blocking writer; keep the returned [`LogGuard`] alive until exit so
//! buffered lines are flushed.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;
use crate::error::{AppError, Result};

/// Directives used when neither `RUST_LOG` nor the config sets a filter.
pub const DEFAULT_FILTER: &str = "transferlead=info,lead_search=info";

const LOG_FILE_PREFIX: &str = "transferlead.log";

/// Flushes the log file writer on drop.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Parse filter directives, falling back to [`DEFAULT_FILTER`] when blank.
///
/// # Errors
///
/// Returns [`AppError::Logging`] for malformed directives.
pub fn parse_filter(directives: Option<&str>) -> Result<EnvFilter> {
    let directives = directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(directives)
        .map_err(|e| AppError::Logging(format!("invalid log filter {directives:?}: {e}")))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the filter is malformed, the log directory cannot
/// be created, or a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<LogGuard> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(config.filter.as_deref())?,
    };

    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(LogGuard { _file: guard })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(parse_filter(None).is_ok());
        assert!(parse_filter(Some("   ")).is_ok());
        let filter = parse_filter(None).expect("default");
        assert!(filter.to_string().contains("lead_search=info"));
    }

    #[test]
    fn configured_filter_used() {
        let filter = parse_filter(Some("transferlead=debug")).expect("valid");
        assert_eq!(filter.to_string(), "transferlead=debug");
    }

    #[test]
    fn malformed_filter_rejected() {
        let err = parse_filter(Some("lead_search=loudest")).unwrap_err();
        assert!(matches!(err, AppError::Logging(_)));
    }
}
