//! Logging setup
//!
//! Installs the global `tracing` subscriber. Output goes to stderr so the
//! rendered page on stdout stays clean.

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Unsupported log format `{0}`; expected `pretty` or `json`")]
    UnsupportedFormat(String),

    #[error("Failed to install tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(raw: &str) -> Result<Self, LoggingError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(LoggingError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Filter directive for a configured level, unless `RUST_LOG` is set
pub fn filter_directive(level: &str, rust_log: Option<String>) -> String {
    rust_log.unwrap_or_else(|| format!("synthlab={}", level))
}

/// Install the global subscriber described by `config`
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let format = LogFormat::parse(&config.format)?;
    let filter = EnvFilter::new(filter_directive(
        &config.level,
        std::env::var("RUST_LOG").ok(),
    ));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
    }

    Ok(())
}
