//! Diagnostic logging setup.
//!
//! Logs always go to stderr. The default level for the CLI is `off`, so stderr
//! only carries the per-token `ERROR:` lines unless `ERRNO_LOG` asks for more.
//!
//! | Variable           | Values                                      | Default  |
//! |--------------------|---------------------------------------------|----------|
//! | `ERRNO_LOG`        | `trace`, `debug`, `info`, `warn`, `error`, `off` | caller |
//! | `ERRNO_LOG_FORMAT` | `compact`, `json`                           | `compact`|

use std::io;

use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;

use crate::config::{ConfigSource, EnvError, EnvParser};

/// Crates whose events are shown.
const LOG_TARGETS: &[&str] = &["errno", "errno_common"];

/// Output format of log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    const CHOICES: [&'static str; 2] = ["compact", "json"];

    fn from_choice(choice: &str) -> Self {
        match choice {
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }
}

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("failed to install log subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub level_source: ConfigSource,
    pub format: LogFormat,
    /// Problems found while reading the environment.
    pub env_errors: Vec<EnvError>,
}

impl LogConfig {
    /// Read `ERRNO_LOG` and `ERRNO_LOG_FORMAT`, falling back to `default_level`.
    pub fn from_env(default_level: &str) -> Self {
        let mut parser = EnvParser::new();
        let level = parser.get_log_level("LOG", default_level);
        let format = parser.get_choice("LOG_FORMAT", "compact", &LogFormat::CHOICES);
        Self {
            level: level.value,
            level_source: level.source,
            format: LogFormat::from_choice(format.value),
            env_errors: parser.take_errors(),
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: &str) -> Self {
        self.level = level.to_string();
        self.level_source = ConfigSource::Default;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Filter directives limiting output to this workspace's crates.
    pub fn directives(&self) -> String {
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.level))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "off".to_string(),
            level_source: ConfigSource::Default,
            format: LogFormat::Compact,
            env_errors: Vec::new(),
        }
    }
}

/// Install the global subscriber described by `config`.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(config.directives())?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .compact(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()?,
    }

    for error in &config.env_errors {
        warn!(%error, "ignoring invalid environment setting");
    }
    debug!(level = %config.level, source = %config.level_source, format = ?config.format, "logging initialized");
    Ok(())
}
