//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.
//! `RUST_LOG` always wins over the configured level.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

use crate::config::Environment;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log level used when `RUST_LOG` is unset
    pub level: Level,
    /// Emit one JSON object per line
    pub json: bool,
    /// Log span open/close events
    pub span_events: bool,
    /// Include file and line numbers
    pub file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            span_events: false,
            file_line: true,
        }
    }
}

impl TracingConfig {
    /// Verbose, human-readable output
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            json: false,
            span_events: true,
            file_line: true,
        }
    }

    /// JSON output for log shipping
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            json: true,
            span_events: false,
            file_line: false,
        }
    }

    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Staging => Self::default(),
            Environment::Production => Self::production(),
        }
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Install the default subscriber; fails if one is already set
pub fn try_init_tracing() -> Result<(), TracingError> {
    try_init_tracing_with_config(TracingConfig::default())
}

pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    install(&config).map_err(|_| TracingError::AlreadyInitialized)
}

fn install(config: &TracingConfig) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let fmt_layer = fmt::layer()
        .with_file(config.file_line)
        .with_line_number(config.file_line)
        .with_span_events(config.span_events());

    let registry = tracing_subscriber::registry().with(env_filter);
    if config.json {
        registry.with(fmt_layer.json()).try_init()
    } else {
        registry.with(fmt_layer).try_init()
    }
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
