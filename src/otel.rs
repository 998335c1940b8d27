//! Structured logging initialization
//!
//! Installs a `tracing` subscriber with an `EnvFilter` and either a JSON
//! (production) or pretty (development) formatter. Library code only emits
//! events; binaries call [`init_logging_with_config`] once at startup.
//!
//! ## Environment Variables
//!
//! - `RESPONSEKIT_LOG_LEVEL` - trace/debug/info/warn/error (default `info`)
//! - `RESPONSEKIT_LOG_FORMAT` - json/pretty (default `json`)
//! - `RESPONSEKIT_LOG_TARGET_FILTER` - extra comma-separated filter directives
//! - `RESPONSEKIT_LOG_INCLUDE_LOCATION` - include file:line (default `false`)
//!
//! `RUST_LOG`, when set, takes precedence over `RESPONSEKIT_LOG_LEVEL`.

use crate::config::Settings;
use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format: JSON for production, pretty-print for development
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Json, // Default to JSON
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    /// Log format: json/pretty
    pub format: LogFormat,
    /// Module filter (comma-separated)
    pub target_filter: Option<String>,
    /// Include file:line location (dev only)
    pub include_location: bool,
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("RESPONSEKIT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: LogFormat::parse(
                &env::var("RESPONSEKIT_LOG_FORMAT").unwrap_or_else(|_| "json".to_string()),
            ),
            target_filter: env::var("RESPONSEKIT_LOG_TARGET_FILTER").ok(),
            include_location: env::var("RESPONSEKIT_LOG_INCLUDE_LOCATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Development configuration: pretty output at `debug` with locations.
    pub fn default_dev() -> Self {
        Self {
            log_level: "debug".to_string(),
            format: LogFormat::Pretty,
            target_filter: None,
            include_location: true,
        }
    }

    /// Environment configuration, switched to the development profile when
    /// `settings.debug` is set.
    pub fn for_settings(settings: &Settings) -> Self {
        if settings.debug {
            Self {
                target_filter: env::var("RESPONSEKIT_LOG_TARGET_FILTER").ok(),
                ..Self::default_dev()
            }
        } else {
            Self::from_env()
        }
    }

    /// Parsed log level; unknown names fall back to `INFO`.
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    /// Build the `EnvFilter` for this configuration.
    ///
    /// Invalid target directives are skipped with a warning on stderr.
    pub fn env_filter(&self) -> EnvFilter {
        let mut env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level().as_str()));

        if let Some(target_filter) = &self.target_filter {
            for filter in target_filter.split(',') {
                let filter = filter.trim();
                if !filter.is_empty() {
                    if let Ok(directive) = filter.parse() {
                        env_filter = env_filter.add_directive(directive);
                    } else {
                        eprintln!("Warning: Invalid log filter directive: {}", filter);
                    }
                }
            }
        }
        env_filter
    }
}

/// Initialize logging with structured tracing
///
/// Output goes to stderr so binaries can keep stdout for their data.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
///
/// # Example
///
/// ```no_run
/// use responsekit::otel::{init_logging_with_config, LogConfig};
///
/// init_logging_with_config(&LogConfig::from_env())
///     .expect("Failed to initialize logging");
/// ```
pub fn init_logging_with_config(config: &LogConfig) -> Result<()> {
    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
