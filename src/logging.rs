// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Configures log levels, formatters, and output format for the core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Project

//! Structured logging setup.
//!
//! The crate itself only emits `tracing` events (audit lines from the
//! authorization decorator, degradation warnings from the cache
//! decorator); the subscriber installed here - or by the embedding
//! application - is what turns them into output.

use std::env;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::service_names;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Service name for structured logging
    pub service_name: String,
}

/// Log output format options
#[derive(Debug, Clone)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            service_name: service_names::NUTRIPLAN_CORE.into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self {
            level,
            format,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::NUTRIPLAN_CORE.into()),
        }
    }

    /// Install a global subscriber for this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when a global subscriber is already installed.
    pub fn init(&self) -> anyhow::Result<()> {
        let filter = EnvFilter::new(&self.level);
        let registry = tracing_subscriber::registry().with(filter);

        match self.format {
            LogFormat::Json => registry
                .with(fmt::layer().with_target(true).json())
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?,
            LogFormat::Pretty => registry
                .with(fmt::layer().with_target(true))
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?,
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_target(false))
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?,
        }

        Ok(())
    }
}

/// Initialize logging from the environment, ignoring re-initialization.
///
/// Convenient for tests and embeddings that may race on subscriber
/// installation.
pub fn init_from_env() {
    let _ = LoggingConfig::from_env().init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.service_name, "nutriplan-core");
        assert!(matches!(config.format, LogFormat::Pretty));
    }
}
