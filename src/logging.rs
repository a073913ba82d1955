// ABOUTME: Logging configuration and structured logging setup for the calculator
// ABOUTME: Configures log level, output format, and stderr destination from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! All output goes to stderr so that JSON written to stdout by the CLI stays
//! machine readable.

use crate::config::environment::{Environment, LogLevel};
use anyhow::{anyhow, Result};
use nutriplan_core::constants::{env_config, service_names};
use nutriplan_core::models::{ActivityLevel, Gender};
use serde_json::json;
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is unset
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for log shippers
    Json,
    /// Full human-readable output
    Pretty,
    /// Single-line human output
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to `Pretty`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: service_names::NUTRIPLAN.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG")
            .map(|value| LogLevel::from_str_or_default(&value))
            .unwrap_or_default();
        let format = env::var(env_config::LOG_FORMAT)
            .map(|value| LogFormat::from_str_or_default(&value))
            .unwrap_or(LogFormat::Compact);
        let environment = Environment::from_env();
        let is_production = environment.is_production();

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: service_names::NUTRIPLAN.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Override the service name
    #[must_use]
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Override the level, ignoring `RUST_LOG`
    #[must_use]
    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        // Explicit RUST_LOG directives win unless the level was forced
        match env::var("RUST_LOG") {
            Ok(directive) if LogLevel::from_str_or_default(&directive) == self.level => {
                EnvFilter::new(directive)
            }
            _ => EnvFilter::new(self.level.to_string()),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment.to_string(),
            },
            "logging": {
                "level": self.level.to_string(),
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "thread": self.include_thread,
            }
        });

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            "Logging initialized: {summary}"
        );
    }
}

/// Structured events emitted around a calculation
pub struct CalculationLogger;

impl CalculationLogger {
    /// One event per completed calculation
    pub fn log_calculation(
        request_id: &str,
        gender: Gender,
        activity_level: ActivityLevel,
        tdee: f64,
        warnings: usize,
    ) {
        info!(
            request.id = %request_id,
            metrics.gender = %gender,
            metrics.activity_level = %activity_level,
            result.tdee = tdee.round(),
            validation.warnings = warnings,
            "Nutrition targets calculated"
        );
    }
}
