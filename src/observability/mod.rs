// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the crate, plus a helper to install a
//! `tracing-subscriber` formatter for binaries and demos. Message types follow
//! a struct-based pattern with `Display` so that no log text is scattered
//! through the engine as magic strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::chain` - run lifecycle and handler events
//! * `messages::field` - context/result field updates
//!
//! # Usage
//!
//! ```rust
//! use handler_chain::config::LoggingConfig;
//! use handler_chain::observability::build_filter;
//!
//! let config = LoggingConfig::default();
//! assert!(build_filter(&config.filter).is_ok());
//! assert!(build_filter("handler_chain=loudest").is_err());
//! ```

pub mod messages;

use crate::config::LoggingConfig;
use crate::errors::ConfigError;
use tracing_subscriber::EnvFilter;

/// Parse a filter directive string such as `"info,handler_chain=trace"`.
pub fn build_filter(directives: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(directives).map_err(|e| ConfigError::InvalidLogFilter {
        filter: directives.to_string(),
        reason: e.to_string(),
    })
}

/// Install a global fmt subscriber.
///
/// `RUST_LOG`, when set, takes precedence over `config.filter`. Fails if a
/// global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.filter)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ConfigError::SubscriberInit(e.to_string()))
}
