// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or validating a chain configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension does not map to a known format
    #[error("unsupported config format for '{path}': expected .yaml, .yml or .toml")]
    UnsupportedFormat { path: PathBuf },

    /// YAML content could not be deserialized
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML content could not be deserialized
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The chain name is empty or only whitespace
    #[error("chain name must not be empty")]
    EmptyName,

    /// The log filter directive could not be parsed
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    /// A global tracing subscriber was already installed
    #[error("tracing subscriber already initialized: {0}")]
    SubscriberInit(String),
}
