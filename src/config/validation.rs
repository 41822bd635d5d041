// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Checks run in order and stop at the first failure:
//!
//! 1. **Name**: the chain name must contain a non-whitespace character
//! 2. **Log filter**: the directives must parse as an `EnvFilter`

use crate::config::ChainConfig;
use crate::errors::ConfigError;
use crate::observability::build_filter;

/// Validate a loaded configuration.
///
/// # Example
/// ```rust
/// use handler_chain::config::{validate_config, ChainConfig};
///
/// let config = ChainConfig::default();
/// assert!(validate_config(&config).is_ok());
/// ```
pub fn validate_config(config: &ChainConfig) -> Result<(), ConfigError> {
    if config.name.trim().is_empty() {
        return Err(ConfigError::EmptyName);
    }

    build_filter(&config.logging.filter)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ChainConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let config = ChainConfig {
            name: String::new(),
            ..ChainConfig::default()
        };
        assert!(matches!(validate_config(&config), Err(ConfigError::EmptyName)));
    }

    #[test]
    fn test_bad_filter_rejected() {
        let config = ChainConfig {
            name: "signup".to_string(),
            logging: LoggingConfig {
                filter: "handler_chain=loudest".to_string(),
            },
        };

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("invalid log filter"));
    }
}
