// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_CHAIN_NAME, DEFAULT_LOG_FILTER};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration for a chain and the logging around it.
///
/// Every field is optional in the source file and falls back to the values
/// in [`consts`](crate::config::consts).
///
/// # Fields
/// * `name` - Name carried by every log event the chain emits
/// * `logging` - Subscriber settings used by `observability::init_tracing`
///
/// # Example
/// ```yaml
/// name: signup
/// logging:
///   filter: "info,handler_chain=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub name: String,
    pub logging: LoggingConfig,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_CHAIN_NAME.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ChainConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Logging options.
///
/// # Fields
/// * `filter` - `EnvFilter` directives; `RUST_LOG` overrides it when set
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Source format of a configuration file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ChainConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        ConfigFormat::Yaml => ChainConfig::from_yaml_str(&content),
        ConfigFormat::Toml => ChainConfig::from_toml_str(&content),
    }
}

/// Load and validate a config from a YAML or TOML file
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<ChainConfig, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_yaml_config() {
        let yaml = r#"
name: signup
logging:
  filter: "warn,handler_chain=trace"
"#;

        let cfg = ChainConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.name, "signup");
        assert_eq!(cfg.logging.filter, "warn,handler_chain=trace");
    }

    #[test]
    fn parse_basic_toml_config() {
        let content = r#"
name = "billing"

[logging]
filter = "debug"
"#;

        let cfg = ChainConfig::from_toml_str(content).unwrap();
        assert_eq!(cfg.name, "billing");
        assert_eq!(cfg.logging.filter, "debug");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg = ChainConfig::from_yaml_str("name: partial\n").unwrap();
        assert_eq!(cfg.name, "partial");
        assert_eq!(cfg.logging, LoggingConfig::default());

        let cfg = ChainConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, ChainConfig::default());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.YML")), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), None);
    }

    #[test]
    fn test_load_yaml_file() {
        let file = write_temp(".yaml", "name: from_file\n");
        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.name, "from_file");
    }

    #[test]
    fn test_load_toml_file() {
        let file = write_temp(".toml", "name = \"from_toml\"\n");
        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.name, "from_toml");
    }

    #[test]
    fn test_load_unsupported_extension() {
        let file = write_temp(".json", "{}");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_yaml() {
        let file = write_temp(".yaml", "name: [unclosed\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_load_and_validate_rejects_blank_name() {
        let file = write_temp(".yaml", "name: \"   \"\n");
        let err = load_and_validate_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyName));
    }
}
