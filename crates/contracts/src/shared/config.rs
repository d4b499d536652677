use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub api: ApiConfig,
    pub table: TableConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend port on the same host the app was served from.
    pub port: u16,
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub skeleton_rows: usize,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    Local,
    Cookie,
    Memory,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SessionConfig {
    pub backend: SessionBackend,
    pub key_prefix: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("page_size_options must not be empty")]
    NoPageSizes,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
prefix = "/api"

[table]
default_page_size = 20
page_size_options = [10, 20, 50, 100]
skeleton_rows = 5

[session]
backend = "local"
key_prefix = "admin."
"#;

impl UiConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: UiConfig = toml::from_str(contents)?;
        if config.table.page_size_options.is_empty() {
            return Err(ConfigError::NoPageSizes);
        }
        Ok(config)
    }
}

impl Default for UiConfig {
    // Must stay in sync with DEFAULT_CONFIG (checked in tests).
    fn default() -> Self {
        Self {
            api: ApiConfig {
                port: 3000,
                prefix: "/api".to_string(),
            },
            table: TableConfig {
                default_page_size: 20,
                page_size_options: vec![10, 20, 50, 100],
                skeleton_rows: 5,
            },
            session: SessionConfig {
                backend: SessionBackend::Local,
                key_prefix: "admin.".to_string(),
            },
        }
    }
}

/// Parses `override_toml` when given, otherwise the embedded default.
/// A broken override is logged and ignored.
pub fn load_config(override_toml: Option<&str>) -> UiConfig {
    match override_toml {
        Some(contents) => match UiConfig::from_toml(contents) {
            Ok(config) => {
                log::info!("Loaded UI config override");
                config
            }
            Err(e) => {
                log::warn!("Ignoring UI config override: {}", e);
                UiConfig::default()
            }
        },
        None => UiConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = UiConfig::from_toml(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.table.default_page_size, 20);
        assert_eq!(config.session.backend, SessionBackend::Local);
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn test_override_and_fallback() {
        let custom = DEFAULT_CONFIG.replace("backend = \"local\"", "backend = \"memory\"");
        assert_eq!(
            load_config(Some(&custom)).session.backend,
            SessionBackend::Memory
        );
        assert_eq!(load_config(Some("not = [toml")), UiConfig::default());
    }

    #[test]
    fn test_empty_page_sizes_rejected() {
        let broken = DEFAULT_CONFIG.replace("[10, 20, 50, 100]", "[]");
        assert!(matches!(
            UiConfig::from_toml(&broken),
            Err(ConfigError::NoPageSizes)
        ));
    }
}
