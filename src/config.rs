use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub translator_config: TranslatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_public_dir() -> String {
    "public".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Remote API key; its presence selects the real provider
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://translation.googleapis.com/language/translate/v2".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment overrides: PORT and TRANSLATE_API_KEY.
    pub fn apply_env(&mut self) {
        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => self.system_config.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
            }
        }
        if let Ok(key) = std::env::var("TRANSLATE_API_KEY") {
            if !key.is_empty() {
                self.translator_config.api_key = Some(key);
            }
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_dir: default_public_dir(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_require_no_file() {
        let config = Config::default();
        assert_eq!(config.system_config.port, 3000);
        assert_eq!(config.system_config.public_dir, "public");
        assert!(config.translator_config.api_key.is_none());
        assert_eq!(config.translator_config.timeout_secs, 10);
    }

    #[test]
    fn parses_partial_yaml_with_defaults() {
        let yaml = r#"
system_config:
  port: 8080
translator_config:
  api_key: "abc123"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.system_config.port, 8080);
        assert_eq!(config.system_config.host, "0.0.0.0");
        assert_eq!(config.translator_config.api_key.as_deref(), Some("abc123"));
        assert!(config.translator_config.endpoint.contains("translation.googleapis.com"));
    }
}
