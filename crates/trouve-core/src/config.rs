// Rust guideline compliant 2026-02-06

//! Configuration management for the directory client.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Service address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Upper bound on the listing request, in milliseconds.
pub const DEFAULT_LISTING_TIMEOUT_MS: u64 = 5_000;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for the directory client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base address of the directory service, without the `/api` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bound on the listing request before it is aborted.
    #[serde(default = "default_listing_timeout_ms")]
    pub listing_timeout_ms: u64,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// URL schemes the local intent handler can open.
    #[serde(default = "default_intent_schemes")]
    pub intent_schemes: Vec<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_listing_timeout_ms() -> u64 {
    DEFAULT_LISTING_TIMEOUT_MS
}

fn default_intent_schemes() -> Vec<String> {
    vec!["tel".to_string(), "whatsapp".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            listing_timeout_ms: default_listing_timeout_ms(),
            output_format: OutputFormat::default(),
            intent_schemes: default_intent_schemes(),
        }
    }
}

impl Config {
    /// Loads configuration from `config.toml` in a directory and the environment.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `{config_dir}/config.toml`
    /// 3. Environment variables with `TROUVE_` prefix
    ///
    /// # Arguments
    ///
    /// * `config_dir` - Directory holding `config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::load_file(&config_dir.join("config.toml"))
    }

    /// Loads configuration from an explicit file path and the environment.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable, invalid, or fails validation.
    pub fn load_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content).map_err(|e| {
                crate::Error::InvalidConfig(format!("{}: {}", path.display(), e))
            })?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `TROUVE_BASE_URL` - Directory service address
    /// - `TROUVE_LISTING_TIMEOUT_MS` - Listing request bound in milliseconds
    /// - `TROUVE_OUTPUT_FORMAT` - Output format (json/table/plain)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TROUVE_BASE_URL") {
            self.base_url = val;
        }

        if let Ok(val) = std::env::var("TROUVE_LISTING_TIMEOUT_MS") {
            self.listing_timeout_ms = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "TROUVE_LISTING_TIMEOUT_MS must be a positive number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("TROUVE_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(crate::Error::InvalidConfig(
                        "TROUVE_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - base_url is not an http(s) address
    /// - listing_timeout_ms is zero
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(crate::Error::InvalidConfig(format!(
                "base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        if self.listing_timeout_ms == 0 {
            return Err(crate::Error::InvalidConfig(
                "listing_timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to `config.toml` in a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join("config.toml");
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("TROUVE_BASE_URL");
        std::env::remove_var("TROUVE_LISTING_TIMEOUT_MS");
        std::env::remove_var("TROUVE_OUTPUT_FORMAT");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.listing_timeout_ms, 5_000);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.intent_schemes, vec!["tel", "whatsapp"]);
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.listing_timeout_ms, 5_000);
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
base_url = "http://172.16.172.70:8000"
listing_timeout_ms = 2500
output_format = "json"
intent_schemes = ["tel"]
"#;
        std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.base_url, "http://172.16.172.70:8000");
        assert_eq!(config.listing_timeout_ms, 2500);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.intent_schemes, vec!["tel"]);
    }

    #[test]
    fn test_config_validation_rejects_zero_timeout() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "listing_timeout_ms = 0").unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_validation_rejects_non_http_base() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "base_url = \"ftp://example.org\"",
        )
        .unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "listing_timeout_ms = 1000",
        )
        .unwrap();

        std::env::set_var("TROUVE_BASE_URL", "https://annuaire.example.ma");
        std::env::set_var("TROUVE_LISTING_TIMEOUT_MS", "7000");
        std::env::set_var("TROUVE_OUTPUT_FORMAT", "plain");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.base_url, "https://annuaire.example.ma");
        assert_eq!(config.listing_timeout_ms, 7000);
        assert_eq!(config.output_format, OutputFormat::Plain);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("TROUVE_LISTING_TIMEOUT_MS", "soon");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();

        std::env::set_var("TROUVE_OUTPUT_FORMAT", "yaml");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            base_url: "http://10.0.2.2:8000".to_string(),
            listing_timeout_ms: 3000,
            output_format: OutputFormat::Json,
            intent_schemes: vec!["tel".to_string()],
        };

        original.save(temp_dir.path()).unwrap();
        let loaded = Config::load(temp_dir.path()).unwrap();

        assert_eq!(original.base_url, loaded.base_url);
        assert_eq!(original.listing_timeout_ms, loaded.listing_timeout_ms);
        assert_eq!(original.output_format, loaded.output_format);
        assert_eq!(original.intent_schemes, loaded.intent_schemes);
    }
}
