use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file name, looked up in the working directory first.
pub const CONFIG_FILE: &str = ".storedeskrc.json";

/// Default API endpoint for a locally running backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";

/// Default rows requested per page.
pub const DEFAULT_PAGE_LIMIT: u32 = 25;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Application configuration loaded from .storedeskrc.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the storefront API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request, if the backend requires one.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Rows requested per page.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            page_limit: default_page_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the working directory, falling back to the
    /// user config directory, falling back to defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            return Self::load(local);
        }

        if let Some(dir) = dirs::config_dir() {
            let user = dir.join("storedesk").join("config.json");
            if user.exists() {
                return Self::load(user);
            }
        }

        Ok(Self::default())
    }

    /// Directory for the operation log, created on demand by the log writer.
    pub fn log_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("storedesk")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page_limit, DEFAULT_PAGE_LIMIT);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"
{
  "base_url": "https://shop.example.com/api",
  "api_key": "sk-test",
  "page_limit": 50,
  "timeout_secs": 30
}
"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "https://shop.example.com/api");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.page_limit, 50);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let config = Config::load("/nonexistent/path/.storedeskrc.json").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"page_limit": 10}}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.page_limit, 10);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{not json").unwrap();

        let result = Config::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
