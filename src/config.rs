use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::services::prompt::PromptTemplate;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub device: DeviceConfig,

    pub assistant: AssistantConfig,

    pub prompt: PromptTemplate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// "pretty" for human-readable lines, "json" for one JSON object per event
    pub log_format: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/concierge.db".to_string(),
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// File holding the guest device's bearer token.
    pub token_path: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            token_path: "device_token.txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Base URL of an OpenAI-compatible API, without `/chat/completions`.
    pub base_url: String,

    pub model: String,

    /// Name of the environment variable holding the API key.
    pub api_key_env: String,

    /// Request timeout in seconds (default: 30)
    pub request_timeout_seconds: u64,

    /// Messages kept per chat session, user and assistant turns combined.
    pub history_limit: usize,

    /// Minutes of inactivity after which a chat session starts over.
    pub session_idle_minutes: i64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            request_timeout_seconds: 30,
            history_limit: 20,
            session_idle_minutes: 30,
        }
    }
}

impl AssistantConfig {
    /// Idle timeout for chat sessions. Fails for non-positive values and for
    /// values too large to represent as a duration.
    pub fn session_idle_ttl(&self) -> Result<chrono::Duration> {
        if self.session_idle_minutes <= 0 {
            anyhow::bail!("Session idle timeout must be > 0 minutes");
        }

        chrono::Duration::try_minutes(self.session_idle_minutes).ok_or_else(|| {
            anyhow::anyhow!(
                "Session idle timeout is too large: {} minutes",
                self.session_idle_minutes
            )
        })
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("concierge").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".concierge").join("config.toml"));
        }

        paths
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.general.database_path.trim().is_empty() {
            anyhow::bail!("Database path cannot be empty");
        }

        if self.general.min_db_connections > self.general.max_db_connections {
            anyhow::bail!("min_db_connections cannot exceed max_db_connections");
        }

        if !matches!(self.general.log_format.as_str(), "pretty" | "json") {
            anyhow::bail!(
                "Unknown log format '{}', expected \"pretty\" or \"json\"",
                self.general.log_format
            );
        }

        if self.device.token_path.trim().is_empty() {
            anyhow::bail!("Device token path cannot be empty");
        }

        url::Url::parse(&self.assistant.base_url)
            .with_context(|| format!("Invalid assistant base URL: {}", self.assistant.base_url))?;

        self.assistant.session_idle_ttl()?;

        Ok(())
    }

    /// Database URL with the `sqlite:` scheme added when the configured path
    /// is a bare file path.
    #[must_use]
    pub fn database_url(&self) -> String {
        let path = &self.general.database_path;
        if path.starts_with("sqlite:") {
            path.clone()
        } else {
            format!("sqlite:{path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.assistant.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.general.max_db_connections, 5);
        assert_eq!(config.prompt.assistant_name, "Tavv");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[device]"));
        assert!(toml_str.contains("[assistant]"));
        assert!(toml_str.contains("[prompt]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [assistant]
            history_limit = 6

            [prompt]
            assistant_name = "Cove"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.assistant.history_limit, 6);
        assert_eq!(config.prompt.assistant_name, "Cove");

        assert_eq!(config.device.token_path, "device_token.txt");
        assert_eq!(config.assistant.request_timeout_seconds, 30);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.assistant.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.general.min_db_connections = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_session_idle_ttl_bounds() {
        let mut config = Config::default();
        assert_eq!(
            config.assistant.session_idle_ttl().unwrap(),
            chrono::Duration::minutes(30)
        );

        config.assistant.session_idle_minutes = i64::MAX;
        assert!(config.assistant.session_idle_ttl().is_err());
        assert!(config.validate().is_err());

        config.assistant.session_idle_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_idle_timeout_from_toml_is_rejected() {
        let config: Config = toml::from_str(
            r#"
            [assistant]
            session_idle_minutes = 9223372036854775807
        "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_format_is_validated() {
        let mut config = Config::default();
        assert_eq!(config.general.log_format, "pretty");

        config.general.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.general.log_format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_database_url_adds_scheme() {
        let mut config = Config::default();
        assert_eq!(config.database_url(), "sqlite:data/concierge.db");

        config.general.database_path = "/tmp/hotel.db".to_string();
        assert_eq!(config.database_url(), "sqlite:/tmp/hotel.db");
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir()
            .join(format!("concierge-config-{}", uuid::Uuid::new_v4()))
            .join("config.toml");

        let mut config = Config::default();
        config.device.token_path = "/var/lib/concierge/token".to_string();
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.device.token_path, "/var/lib/concierge/token");
        assert_eq!(loaded.prompt, config.prompt);
    }
}
