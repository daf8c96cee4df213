//! Host configuration service.
//!
//! Loads `config.toml` from the chatshare config directory. Every section and
//! field is optional; a missing file yields the defaults.
//!
//! ```toml
//! storage_path = "/path/to/storage.json"
//!
//! [logging]
//! level = "debug"
//! file = true
//!
//! [notifications]
//! toast_duration_ms = 3000
//!
//! [tab]
//! url = "https://chat.openai.com/"
//! supported = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::fs;

use chatshare_core::error::{PopupError, Result};
use chatshare_core::notification::DEFAULT_TOAST_DURATION;

use crate::paths::ChatsharePaths;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Overrides the storage namespace file.
    pub storage_path: Option<PathBuf>,
    pub logging: LoggingSettings,
    pub notifications: NotificationSettings,
    pub tab: TabSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive, e.g. `info` or `chatshare_application=debug`.
    pub level: String,
    /// Also write a daily rolling log file under the logs directory.
    pub file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub toast_duration_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: DEFAULT_TOAST_DURATION.as_millis() as u64,
        }
    }
}

impl NotificationSettings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

/// Stand-in for the browser tab when running outside the extension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabSettings {
    pub url: Option<String>,
    /// What the content script answers; `None` simulates an unreachable script.
    pub supported: Option<bool>,
}

/// Loads the host configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    paths: ChatsharePaths,
}

impl ConfigService {
    pub fn new(paths: ChatsharePaths) -> Self {
        Self { paths }
    }

    /// Loads the configuration from `explicit` or the default config file.
    pub async fn load(&self, explicit: Option<&Path>) -> Result<HostConfig> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => self.paths.config_file()?,
        };
        Self::load_from(&path).await
    }

    pub async fn load_from(path: &Path) -> Result<HostConfig> {
        if !fs::try_exists(path).await? {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(HostConfig::default());
        }

        let content = fs::read_to_string(path).await.map_err(|e| {
            PopupError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: HostConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Storage file to open: the configured override or the default location.
    pub fn storage_path(&self, config: &HostConfig) -> Result<PathBuf> {
        match &config.storage_path {
            Some(path) => Ok(path.clone()),
            None => self.paths.storage_file(),
        }
    }

    pub fn paths(&self) -> &ChatsharePaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(ChatsharePaths::new(Some(temp_dir.path().to_path_buf())));

        let config = service.load(None).await.unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.notifications.toast_duration(), Duration::from_secs(3));
        assert_eq!(
            service.storage_path(&config).unwrap(),
            temp_dir.path().join("storage.json")
        );
    }

    #[tokio::test]
    async fn test_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
storage_path = "/data/storage.json"

[tab]
url = "https://claude.ai/chat"
supported = true
"#,
        )
        .unwrap();

        let config = ConfigService::load_from(&path).await.unwrap();
        assert_eq!(config.storage_path, Some(PathBuf::from("/data/storage.json")));
        assert_eq!(config.tab.url.as_deref(), Some("https://claude.ai/chat"));
        assert_eq!(config.tab.supported, Some(true));
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[tokio::test]
    async fn test_malformed_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[logging\nlevel = ").unwrap();

        let err = ConfigService::load_from(&path).await.unwrap_err();
        assert!(err.is_serialization());
    }
}
