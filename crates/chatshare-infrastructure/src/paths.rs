//! Unified path management for chatshare files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/chatshare/         # Config directory (platform default)
//! ├── config.toml              # Host configuration
//! ├── storage.json             # Extension storage namespace
//! └── logs/                    # Rolling log files
//!     └── chatshare.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

use chatshare_core::error::{PopupError, Result};

const APP_DIR_NAME: &str = "chatshare";

/// Resolves chatshare paths, optionally under an overridden root.
#[derive(Debug, Clone, Default)]
pub struct ChatsharePaths {
    root: Option<PathBuf>,
}

impl ChatsharePaths {
    /// `root` replaces the platform config directory (used by tests and `--root`).
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    /// Returns the chatshare configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| PopupError::config("Cannot find home directory"))
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn storage_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("storage.json"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overridden_root() {
        let paths = ChatsharePaths::new(Some(PathBuf::from("/tmp/chatshare-test")));
        assert_eq!(
            paths.storage_file().unwrap(),
            PathBuf::from("/tmp/chatshare-test/storage.json")
        );
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/chatshare-test/config.toml")
        );
        assert_eq!(paths.logs_dir().unwrap(), PathBuf::from("/tmp/chatshare-test/logs"));
    }
}
