//! Error types for the Chatshare popup.

use thiserror::Error;

/// Failures reported by storage backends, messaging channels and host
/// capabilities.
///
/// The controller decides per call site whether a failure is logged, shown as
/// a toast, or replaced by a default; nothing here is fatal to the popup.
#[derive(Error, Debug, Clone)]
pub enum PopupError {
    /// The key-value namespace could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A message to the content script or background worker was not delivered.
    #[error("Messaging error: {0}")]
    Messaging(String),

    /// A stored value did not have the expected shape.
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    /// Host file-system failure.
    #[error("IO error: {message}")]
    Io { message: String },

    /// A bug, e.g. a popup template that fails to compile.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PopupError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn messaging(message: impl Into<String>) -> Self {
        Self::Messaging(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    pub fn is_messaging(&self) -> bool {
        matches!(self, Self::Messaging(_))
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

impl From<std::io::Error> for PopupError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{err} ({:?})", err.kind()),
        }
    }
}

impl From<serde_json::Error> for PopupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PopupError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PopupError>;
