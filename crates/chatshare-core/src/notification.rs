//! Transient notifications and banners.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// How long a toast stays on screen unless configured otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Toast flavour; the lowercase name is the CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Info,
        }
    }
}

/// Banners shown above the dashboard after the tab-support check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Banner {
    /// Age verification prompt (`#conditions`).
    Verification,
    /// The active tab is not a supported chat site (`#unsupported-message`).
    UnsupportedSite,
}

impl Banner {
    pub fn element_id(&self) -> &'static str {
        match self {
            Banner::Verification => "conditions",
            Banner::UnsupportedSite => "unsupported-message",
        }
    }
}
