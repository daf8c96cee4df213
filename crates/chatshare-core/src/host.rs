//! Capabilities the popup borrows from its host.

use async_trait::async_trait;

use crate::error::Result;

/// Blocking yes/no confirmation, like `window.confirm`.
pub trait ConfirmationPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}
