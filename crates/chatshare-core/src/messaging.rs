//! Message passing with the content script and the background worker.
//!
//! Both collaborators live outside the popup. Only the message shapes and the
//! delivery contract are defined here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Requests sent to the content script of the active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentRequest {
    /// Asks whether the tab is a supported chat site.
    #[serde(rename = "gradio?")]
    SupportQuery,
}

/// Reply to [`ContentRequest::SupportQuery`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentResponse {
    #[serde(default)]
    pub gradio: bool,
}

/// The tab that was active when the popup opened.
#[async_trait]
pub trait ActiveTab: Send + Sync {
    /// URL of the tab, if the browser exposes one.
    async fn url(&self) -> Option<String>;

    /// Sends a request to the tab's content script.
    ///
    /// `Ok(None)` means the script answered nothing; `Err` means the
    /// message could not be delivered at all (no receiver, closed tab).
    async fn send(&self, request: ContentRequest) -> Result<Option<ContentResponse>>;
}

/// Commands understood by the background worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BackgroundCommand {
    /// Publish every pending conversation.
    Publish,
}

/// One-way channel to the background worker.
///
/// Delivery is best effort: there is no acknowledgment and no way to learn
/// whether the command succeeded.
pub trait BackgroundDispatcher: Send + Sync {
    fn dispatch(&self, command: BackgroundCommand);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shapes() {
        assert_eq!(
            serde_json::to_value(ContentRequest::SupportQuery).unwrap(),
            json!({ "type": "gradio?" })
        );
        assert_eq!(
            serde_json::to_value(BackgroundCommand::Publish).unwrap(),
            json!({ "type": "publish" })
        );

        let response: ContentResponse = serde_json::from_value(json!({ "gradio": true })).unwrap();
        assert!(response.gradio);
    }
}
