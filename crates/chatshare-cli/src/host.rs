//! Terminal stand-ins for the browser capabilities the popup uses.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use tokio::sync::mpsc;

use chatshare_core::error::{PopupError, Result};
use chatshare_core::host::{Clipboard, ConfirmationPrompt};
use chatshare_core::messaging::{
    ActiveTab, BackgroundCommand, BackgroundDispatcher, ContentRequest, ContentResponse,
};

/// A tab whose URL and content-script answer are fixed up front.
pub struct StaticTab {
    url: Option<String>,
    /// `None` behaves like a tab without a content script.
    supported: Option<bool>,
}

impl StaticTab {
    pub fn new(url: Option<String>, supported: Option<bool>) -> Self {
        Self { url, supported }
    }
}

#[async_trait]
impl ActiveTab for StaticTab {
    async fn url(&self) -> Option<String> {
        self.url.clone()
    }

    async fn send(&self, request: ContentRequest) -> Result<Option<ContentResponse>> {
        tracing::debug!(?request, "content script request");
        match self.supported {
            Some(gradio) => Ok(Some(ContentResponse { gradio })),
            None => Err(PopupError::messaging(
                "Could not establish connection. Receiving end does not exist.",
            )),
        }
    }
}

/// Hands background commands to an in-process worker task.
pub struct ChannelDispatcher {
    sender: mpsc::UnboundedSender<BackgroundCommand>,
}

impl ChannelDispatcher {
    pub fn new(sender: mpsc::UnboundedSender<BackgroundCommand>) -> Self {
        Self { sender }
    }
}

impl BackgroundDispatcher for ChannelDispatcher {
    fn dispatch(&self, command: BackgroundCommand) {
        if self.sender.send(command).is_err() {
            tracing::warn!(?command, "background worker is gone, command dropped");
        }
    }
}

/// Drains dispatched commands until every sender is dropped.
///
/// There is no real background worker outside the browser, so commands are
/// printed in their wire form.
pub async fn run_background_worker(mut receiver: mpsc::UnboundedReceiver<BackgroundCommand>) {
    while let Some(command) = receiver.recv().await {
        match serde_json::to_string(&command) {
            Ok(message) => {
                tracing::info!(%message, "background command received");
                println!("background <- {message}");
            }
            Err(e) => tracing::error!(error = %e, "Failed to encode background command"),
        }
    }
}

/// Asks on stderr and reads the answer from stdin, unless `assume_yes`.
pub struct TerminalConfirmation {
    assume_yes: bool,
}

impl TerminalConfirmation {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl ConfirmationPrompt for TerminalConfirmation {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{message} [y/N] ");
        if io::stderr().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation");
                false
            }
        }
    }
}

/// Writes "copied" text to stdout.
pub struct StdoutClipboard;

#[async_trait]
impl Clipboard for StdoutClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "clipboard <- {text}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_tab_without_script_is_unreachable() {
        let tab = StaticTab::new(None, None);
        let err = tab.send(ContentRequest::SupportQuery).await.unwrap_err();
        assert!(err.is_messaging());

        let tab = StaticTab::new(Some("https://claude.ai/".to_string()), Some(true));
        assert_eq!(
            tab.send(ContentRequest::SupportQuery).await.unwrap(),
            Some(ContentResponse { gradio: true })
        );
    }

    #[test]
    fn test_dispatch_after_worker_stopped_does_not_panic() {
        let (sender, receiver) = mpsc::unbounded_channel();
        drop(receiver);
        ChannelDispatcher::new(sender).dispatch(BackgroundCommand::Publish);
    }

    #[test]
    fn test_assume_yes() {
        assert!(TerminalConfirmation::new(true).confirm("Proceed?"));
    }
}
