//! Fakes shared by the controller tests.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use chatshare_application::{PopupController, PopupDocument, PopupServices};
use chatshare_core::error::{PopupError, Result};
use chatshare_core::host::{Clipboard, ConfirmationPrompt};
use chatshare_core::messaging::{
    ActiveTab, BackgroundCommand, BackgroundDispatcher, ContentRequest, ContentResponse,
};
use chatshare_core::storage::KeyValueStore;
use chatshare_infrastructure::InMemoryStore;

/// What the fake content script answers.
#[derive(Debug, Clone, Copy)]
pub enum TabReply {
    Gradio(bool),
    Silent,
    Unreachable,
}

pub struct FakeTab {
    pub url: Option<String>,
    pub reply: TabReply,
    pub requests: Mutex<Vec<ContentRequest>>,
}

impl FakeTab {
    pub fn new(url: Option<&str>, reply: TabReply) -> Self {
        Self {
            url: url.map(str::to_string),
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ActiveTab for FakeTab {
    async fn url(&self) -> Option<String> {
        self.url.clone()
    }

    async fn send(&self, request: ContentRequest) -> Result<Option<ContentResponse>> {
        self.requests.lock().unwrap().push(request);
        match self.reply {
            TabReply::Gradio(gradio) => Ok(Some(ContentResponse { gradio })),
            TabReply::Silent => Ok(None),
            TabReply::Unreachable => Err(PopupError::messaging(
                "Could not establish connection. Receiving end does not exist.",
            )),
        }
    }
}

#[derive(Default)]
pub struct RecordingDispatcher {
    pub commands: Mutex<Vec<BackgroundCommand>>,
}

impl BackgroundDispatcher for RecordingDispatcher {
    fn dispatch(&self, command: BackgroundCommand) {
        self.commands.lock().unwrap().push(command);
    }
}

/// Answers confirmation prompts from a script, defaulting to `true`.
#[derive(Default)]
pub struct ScriptedConfirmation {
    pub answers: Mutex<VecDeque<bool>>,
    pub asked: Mutex<Vec<String>>,
}

impl ScriptedConfirmation {
    pub fn answer(&self, answer: bool) {
        self.answers.lock().unwrap().push_back(answer);
    }
}

impl ConfirmationPrompt for ScriptedConfirmation {
    fn confirm(&self, message: &str) -> bool {
        self.asked.lock().unwrap().push(message.to_string());
        self.answers.lock().unwrap().pop_front().unwrap_or(true)
    }
}

#[derive(Default)]
pub struct RecordingClipboard {
    pub contents: Mutex<Option<String>>,
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

/// In-memory store that fails reads or removals of selected keys.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: InMemoryStore,
    pub failing_reads: Mutex<HashSet<String>>,
    pub failing_removes: Mutex<HashSet<String>>,
    pub fail_clear: Mutex<bool>,
}

impl FlakyStore {
    pub fn with_entries<const N: usize>(entries: [(&str, Value); N]) -> Self {
        Self {
            inner: InMemoryStore::with_entries(entries),
            ..Default::default()
        }
    }

    pub fn fail_read(&self, key: &str) {
        self.failing_reads.lock().unwrap().insert(key.to_string());
    }

    pub fn fail_remove(&self, key: &str) {
        self.failing_removes.lock().unwrap().insert(key.to_string());
    }

    pub fn fail_clear(&self) {
        *self.fail_clear.lock().unwrap() = true;
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        if self.failing_reads.lock().unwrap().contains(key) {
            return Err(PopupError::storage(format!("read of '{key}' failed")));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        if self.failing_removes.lock().unwrap().contains(key) {
            return Err(PopupError::storage(format!("removal of '{key}' failed")));
        }
        self.inner.remove(key).await
    }

    async fn clear(&self) -> Result<()> {
        if *self.fail_clear.lock().unwrap() {
            return Err(PopupError::storage("clear failed"));
        }
        self.inner.clear().await
    }
}

/// A controller wired to fakes, with handles to every fake.
pub struct Harness {
    pub controller: PopupController,
    pub store: Arc<FlakyStore>,
    pub tab: Arc<FakeTab>,
    pub dispatcher: Arc<RecordingDispatcher>,
    pub confirmation: Arc<ScriptedConfirmation>,
    pub clipboard: Arc<RecordingClipboard>,
    pub document: Arc<PopupDocument>,
}

impl Harness {
    pub fn new(store: FlakyStore, tab: FakeTab) -> Self {
        Self::with_document(store, tab, PopupDocument::new())
    }

    pub fn with_document(store: FlakyStore, tab: FakeTab, document: PopupDocument) -> Self {
        let store = Arc::new(store);
        let tab = Arc::new(tab);
        let dispatcher = Arc::new(RecordingDispatcher::default());
        let confirmation = Arc::new(ScriptedConfirmation::default());
        let clipboard = Arc::new(RecordingClipboard::default());
        let document = Arc::new(document);

        let controller = PopupController::new(PopupServices {
            store: store.clone(),
            active_tab: tab.clone(),
            dispatcher: dispatcher.clone(),
            confirmation: confirmation.clone(),
            clipboard: clipboard.clone(),
            presenter: document.clone(),
        });

        Self {
            controller,
            store,
            tab,
            dispatcher,
            confirmation,
            clipboard,
            document,
        }
    }

    /// Store and tab for the common case: a supported chat site.
    pub fn supported(store: FlakyStore) -> Self {
        Self::new(
            store,
            FakeTab::new(Some("https://chat.openai.com/c/1"), TabReply::Gradio(true)),
        )
    }
}

pub fn conversation(user: &[&str], bot: &[&str], timestamp: i64) -> Value {
    serde_json::json!({
        "user_msgs": user,
        "bot_msgs": bot,
        "timestamp": timestamp,
        "page_url": "https://chat.openai.com/c/1",
    })
}
