//! In-memory popup document.
//!
//! Mirrors the element state of the popup markup: which navigation button and
//! page section carry `active`, the text of the dashboard counters, the
//! conversation list container, the settings form, banners, the transcript
//! overlay and the toast container. Used as the presentation surface outside
//! a browser and as the assertion target in tests.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use strum::IntoEnumIterator;

use chatshare_core::Page;
use chatshare_core::conversation::{
    ConversationItemView, ConversationListState, ConversationListView, TranscriptView,
};
use chatshare_core::dashboard::{DashboardView, ProgressView};
use chatshare_core::notification::{Banner, DEFAULT_TOAST_DURATION, Toast};
use chatshare_core::user::SettingsView;

use crate::presenter::PopupPresenter;

/// A toggleable element identified by a key (`data-page` or section id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub key: String,
    pub active: bool,
}

/// `#sharing-status`, `#progress-card` and the counter elements.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardElements {
    pub conversations_shared: String,
    pub pending_conversations: String,
    pub current_site: String,
    pub user_status: String,
    /// `#sharing-status` without the `inactive` class.
    pub sharing_active: bool,
    pub sharing_text: String,
    pub progress_visible: bool,
    pub progress_text: String,
    pub progress_percentage: String,
    /// CSS width of `#progress-fill`, e.g. `"50%"`.
    pub progress_fill_width: String,
}

impl Default for DashboardElements {
    fn default() -> Self {
        Self {
            conversations_shared: "0".to_string(),
            pending_conversations: "0".to_string(),
            current_site: "Unknown".to_string(),
            user_status: String::new(),
            sharing_active: true,
            sharing_text: String::new(),
            progress_visible: false,
            progress_text: String::new(),
            progress_percentage: String::new(),
            progress_fill_width: "0%".to_string(),
        }
    }
}

/// Content of `#conversations-list`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListContent {
    #[default]
    Blank,
    Loading,
    Empty,
    NoValid,
    Cleared,
    Items(Vec<ConversationItemView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShownToast {
    pub toast: Toast,
    pub expires_at: Instant,
}

/// Snapshot of the document's element state.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentState {
    pub nav_buttons: Vec<Element>,
    pub sections: Vec<Element>,
    pub dashboard: DashboardElements,
    pub conversation_list: ListContent,
    pub total_conversations: String,
    pub settings: SettingsView,
    pub custom_gender_visible: bool,
    pub banners: HashSet<Banner>,
    pub overlay: Option<TranscriptView>,
    pub toasts: Vec<ShownToast>,
    /// Open state of each FAQ entry, in markup order.
    pub faq_open: Vec<bool>,
}

impl DocumentState {
    pub fn active_nav_buttons(&self) -> Vec<&str> {
        active_keys(&self.nav_buttons)
    }

    pub fn active_sections(&self) -> Vec<&str> {
        active_keys(&self.sections)
    }

    pub fn is_banner_visible(&self, banner: Banner) -> bool {
        self.banners.contains(&banner)
    }

    /// Items currently rendered in the conversation list.
    pub fn conversation_items(&self) -> &[ConversationItemView] {
        match &self.conversation_list {
            ListContent::Items(items) => items,
            _ => &[],
        }
    }

    pub fn toast_messages(&self) -> Vec<&str> {
        self.toasts.iter().map(|t| t.toast.message.as_str()).collect()
    }

    /// Rebuilds the list view-model from what the container shows.
    ///
    /// A container that was never rendered reads as empty.
    pub fn conversation_list_view(&self) -> ConversationListView {
        let state = match &self.conversation_list {
            ListContent::Blank | ListContent::Empty => ConversationListState::Empty,
            ListContent::Loading => ConversationListState::Loading,
            ListContent::NoValid => ConversationListState::NoValid,
            ListContent::Cleared => ConversationListState::Cleared,
            ListContent::Items(items) => ConversationListState::Items(items.clone()),
        };
        ConversationListView {
            total: self.total_conversations.parse().unwrap_or(0),
            state,
        }
    }
}

fn active_keys(elements: &[Element]) -> Vec<&str> {
    elements
        .iter()
        .filter(|e| e.active)
        .map(|e| e.key.as_str())
        .collect()
}

pub struct PopupDocument {
    state: Mutex<DocumentState>,
    toast_duration: Duration,
}

impl Default for PopupDocument {
    fn default() -> Self {
        Self::with_pages(Page::iter())
    }
}

impl PopupDocument {
    /// A document whose markup contains every page.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document containing navigation buttons for every page but sections
    /// only for `pages`.
    pub fn with_pages(pages: impl IntoIterator<Item = Page>) -> Self {
        let nav_buttons = Page::iter()
            .map(|page| Element {
                key: page.to_string(),
                active: false,
            })
            .collect();
        let sections = pages
            .into_iter()
            .map(|page| Element {
                key: page.section_id(),
                active: false,
            })
            .collect();

        Self {
            state: Mutex::new(DocumentState {
                nav_buttons,
                sections,
                dashboard: DashboardElements::default(),
                conversation_list: ListContent::Blank,
                total_conversations: "0".to_string(),
                settings: SettingsView::default(),
                custom_gender_visible: false,
                banners: HashSet::new(),
                overlay: None,
                toasts: Vec::new(),
                faq_open: Vec::new(),
            }),
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn with_faq_entries(self, count: usize) -> Self {
        self.lock().faq_open = vec![false; count];
        self
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn snapshot(&self) -> DocumentState {
        self.lock().clone()
    }

    /// Toasts that have not timed out yet.
    pub fn visible_toasts(&self) -> Vec<Toast> {
        let now = Instant::now();
        self.lock()
            .toasts
            .iter()
            .filter(|shown| shown.expires_at > now)
            .map(|shown| shown.toast.clone())
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PopupPresenter for PopupDocument {
    fn activate_page(&self, page: Page) -> bool {
        let mut state = self.lock();
        let page_id = page.to_string();
        for button in &mut state.nav_buttons {
            button.active = button.key == page_id;
        }

        let section_id = page.section_id();
        let mut found = false;
        for section in &mut state.sections {
            section.active = section.key == section_id;
            found |= section.active;
        }
        found
    }

    fn reveal_section(&self, page: Page) {
        let section_id = page.section_id();
        if let Some(section) = self
            .lock()
            .sections
            .iter_mut()
            .find(|s| s.key == section_id)
        {
            section.active = true;
        }
    }

    fn render_dashboard(&self, view: &DashboardView) {
        let mut state = self.lock();
        let dashboard = &mut state.dashboard;
        dashboard.conversations_shared = view.conversations_shared.clone();
        dashboard.pending_conversations = view.pending_conversations.clone();
        dashboard.current_site = view.current_site.clone();
        dashboard.user_status = view.user_status.clone();

        if let Some(sharing) = &view.sharing {
            dashboard.sharing_active = sharing.active;
            dashboard.sharing_text = sharing.text.clone();
        }

        match &view.progress {
            Some(ProgressView::Visible {
                text,
                percentage_label,
                fill_percent,
            }) => {
                dashboard.progress_visible = true;
                dashboard.progress_text = text.clone();
                dashboard.progress_percentage = percentage_label.clone();
                dashboard.progress_fill_width = format!("{fill_percent}%");
            }
            Some(ProgressView::Hidden) => dashboard.progress_visible = false,
            None => {}
        }
    }

    fn render_conversations(&self, view: &ConversationListView) {
        let mut state = self.lock();
        state.total_conversations = view.total.to_string();
        state.conversation_list = match &view.state {
            ConversationListState::Loading => ListContent::Loading,
            ConversationListState::Empty => ListContent::Empty,
            ConversationListState::NoValid => ListContent::NoValid,
            ConversationListState::Cleared => ListContent::Cleared,
            ConversationListState::Items(items) => ListContent::Items(items.clone()),
        };
    }

    fn remove_conversation_item(&self, conversation_id: &str) {
        if let ListContent::Items(items) = &mut self.lock().conversation_list {
            items.retain(|item| item.id != conversation_id);
        }
    }

    fn set_total_conversations(&self, total: usize) {
        self.lock().total_conversations = total.to_string();
    }

    fn render_settings(&self, view: &SettingsView) {
        let mut state = self.lock();
        state.custom_gender_visible = view.custom_gender_visible;
        state.settings = view.clone();
    }

    fn set_custom_gender_visible(&self, visible: bool) {
        self.lock().custom_gender_visible = visible;
    }

    fn show_banner(&self, banner: Banner) {
        self.lock().banners.insert(banner);
    }

    fn hide_banner(&self, banner: Banner) {
        self.lock().banners.remove(&banner);
    }

    fn show_transcript(&self, transcript: &TranscriptView) {
        self.lock().overlay = Some(transcript.clone());
    }

    fn close_transcript(&self) {
        self.lock().overlay = None;
    }

    fn show_toast(&self, toast: &Toast) {
        let expires_at = Instant::now() + self.toast_duration;
        self.lock().toasts.push(ShownToast {
            toast: toast.clone(),
            expires_at,
        });
    }

    fn toggle_faq(&self, index: usize) {
        match self.lock().faq_open.get_mut(index) {
            Some(open) => *open = !*open,
            None => tracing::debug!(index, "no FAQ entry to toggle"),
        }
    }
}
