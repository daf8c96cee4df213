//! Presentation boundary.
//!
//! The controller computes view-models; a presenter applies them to whatever
//! surface shows the popup. Implementations are expected to be thin.

use chatshare_core::Page;
use chatshare_core::conversation::{ConversationListView, TranscriptView};
use chatshare_core::dashboard::DashboardView;
use chatshare_core::notification::{Banner, Toast};
use chatshare_core::user::SettingsView;

pub trait PopupPresenter: Send + Sync {
    /// Makes `page`'s navigation button and section the only active ones.
    ///
    /// Returns `false` when the surface has no section for `page`.
    fn activate_page(&self, page: Page) -> bool;

    /// Marks `page`'s section active without touching the others.
    fn reveal_section(&self, page: Page);

    fn render_dashboard(&self, view: &DashboardView);

    fn render_conversations(&self, view: &ConversationListView);

    /// Drops a single rendered conversation row, if present.
    fn remove_conversation_item(&self, conversation_id: &str);

    fn set_total_conversations(&self, total: usize);

    fn render_settings(&self, view: &SettingsView);

    fn set_custom_gender_visible(&self, visible: bool);

    fn show_banner(&self, banner: Banner);

    fn hide_banner(&self, banner: Banner);

    fn show_transcript(&self, transcript: &TranscriptView);

    fn close_transcript(&self);

    fn show_toast(&self, toast: &Toast);

    fn toggle_faq(&self, index: usize);
}
