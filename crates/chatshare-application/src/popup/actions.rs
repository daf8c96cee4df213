//! Click and submit handlers.

use chatshare_core::Page;
use chatshare_core::conversation::ConversationListView;
use chatshare_core::messaging::BackgroundCommand;
use chatshare_core::notification::{Banner, Toast};
use chatshare_core::storage::keys;
use chatshare_core::user::{SPECIFY_OWN_GENDER, SettingsForm, UserMetadata};

use super::PopupController;

pub const REMOVE_CONFIRMATION: &str = "Are you sure you want to remove this conversation?";
pub const CLEAR_ALL_CONFIRMATION: &str = "Are you sure you want to clear all local data?";
pub const CLEAR_LOCAL_CONFIRMATION: &str = "Are you sure you want to clear local storage?";

/// How a confirmable action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user declined the confirmation prompt.
    Cancelled,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishScope {
    Pending,
    All,
}

impl PublishScope {
    fn toast_message(&self) -> &'static str {
        match self {
            Self::Pending => "Publishing pending conversations",
            Self::All => "Publishing all conversations",
        }
    }
}

/// Buttons that exist in the popup but have no behavior yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableFeature {
    QuickDownload,
    CsvDownload,
    Export,
}

impl UnavailableFeature {
    fn toast_message(&self) -> &'static str {
        match self {
            Self::QuickDownload => "Download feature coming soon",
            Self::CsvDownload => "CSV download feature coming soon",
            Self::Export => "Export feature coming soon",
        }
    }
}

impl PopupController {
    /// Removes a conversation after confirmation.
    pub async fn remove_conversation(&self, conversation_id: &str) -> ActionOutcome {
        if !self.confirmation.confirm(REMOVE_CONFIRMATION) {
            return ActionOutcome::Cancelled;
        }

        if let Err(e) = self.storage.remove(conversation_id).await {
            tracing::error!(conversation_id, error = %e, "Error removing conversation");
            self.presenter
                .show_toast(&Toast::error("Error removing conversation"));
            return ActionOutcome::Failed;
        }

        let (remaining, current_page) = {
            let mut state = self.state.write().await;
            state.remove_local_db_id(conversation_id);
            (state.local_db_ids().to_vec(), state.current_page())
        };
        self.storage.set(keys::LOCAL_DB_IDS, &remaining).await;
        tracing::info!(conversation_id, remaining = remaining.len(), "conversation removed");

        self.presenter.remove_conversation_item(conversation_id);
        self.presenter.set_total_conversations(remaining.len());

        if current_page == Page::Dashboard {
            self.load_dashboard().await;
        }
        if remaining.is_empty() {
            self.presenter
                .render_conversations(&ConversationListView::cleared());
        }

        ActionOutcome::Completed
    }

    /// Saves the settings form.
    ///
    /// Submissions arriving before the form was bound by
    /// [`load_settings`](Self::load_settings) are ignored.
    pub async fn submit_settings(&self, form: SettingsForm) -> Option<UserMetadata> {
        let metadata = UserMetadata::from(form);
        {
            let mut state = self.state.write().await;
            if !state.is_settings_form_bound() {
                tracing::warn!("Settings submitted before the form was loaded");
                return None;
            }
            state.set_user_metadata(metadata.clone());
        }

        self.storage.set(keys::USER_METADATA, &metadata).await;
        tracing::info!("user metadata saved");
        self.presenter
            .show_toast(&Toast::success("User information saved"));
        Some(metadata)
    }

    /// Shows the custom-gender input only for the free-text option.
    pub fn gender_changed(&self, gender: &str) {
        self.presenter
            .set_custom_gender_visible(gender == SPECIFY_OWN_GENDER);
    }

    pub async fn verify_age(&self) {
        self.state.write().await.mark_age_verified();
        self.storage.set(keys::AGE_VERIFIED, &true).await;
        tracing::info!("age verified");

        self.presenter.hide_banner(Banner::Verification);
        self.show_main_interface().await;
        self.presenter
            .show_toast(&Toast::success("Age verification completed"));
    }

    /// Asks the background worker to publish. Delivery is not confirmed.
    pub fn publish(&self, scope: PublishScope) {
        tracing::info!(?scope, "publish requested");
        self.dispatcher.dispatch(BackgroundCommand::Publish);
        self.presenter
            .show_toast(&Toast::success(scope.toast_message()));
    }

    /// Wipes the storage namespace and every cached value.
    pub async fn clear_all_data(&self) -> ActionOutcome {
        if !self.confirmation.confirm(CLEAR_ALL_CONFIRMATION) {
            return ActionOutcome::Cancelled;
        }

        if let Err(e) = self.storage.clear().await {
            tracing::error!(error = %e, "Error clearing data");
            return ActionOutcome::Failed;
        }

        self.state.write().await.reset_cached();
        tracing::info!("all data cleared");
        self.presenter.show_toast(&Toast::success("All data cleared"));
        self.load_dashboard().await;
        ActionOutcome::Completed
    }

    /// Wipes the storage namespace from the settings page.
    ///
    /// Cached values stay as they are until the popup is reopened.
    pub async fn clear_local_storage(&self) -> ActionOutcome {
        if !self.confirmation.confirm(CLEAR_LOCAL_CONFIRMATION) {
            return ActionOutcome::Cancelled;
        }

        if let Err(e) = self.storage.clear().await {
            tracing::error!(error = %e, "Error clearing local storage");
            return ActionOutcome::Failed;
        }

        tracing::info!("local storage cleared");
        self.presenter
            .show_toast(&Toast::success("Local storage cleared"));
        ActionOutcome::Completed
    }

    /// Copies the stored user id to the clipboard.
    pub async fn copy_user_id(&self) -> Option<String> {
        let user_id = match self.storage.get::<String>(keys::USER_ID).await {
            Ok(user_id) => user_id.filter(|id| !id.is_empty()),
            Err(e) => {
                tracing::error!(error = %e, "Error reading user id");
                return None;
            }
        };

        let Some(user_id) = user_id else {
            self.presenter.show_toast(&Toast::error("No user ID found"));
            return None;
        };

        if let Err(e) = self.clipboard.write_text(&user_id).await {
            tracing::error!(error = %e, "Error copying user id");
            return None;
        }

        self.presenter
            .show_toast(&Toast::success("User ID copied to clipboard"));
        Some(user_id)
    }

    pub fn toggle_faq(&self, index: usize) {
        self.presenter.toggle_faq(index);
    }

    pub fn request_unavailable(&self, feature: UnavailableFeature) {
        tracing::debug!(?feature, "unavailable feature requested");
        self.presenter
            .show_toast(&Toast::info(feature.toast_message()));
    }
}
