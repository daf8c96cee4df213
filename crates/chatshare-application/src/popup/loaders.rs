//! Per-page loaders.

use futures::future::join_all;

use chatshare_core::Result;
use chatshare_core::conversation::{ConversationListView, ConversationRecord, TranscriptView};
use chatshare_core::dashboard::{DashboardInputs, DashboardView, SharingPreference};
use chatshare_core::site::site_name_for_url;
use chatshare_core::storage::keys;
use chatshare_core::user::{SettingsView, UserMetadata};

use super::PopupController;

impl PopupController {
    /// Computes and renders the dashboard.
    ///
    /// Any storage failure renders the fallback view instead.
    pub async fn load_dashboard(&self) -> DashboardView {
        let view = match self.dashboard_inputs().await {
            Ok(inputs) => DashboardView::build(&inputs),
            Err(e) => {
                tracing::error!(error = %e, "Error loading dashboard data");
                DashboardView::fallback()
            }
        };
        self.presenter.render_dashboard(&view);
        view
    }

    async fn dashboard_inputs(&self) -> Result<DashboardInputs> {
        let (messages_counter, should_share, url) = tokio::join!(
            self.storage.get::<u64>(keys::MESSAGES_COUNTER),
            self.storage.get::<SharingPreference>(keys::SHOULD_SHARE),
            self.active_tab.url(),
        );

        let state = self.state.read().await;
        Ok(DashboardInputs {
            messages_counter: messages_counter?,
            sharing: should_share?,
            site_name: site_name_for_url(url.as_deref()).to_string(),
            pending_count: state.pending_count(),
            age_verified: state.is_age_verified(),
        })
    }

    /// Re-reads the local-ID list and renders every resolvable conversation.
    pub async fn load_conversations(&self) -> ConversationListView {
        let cached_total = self.state.read().await.pending_count();
        self.presenter
            .render_conversations(&ConversationListView::loading(cached_total));

        let ids = match self.storage.get::<Vec<String>>(keys::LOCAL_DB_IDS).await {
            Ok(ids) => ids.unwrap_or_default(),
            Err(e) => {
                tracing::error!(error = %e, "Error loading conversations");
                let view = ConversationListView::empty();
                self.presenter.render_conversations(&view);
                self.presenter.set_total_conversations(view.total);
                return view;
            }
        };
        self.state.write().await.replace_local_db_ids(ids.clone());

        let records = join_all(ids.iter().map(|id| self.fetch_record(id))).await;
        let view = ConversationListView::from_records(
            ids.len(),
            ids.iter()
                .zip(records.iter())
                .filter_map(|(id, record)| record.as_ref().map(|r| (id.as_str(), r))),
        );
        tracing::debug!(
            total = view.total,
            rendered = view.items().len(),
            "conversations loaded"
        );

        self.presenter.render_conversations(&view);
        self.presenter.set_total_conversations(view.total);
        view
    }

    /// Reads one conversation record; failures are logged and yield `None`.
    async fn fetch_record(&self, conversation_id: &str) -> Option<ConversationRecord> {
        match self.storage.get::<ConversationRecord>(conversation_id).await {
            Ok(Some(record)) => Some(record),
            Ok(None) => {
                tracing::warn!(conversation_id, "Conversation record missing");
                None
            }
            Err(e) => {
                tracing::error!(conversation_id, error = %e, "Error loading conversation");
                None
            }
        }
    }

    /// Opens the transcript overlay for `conversation_id`.
    ///
    /// Missing records are silently ignored.
    pub async fn view_conversation(&self, conversation_id: &str) -> Option<TranscriptView> {
        let record = self.fetch_record(conversation_id).await?;
        let transcript = TranscriptView::build(conversation_id, &record);
        self.presenter.show_transcript(&transcript);
        Some(transcript)
    }

    pub fn close_transcript(&self) {
        self.presenter.close_transcript();
    }

    /// Re-reads the user metadata and fills the settings form.
    ///
    /// The form's submit handler is bound on the first call, even when the
    /// read fails.
    pub async fn load_settings(&self) -> Option<SettingsView> {
        let loaded = self.storage.get::<UserMetadata>(keys::USER_METADATA).await;

        let mut state = self.state.write().await;
        if state.bind_settings_form() {
            tracing::debug!("settings form bound");
        }

        match loaded {
            Ok(metadata) => {
                state.set_user_metadata(metadata.unwrap_or_default());
                let view = SettingsView::from_metadata(state.user_metadata());
                drop(state);
                self.presenter.render_settings(&view);
                Some(view)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading settings");
                None
            }
        }
    }
}
