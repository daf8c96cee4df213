//! The popup controller.
//!
//! # Module Structure
//!
//! - `router`: page navigation
//! - `loaders`: dashboard, conversations and settings hydration
//! - `actions`: click and submit handlers
//!
//! One controller instance exists per opened popup. It owns the session
//! state; every handler reads what it needs from the state, releases it,
//! awaits storage or messaging, and only then writes back.

mod actions;
mod loaders;
mod router;

use std::sync::Arc;

use tokio::sync::RwLock;

use chatshare_core::Page;
use chatshare_core::host::{Clipboard, ConfirmationPrompt};
use chatshare_core::messaging::{ActiveTab, BackgroundDispatcher, ContentRequest, ContentResponse};
use chatshare_core::notification::Banner;
use chatshare_core::storage::{KeyValueStore, keys};
use chatshare_core::user::UserMetadata;

use crate::presenter::PopupPresenter;
use crate::session::{InitialData, SessionState};
use crate::storage_adapter::StorageAdapter;

pub use actions::{
    ActionOutcome, CLEAR_ALL_CONFIRMATION, CLEAR_LOCAL_CONFIRMATION, PublishScope,
    REMOVE_CONFIRMATION, UnavailableFeature,
};

/// Everything the controller talks to.
pub struct PopupServices {
    pub store: Arc<dyn KeyValueStore>,
    pub active_tab: Arc<dyn ActiveTab>,
    pub dispatcher: Arc<dyn BackgroundDispatcher>,
    pub confirmation: Arc<dyn ConfirmationPrompt>,
    pub clipboard: Arc<dyn Clipboard>,
    pub presenter: Arc<dyn PopupPresenter>,
}

/// Result of asking the active tab's content script whether it is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSupport {
    Supported,
    Unsupported,
    /// The content script could not be reached; no banner is shown.
    Unreachable,
}

pub struct PopupController {
    storage: StorageAdapter,
    active_tab: Arc<dyn ActiveTab>,
    dispatcher: Arc<dyn BackgroundDispatcher>,
    confirmation: Arc<dyn ConfirmationPrompt>,
    clipboard: Arc<dyn Clipboard>,
    presenter: Arc<dyn PopupPresenter>,
    state: RwLock<SessionState>,
}

impl PopupController {
    pub fn new(services: PopupServices) -> Self {
        Self {
            storage: StorageAdapter::new(services.store),
            active_tab: services.active_tab,
            dispatcher: services.dispatcher,
            confirmation: services.confirmation,
            clipboard: services.clipboard,
            presenter: services.presenter,
            state: RwLock::new(SessionState::new()),
        }
    }

    /// Copy of the current session state.
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Runs the popup startup sequence.
    ///
    /// The dashboard is shown immediately, the cached state is hydrated,
    /// and finally the active tab decides which banner appears.
    pub async fn open(&self) -> TabSupport {
        self.navigate(Page::Dashboard).await;
        self.load_initial_data().await;
        self.check_tab_support().await
    }

    /// Hydrates the session state from storage.
    ///
    /// The three reads run concurrently and must all succeed; otherwise the
    /// failure is logged and the defaults stay in place. Returns whether the
    /// session is initialized afterwards.
    pub async fn load_initial_data(&self) -> bool {
        let (age_verified, user_metadata, local_db_ids) = tokio::join!(
            self.storage.get::<bool>(keys::AGE_VERIFIED),
            self.storage.get::<UserMetadata>(keys::USER_METADATA),
            self.storage.get::<Vec<String>>(keys::LOCAL_DB_IDS),
        );

        match (age_verified, user_metadata, local_db_ids) {
            (Ok(age_verified), Ok(user_metadata), Ok(local_db_ids)) => {
                let data = InitialData {
                    age_verified: age_verified.unwrap_or(false),
                    user_metadata: user_metadata.unwrap_or_default(),
                    local_db_ids: local_db_ids.unwrap_or_default(),
                };
                tracing::debug!(
                    age_verified = data.age_verified,
                    pending = data.local_db_ids.len(),
                    "initial data loaded"
                );
                self.state.write().await.hydrate(data);
                true
            }
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                tracing::error!(error = %e, "Error loading initial data");
                false
            }
        }
    }

    /// Asks the content script whether the active tab is a supported chat
    /// site and shows the matching banner.
    pub async fn check_tab_support(&self) -> TabSupport {
        match self.active_tab.send(ContentRequest::SupportQuery).await {
            Ok(Some(ContentResponse { gradio: true })) => {
                let verified = self.state.read().await.is_age_verified();
                if verified {
                    self.load_dashboard().await;
                } else {
                    self.presenter.show_banner(Banner::Verification);
                }
                TabSupport::Supported
            }
            Ok(_) => {
                self.presenter.show_banner(Banner::UnsupportedSite);
                TabSupport::Unsupported
            }
            Err(e) => {
                tracing::info!(error = %e, "Error communicating with content script");
                TabSupport::Unreachable
            }
        }
    }

    /// Reveals the dashboard section and loads it.
    async fn show_main_interface(&self) {
        self.presenter.reveal_section(Page::Dashboard);
        self.load_dashboard().await;
    }
}

