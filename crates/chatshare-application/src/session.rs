//! Session state of one popup instance.
//!
//! Lives exactly as long as the popup is open. Hydrated once from storage on
//! open, then mutated by user actions through the accessor methods below.

use chatshare_core::Page;
use chatshare_core::user::UserMetadata;

/// Values read from storage when the popup opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialData {
    pub age_verified: bool,
    pub user_metadata: UserMetadata,
    pub local_db_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    current_page: Page,
    local_db_ids: Vec<String>,
    user_metadata: UserMetadata,
    age_verified: bool,
    initialized: bool,
    settings_form_bound: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached copies with freshly loaded data and marks the
    /// session initialized.
    pub fn hydrate(&mut self, data: InitialData) {
        self.age_verified = data.age_verified;
        self.user_metadata = data.user_metadata;
        self.local_db_ids = data.local_db_ids;
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn set_current_page(&mut self, page: Page) {
        self.current_page = page;
    }

    pub fn local_db_ids(&self) -> &[String] {
        &self.local_db_ids
    }

    pub fn pending_count(&self) -> usize {
        self.local_db_ids.len()
    }

    pub fn replace_local_db_ids(&mut self, ids: Vec<String>) {
        self.local_db_ids = ids;
    }

    /// Drops every occurrence of `conversation_id`; returns whether any was found.
    pub fn remove_local_db_id(&mut self, conversation_id: &str) -> bool {
        let before = self.local_db_ids.len();
        self.local_db_ids.retain(|id| id != conversation_id);
        self.local_db_ids.len() != before
    }

    pub fn user_metadata(&self) -> &UserMetadata {
        &self.user_metadata
    }

    pub fn set_user_metadata(&mut self, metadata: UserMetadata) {
        self.user_metadata = metadata;
    }

    pub fn is_age_verified(&self) -> bool {
        self.age_verified
    }

    /// There is no way back: verification is never revoked from the popup.
    pub fn mark_age_verified(&mut self) {
        self.age_verified = true;
    }

    /// Forgets everything cached from storage after the namespace was wiped.
    pub fn reset_cached(&mut self) {
        self.local_db_ids.clear();
        self.age_verified = false;
        self.user_metadata = UserMetadata::default();
    }

    /// Marks the settings form submit handler as attached.
    ///
    /// Returns `true` only the first time.
    pub fn bind_settings_form(&mut self) -> bool {
        !std::mem::replace(&mut self.settings_form_bound, true)
    }

    pub fn is_settings_form_bound(&self) -> bool {
        self.settings_form_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_session() {
        let state = SessionState::new();
        assert_eq!(state.current_page(), Page::Dashboard);
        assert!(!state.is_initialized());
        assert!(!state.is_age_verified());
        assert_eq!(state.pending_count(), 0);
    }

    #[test]
    fn test_hydrate() {
        let mut state = SessionState::new();
        state.hydrate(InitialData {
            age_verified: true,
            user_metadata: UserMetadata {
                age: "30".to_string(),
                ..Default::default()
            },
            local_db_ids: ids(&["a", "b"]),
        });

        assert!(state.is_initialized());
        assert!(state.is_age_verified());
        assert_eq!(state.user_metadata().age, "30");
        assert_eq!(state.pending_count(), 2);
    }

    #[test]
    fn test_remove_local_db_id() {
        let mut state = SessionState::new();
        state.replace_local_db_ids(ids(&["a", "b", "c"]));

        assert!(state.remove_local_db_id("b"));
        assert_eq!(state.local_db_ids(), ids(&["a", "c"]).as_slice());
        assert!(!state.remove_local_db_id("zzz"));
    }

    #[test]
    fn test_reset_cached_keeps_page() {
        let mut state = SessionState::new();
        state.set_current_page(Page::Settings);
        state.mark_age_verified();
        state.replace_local_db_ids(ids(&["a"]));

        state.reset_cached();
        assert_eq!(state.current_page(), Page::Settings);
        assert!(!state.is_age_verified());
        assert_eq!(state.pending_count(), 0);
    }

    #[test]
    fn test_bind_settings_form_once() {
        let mut state = SessionState::new();
        assert!(state.bind_settings_form());
        assert!(!state.bind_settings_form());
        assert!(state.is_settings_form_bound());
    }
}
