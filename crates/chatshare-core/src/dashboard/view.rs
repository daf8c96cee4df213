//! Dashboard view-model.

use super::model::SharingPreference;

/// Pending conversations that fill the progress bar completely.
pub const PROGRESS_TARGET: usize = 10;

/// Values the dashboard is computed from.
#[derive(Debug, Clone, Default)]
pub struct DashboardInputs {
    pub messages_counter: Option<u64>,
    pub sharing: Option<SharingPreference>,
    pub site_name: String,
    pub pending_count: usize,
    pub age_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharingIndicator {
    /// Drives the `inactive` class of `#sharing-status`.
    pub active: bool,
    pub text: String,
}

impl SharingIndicator {
    pub fn new(should_share: bool, age_verified: bool) -> Self {
        let text = match (should_share, age_verified) {
            (true, true) => "Sharing Active",
            (true, false) => "Sharing Disabled (Unverified)",
            (false, _) => "Sharing Disabled",
        };
        Self {
            active: should_share && age_verified,
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgressView {
    Hidden,
    Visible {
        text: String,
        percentage_label: String,
        /// Width of the fill bar in percent, never above 100.
        fill_percent: f64,
    },
}

impl ProgressView {
    pub fn for_pending(pending_count: usize) -> Self {
        if pending_count == 0 {
            return Self::Hidden;
        }

        let plural = if pending_count == 1 { "" } else { "s" };
        let fill_percent =
            (pending_count as f64 / PROGRESS_TARGET as f64 * 100.0).min(100.0);

        Self::Visible {
            text: format!("{pending_count} conversation{plural} ready to share"),
            percentage_label: format!("{}%", fill_percent.round()),
            fill_percent,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Text content of the dashboard elements.
///
/// `sharing` and `progress` are `None` in the fallback view, meaning the
/// elements keep whatever they showed before.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub conversations_shared: String,
    pub pending_conversations: String,
    pub current_site: String,
    pub user_status: String,
    pub sharing: Option<SharingIndicator>,
    pub progress: Option<ProgressView>,
}

impl DashboardView {
    pub fn build(inputs: &DashboardInputs) -> Self {
        let should_share = SharingPreference::effective(inputs.sharing);

        Self {
            conversations_shared: inputs.messages_counter.unwrap_or(0).to_string(),
            pending_conversations: inputs.pending_count.to_string(),
            current_site: inputs.site_name.clone(),
            user_status: if inputs.age_verified {
                "Verified"
            } else {
                "Unverified"
            }
            .to_string(),
            sharing: Some(SharingIndicator::new(should_share, inputs.age_verified)),
            progress: Some(ProgressView::for_pending(inputs.pending_count)),
        }
    }

    /// Safe defaults shown when loading the dashboard failed midway.
    pub fn fallback() -> Self {
        Self {
            conversations_shared: "0".to_string(),
            pending_conversations: "0".to_string(),
            current_site: "Unknown".to_string(),
            user_status: "Error".to_string(),
            sharing: None,
            progress: None,
        }
    }
}
