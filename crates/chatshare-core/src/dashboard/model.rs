//! Sharing preference model.

use serde::{Deserialize, Serialize};

/// Whether captured conversations may be shared.
///
/// Owned by the sharing settings; the popup only reads it. An absent record
/// means sharing is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharingPreference {
    #[serde(default)]
    pub should_share: bool,
}

impl SharingPreference {
    pub fn effective(preference: Option<Self>) -> bool {
        preference.map_or(true, |p| p.should_share)
    }
}
