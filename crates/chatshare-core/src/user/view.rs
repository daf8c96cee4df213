//! Settings-page view-model.

use super::model::UserMetadata;

/// Values the settings form is populated with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsView {
    pub age: String,
    pub location: String,
    pub gender: String,
    pub custom_gender_visible: bool,
    /// Only filled while the custom gender field is visible.
    pub custom_gender: Option<String>,
}

impl SettingsView {
    pub fn from_metadata(metadata: &UserMetadata) -> Self {
        let custom_gender_visible = metadata.wants_custom_gender();
        Self {
            age: metadata.age.clone(),
            location: metadata.location.clone(),
            gender: metadata.gender.clone(),
            custom_gender_visible,
            custom_gender: custom_gender_visible
                .then(|| metadata.custom_gender.clone().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::SPECIFY_OWN_GENDER;

    #[test]
    fn test_hidden_custom_gender() {
        let view = SettingsView::from_metadata(&UserMetadata {
            age: "33".to_string(),
            gender: "Male".to_string(),
            custom_gender: Some("stale".to_string()),
            ..Default::default()
        });
        assert!(!view.custom_gender_visible);
        assert!(view.custom_gender.is_none());
        assert_eq!(view.age, "33");
    }

    #[test]
    fn test_visible_custom_gender() {
        let view = SettingsView::from_metadata(&UserMetadata {
            gender: SPECIFY_OWN_GENDER.to_string(),
            ..Default::default()
        });
        assert!(view.custom_gender_visible);
        assert_eq!(view.custom_gender.as_deref(), Some(""));
    }
}
