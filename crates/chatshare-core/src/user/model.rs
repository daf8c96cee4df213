//! UserMetadata domain model.

use serde::{Deserialize, Serialize};

/// Gender option that reveals the free-text custom gender field.
pub const SPECIFY_OWN_GENDER: &str = "Specify your own";

/// Demographic metadata the user attaches to shared conversations.
///
/// Overwritten wholesale whenever the settings form is submitted. Every field
/// defaults to an empty string so partially stored records still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetadata {
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub gender: String,
    /// Only present when `gender` is [`SPECIFY_OWN_GENDER`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_gender: Option<String>,
}

impl UserMetadata {
    /// Returns true when the custom gender field should be shown.
    pub fn wants_custom_gender(&self) -> bool {
        self.gender == SPECIFY_OWN_GENDER
    }
}

/// Raw values read from the settings form on submit.
///
/// Inputs that are missing from the form are `None` and default to empty
/// strings; no other validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub age: Option<String>,
    pub location: Option<String>,
    pub gender: Option<String>,
    pub custom_gender: Option<String>,
}

impl From<SettingsForm> for UserMetadata {
    fn from(form: SettingsForm) -> Self {
        let gender = form.gender.unwrap_or_default();
        let custom_gender = if gender == SPECIFY_OWN_GENDER {
            Some(form.custom_gender.unwrap_or_default())
        } else {
            None
        };

        Self {
            age: form.age.unwrap_or_default(),
            location: form.location.unwrap_or_default(),
            gender,
            custom_gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_gender_kept_for_specify_own() {
        let form = SettingsForm {
            age: Some("29".to_string()),
            location: Some("Lisbon".to_string()),
            gender: Some(SPECIFY_OWN_GENDER.to_string()),
            custom_gender: Some("agender".to_string()),
        };

        let metadata = UserMetadata::from(form);
        assert_eq!(metadata.custom_gender.as_deref(), Some("agender"));
        assert!(metadata.wants_custom_gender());
    }

    #[test]
    fn test_custom_gender_dropped_for_other_genders() {
        let form = SettingsForm {
            gender: Some("Female".to_string()),
            custom_gender: Some("leftover".to_string()),
            ..Default::default()
        };

        let metadata = UserMetadata::from(form);
        assert_eq!(metadata.gender, "Female");
        assert!(metadata.custom_gender.is_none());
        assert_eq!(metadata.age, "");

        let json = serde_json::to_value(&metadata).unwrap();
        assert!(json.get("customGender").is_none());
    }

    #[test]
    fn test_partial_record_deserializes() {
        let metadata: UserMetadata =
            serde_json::from_value(serde_json::json!({ "age": "40" })).unwrap();
        assert_eq!(metadata.age, "40");
        assert_eq!(metadata.location, "");
        assert!(metadata.custom_gender.is_none());
    }

    #[test]
    fn test_custom_gender_serialized_camel_case() {
        let metadata = UserMetadata {
            gender: SPECIFY_OWN_GENDER.to_string(),
            custom_gender: Some("two-spirit".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["customGender"], "two-spirit");
    }
}
