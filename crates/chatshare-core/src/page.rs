//! Popup pages and their markup identifiers.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// A navigable page of the popup.
///
/// The lowercase identifier doubles as the `data-page` attribute of the
/// navigation button; the page section carries the id `"{page}-page"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Conversations,
    Settings,
    /// Static content, nothing to load.
    Help,
}

impl Page {
    /// Id of the page section element.
    pub fn section_id(&self) -> String {
        format!("{}-page", self.as_ref())
    }

    /// Parses a `data-page` identifier; unknown identifiers yield `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        id.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_identifiers_round_trip() {
        for page in Page::iter() {
            assert_eq!(Page::from_id(&page.to_string()), Some(page));
        }
        assert_eq!(Page::Conversations.section_id(), "conversations-page");
    }

    #[test]
    fn test_unknown_identifier() {
        assert_eq!(Page::from_id("billing"), None);
        assert_eq!(Page::from_id("Dashboard"), None);
    }
}
