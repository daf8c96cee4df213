//! Conversation list view-models.

use serde::Serialize;

use super::model::{ConversationRecord, RecordedAt};

/// Characters of the first user message kept in the preview.
pub const PREVIEW_CHAR_LIMIT: usize = 120;

pub const LOADING_MESSAGE: &str = "Loading conversations...";
pub const EMPTY_LIST_MESSAGE: &str =
    "No conversations found. Start chatting to see your conversations here!";
pub const NO_VALID_MESSAGE: &str = "No valid conversations found.";
pub const CLEARED_LIST_MESSAGE: &str = "No conversations found. Start chatting to see one here.";

const NO_CONTENT_PREVIEW: &str = "No content available";
const TITLE_ID_CHARS: usize = 8;

/// One rendered row of the conversations page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationItemView {
    pub id: String,
    pub title: String,
    pub date: String,
    pub preview: String,
    pub user_msg_count: usize,
    pub bot_msg_count: usize,
    /// Everything held locally is awaiting publish.
    pub pending: bool,
}

impl ConversationItemView {
    pub fn new(id: &str, record: &ConversationRecord) -> Self {
        let short_id: String = id.chars().take(TITLE_ID_CHARS).collect();

        let preview = match record.user_msgs.first() {
            Some(first) => {
                let head: String = first.chars().take(PREVIEW_CHAR_LIMIT).collect();
                format!("{head}...")
            }
            None => NO_CONTENT_PREVIEW.to_string(),
        };

        let date = match record.recorded_at() {
            RecordedAt::Missing => "Unknown date".to_string(),
            RecordedAt::Invalid => "Invalid date".to_string(),
            RecordedAt::At(at) => at.format("%b %-d, %I:%M %p").to_string(),
        };

        Self {
            id: id.to_string(),
            title: format!("Conversation {short_id}"),
            date,
            preview,
            user_msg_count: record.user_msg_count(),
            bot_msg_count: record.bot_msg_count(),
            pending: true,
        }
    }
}

/// What the conversations list container currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationListState {
    Loading,
    /// The local-ID list itself is empty.
    Empty,
    /// There were ids, but none of them resolved to a record.
    NoValid,
    /// The last rendered conversation was just removed.
    Cleared,
    Items(Vec<ConversationItemView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationListView {
    /// Length of the local-ID list, not the number of rendered items.
    pub total: usize,
    pub state: ConversationListState,
}

impl ConversationListView {
    pub fn loading(total: usize) -> Self {
        Self {
            total,
            state: ConversationListState::Loading,
        }
    }

    pub fn empty() -> Self {
        Self {
            total: 0,
            state: ConversationListState::Empty,
        }
    }

    pub fn cleared() -> Self {
        Self {
            total: 0,
            state: ConversationListState::Cleared,
        }
    }

    /// Builds the list from the records that could be fetched, in id order.
    pub fn from_records<'a, I>(total: usize, records: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a ConversationRecord)>,
    {
        if total == 0 {
            return Self::empty();
        }

        let items: Vec<ConversationItemView> = records
            .into_iter()
            .map(|(id, record)| ConversationItemView::new(id, record))
            .collect();

        let state = if items.is_empty() {
            ConversationListState::NoValid
        } else {
            ConversationListState::Items(items)
        };

        Self { total, state }
    }

    pub fn items(&self) -> &[ConversationItemView] {
        match &self.state {
            ConversationListState::Items(items) => items,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(user: &[&str], bot: &[&str]) -> ConversationRecord {
        ConversationRecord {
            user_msgs: user.iter().map(|s| s.to_string()).collect(),
            bot_msgs: bot.iter().map(|s| s.to_string()).collect(),
            timestamp: Some(json!(1_704_467_040_000u64)),
            page_url: None,
        }
    }

    #[test]
    fn test_item_view_fields() {
        let item = ConversationItemView::new("0123456789abcdef", &record(&["hello"], &["hi", "yo"]));

        assert_eq!(item.title, "Conversation 01234567");
        assert_eq!(item.preview, "hello...");
        assert_eq!(item.user_msg_count, 1);
        assert_eq!(item.bot_msg_count, 2);
        assert!(item.pending);
        // 2024-01-05T15:04:00Z
        assert_eq!(item.date, "Jan 5, 03:04 PM");
    }

    #[test]
    fn test_preview_truncates_to_limit() {
        let long = "x".repeat(300);
        let item = ConversationItemView::new("id", &record(&[&long], &[]));
        assert_eq!(item.preview.chars().count(), PREVIEW_CHAR_LIMIT + 3);
        assert!(item.preview.ends_with("..."));
    }

    #[test]
    fn test_placeholders() {
        let item = ConversationItemView::new("id", &ConversationRecord::default());
        assert_eq!(item.preview, "No content available");
        assert_eq!(item.date, "Unknown date");
        assert_eq!(item.title, "Conversation id");

        let bad = ConversationRecord {
            timestamp: Some(json!("not a date")),
            ..Default::default()
        };
        assert_eq!(ConversationItemView::new("id", &bad).date, "Invalid date");
    }

    #[test]
    fn test_list_states() {
        let empty: Vec<(&str, &ConversationRecord)> = Vec::new();
        assert_eq!(
            ConversationListView::from_records(0, empty.clone()).state,
            ConversationListState::Empty
        );

        let view = ConversationListView::from_records(3, empty);
        assert_eq!(view.total, 3);
        assert_eq!(view.state, ConversationListState::NoValid);
        assert!(view.items().is_empty());

        let r = record(&["a"], &["b"]);
        let view = ConversationListView::from_records(3, vec![("one", &r), ("two", &r)]);
        assert_eq!(view.items().len(), 2);
        assert_eq!(view.items()[1].id, "two");
    }
}
