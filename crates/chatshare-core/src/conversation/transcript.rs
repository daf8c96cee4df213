//! Plain-text transcript shown in the conversation overlay.

use super::model::ConversationRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptView {
    pub conversation_id: String,
    pub text: String,
}

impl TranscriptView {
    /// Interleaves user and bot messages turn by turn.
    ///
    /// Empty messages are skipped; a turn where only one side spoke yields a
    /// single entry.
    pub fn build(conversation_id: &str, record: &ConversationRecord) -> Self {
        let mut text = format!(
            "Conversation ID: {}\nTimestamp: {}\nURL: {}\n\n",
            conversation_id,
            record.timestamp_label(),
            record
                .page_url
                .as_deref()
                .filter(|url| !url.is_empty())
                .unwrap_or("Unknown"),
        );

        for turn in 0..record.turn_count() {
            if let Some(msg) = record.user_msgs.get(turn).filter(|m| !m.is_empty()) {
                text.push_str(&format!("👤 User: {msg}\n\n"));
            }
            if let Some(msg) = record.bot_msgs.get(turn).filter(|m| !m.is_empty()) {
                text.push_str(&format!("🤖 AI: {msg}\n\n"));
            }
        }

        Self {
            conversation_id: conversation_id.to_string(),
            text,
        }
    }
}
