//! ConversationRecord domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A captured conversation as stored under its id.
///
/// Every field is optional on disk. `timestamp` is kept as raw JSON because
/// capture scripts have written both epoch milliseconds and date strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub user_msgs: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bot_msgs: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub page_url: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Outcome of interpreting the stored timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedAt {
    Missing,
    Invalid,
    At(DateTime<Utc>),
}

impl ConversationRecord {
    pub fn user_msg_count(&self) -> usize {
        self.user_msgs.len()
    }

    pub fn bot_msg_count(&self) -> usize {
        self.bot_msgs.len()
    }

    /// Number of transcript rows, i.e. the longer of the two message lists.
    pub fn turn_count(&self) -> usize {
        self.user_msgs.len().max(self.bot_msgs.len())
    }

    /// Interprets the stored timestamp.
    ///
    /// Empty-ish values (`null`, `0`, `false`, `""`) count as missing; numbers
    /// are epoch milliseconds; strings must be RFC 3339.
    pub fn recorded_at(&self) -> RecordedAt {
        match &self.timestamp {
            None | Some(Value::Null) | Some(Value::Bool(false)) => RecordedAt::Missing,
            Some(Value::String(s)) if s.is_empty() => RecordedAt::Missing,
            Some(Value::Number(n)) => match n.as_f64() {
                Some(ms) if ms == 0.0 => RecordedAt::Missing,
                Some(ms) if ms.is_finite() => DateTime::from_timestamp_millis(ms as i64)
                    .map_or(RecordedAt::Invalid, RecordedAt::At),
                _ => RecordedAt::Invalid,
            },
            Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
                .map(|dt| RecordedAt::At(dt.with_timezone(&Utc)))
                .unwrap_or(RecordedAt::Invalid),
            Some(_) => RecordedAt::Invalid,
        }
    }

    /// Raw timestamp as shown in the transcript header.
    pub fn timestamp_label(&self) -> String {
        match &self.timestamp {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            _ => "Unknown".to_string(),
        }
    }
}
