//! Captured conversation records and their list/transcript views.
//!
//! Records are written by the content script; from the popup's side they are
//! read-only apart from removal.

mod model;
mod transcript;
mod view;

pub use model::{ConversationRecord, RecordedAt};
pub use transcript::TranscriptView;
pub use view::{
    CLEARED_LIST_MESSAGE, ConversationItemView, ConversationListState, ConversationListView,
    EMPTY_LIST_MESSAGE, LOADING_MESSAGE, NO_VALID_MESSAGE, PREVIEW_CHAR_LIMIT,
};
