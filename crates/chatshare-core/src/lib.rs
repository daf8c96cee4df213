//! Domain layer of the Chatshare popup.
//!
//! Holds the stored record shapes, the storage and messaging boundaries, and
//! the pure view-model computations every page renders from. Nothing here
//! touches a real browser or file system.

pub mod conversation;
pub mod dashboard;
pub mod error;
pub mod host;
pub mod messaging;
pub mod notification;
pub mod page;
pub mod site;
pub mod storage;
pub mod user;

pub use error::{PopupError, Result};
pub use page::Page;
