//! Application layer for the Chatshare popup.
//!
//! This crate wires the domain view-models to storage, messaging and a
//! presentation surface: the `PopupController` owns the session state, routes
//! between pages, runs the page loaders and handles user actions.

pub mod document;
pub mod markup;
pub mod popup;
pub mod presenter;
pub mod session;
pub mod storage_adapter;

pub use document::PopupDocument;
pub use markup::MarkupRenderer;
pub use popup::{
    ActionOutcome, PopupController, PopupServices, PublishScope, TabSupport, UnavailableFeature,
};
pub use presenter::PopupPresenter;
pub use session::{InitialData, SessionState};
pub use storage_adapter::StorageAdapter;
