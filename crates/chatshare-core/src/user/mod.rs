//! User metadata domain module.
//!
//! # Module Structure
//!
//! - `model`: the persisted `UserMetadata` record and the submitted form
//! - `view`: settings-page view-model

mod model;
mod view;

pub use model::{SPECIFY_OWN_GENDER, SettingsForm, UserMetadata};
pub use view::SettingsView;
