//! Dashboard summary: counters, sharing indicator and progress widget.

mod model;
mod view;

pub use model::SharingPreference;
pub use view::{DashboardInputs, DashboardView, PROGRESS_TARGET, ProgressView, SharingIndicator};
