//! Page navigation.

use chatshare_core::Page;

use super::PopupController;

impl PopupController {
    /// Navigates by page identifier, as carried in a nav button's `data-page`.
    ///
    /// Unknown identifiers are logged and ignored.
    pub async fn navigate_to(&self, page_id: &str) -> Option<Page> {
        let Some(page) = Page::from_id(page_id) else {
            tracing::warn!(page_id, "Unknown page requested");
            return None;
        };
        self.navigate(page).await;
        Some(page)
    }

    /// Activates `page` and runs its loader.
    pub async fn navigate(&self, page: Page) {
        tracing::debug!(%page, "navigating");

        if !self.presenter.activate_page(page) {
            tracing::error!(section = %page.section_id(), "Page section not found");
            self.presenter.reveal_section(Page::Dashboard);
        }
        self.state.write().await.set_current_page(page);

        match page {
            Page::Dashboard => {
                self.load_dashboard().await;
            }
            Page::Conversations => {
                self.load_conversations().await;
            }
            Page::Settings => {
                self.load_settings().await;
            }
            Page::Help => {}
        }
    }
}
