//! Plain-text rendering of the popup document.

use std::fmt::{self, Write};

use chatshare_application::MarkupRenderer;
use chatshare_application::document::{DocumentState, ListContent};
use chatshare_core::Page;
use chatshare_core::conversation::{
    CLEARED_LIST_MESSAGE, EMPTY_LIST_MESSAGE, LOADING_MESSAGE, NO_VALID_MESSAGE,
};
use chatshare_core::notification::{Banner, Toast};

/// How the conversation list is printed.
pub enum ListFormat {
    Text,
    Html(MarkupRenderer),
}

pub struct TextRenderer {
    list_format: ListFormat,
}

impl TextRenderer {
    pub fn new(list_format: ListFormat) -> Self {
        Self { list_format }
    }

    /// Renders banners, active sections, the transcript overlay and the
    /// given toasts, in that order.
    pub fn render(&self, doc: &DocumentState, toasts: &[Toast]) -> anyhow::Result<String> {
        let mut out = String::new();

        for banner in [Banner::Verification, Banner::UnsupportedSite] {
            if doc.is_banner_visible(banner) {
                writeln!(out, "! {}", banner_text(banner))?;
            }
        }

        for section in doc.active_sections() {
            let page = section.strip_suffix("-page").and_then(Page::from_id);
            match page {
                Some(Page::Dashboard) => render_dashboard(&mut out, doc)?,
                Some(Page::Conversations) => self.render_conversations(&mut out, doc)?,
                Some(Page::Settings) => render_settings(&mut out, doc)?,
                Some(Page::Help) => render_help(&mut out, doc)?,
                None => {}
            }
        }

        if let Some(transcript) = &doc.overlay {
            writeln!(out, "\n== Transcript ==")?;
            write!(out, "{}", transcript.text)?;
        }

        for toast in toasts {
            writeln!(out, "[{}] {}", toast.kind, toast.message)?;
        }

        Ok(out)
    }

    fn render_conversations(&self, out: &mut String, doc: &DocumentState) -> anyhow::Result<()> {
        writeln!(out, "== Conversations ({}) ==", doc.total_conversations)?;

        if let ListFormat::Html(markup) = &self.list_format {
            let html = markup.render_conversation_list(&doc.conversation_list_view())?;
            writeln!(out, "{html}")?;
            return Ok(());
        }

        match &doc.conversation_list {
            ListContent::Blank => {}
            ListContent::Loading => writeln!(out, "{LOADING_MESSAGE}")?,
            ListContent::Empty => writeln!(out, "{EMPTY_LIST_MESSAGE}")?,
            ListContent::NoValid => writeln!(out, "{NO_VALID_MESSAGE}")?,
            ListContent::Cleared => writeln!(out, "{CLEARED_LIST_MESSAGE}")?,
            ListContent::Items(items) => {
                for item in items {
                    let badge = if item.pending { " [Pending]" } else { "" };
                    writeln!(out, "* {} ({}){badge}", item.title, item.date)?;
                    writeln!(out, "  id: {}", item.id)?;
                    writeln!(out, "  {}", item.preview)?;
                    writeln!(
                        out,
                        "  {} user / {} AI messages",
                        item.user_msg_count, item.bot_msg_count
                    )?;
                }
            }
        }
        Ok(())
    }
}

fn banner_text(banner: Banner) -> &'static str {
    match banner {
        Banner::Verification => {
            "Please confirm you are of age and accept the terms of use (`chatshare verify`)."
        }
        Banner::UnsupportedSite => "This page is not a supported AI chat site.",
    }
}

fn render_dashboard(out: &mut String, doc: &DocumentState) -> fmt::Result {
    let dashboard = &doc.dashboard;
    writeln!(out, "== Dashboard ==")?;
    writeln!(out, "Conversations shared:  {}", dashboard.conversations_shared)?;
    writeln!(out, "Pending conversations: {}", dashboard.pending_conversations)?;
    writeln!(out, "Current site:          {}", dashboard.current_site)?;
    writeln!(out, "User status:           {}", dashboard.user_status)?;
    if !dashboard.sharing_text.is_empty() {
        writeln!(out, "Sharing:               {}", dashboard.sharing_text)?;
    }
    if dashboard.progress_visible {
        writeln!(
            out,
            "Progress:              {} ({})",
            dashboard.progress_text, dashboard.progress_percentage
        )?;
    }
    Ok(())
}

fn render_settings(out: &mut String, doc: &DocumentState) -> fmt::Result {
    let settings = &doc.settings;
    writeln!(out, "== Settings ==")?;
    writeln!(out, "Age:      {}", settings.age)?;
    writeln!(out, "Location: {}", settings.location)?;
    writeln!(out, "Gender:   {}", settings.gender)?;
    if doc.custom_gender_visible {
        writeln!(
            out,
            "Custom:   {}",
            settings.custom_gender.as_deref().unwrap_or_default()
        )?;
    }
    Ok(())
}

fn render_help(out: &mut String, doc: &DocumentState) -> fmt::Result {
    writeln!(out, "== Help ==")?;
    for (index, open) in doc.faq_open.iter().enumerate() {
        let marker = if *open { "-" } else { "+" };
        writeln!(out, "{marker} FAQ {index}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatshare_application::{PopupDocument, PopupPresenter};
    use chatshare_core::conversation::ConversationListView;
    use chatshare_core::dashboard::{DashboardInputs, DashboardView};

    #[test]
    fn test_renders_active_dashboard_and_banner() {
        let document = PopupDocument::new();
        document.activate_page(Page::Dashboard);
        document.show_banner(Banner::Verification);
        document.render_dashboard(&DashboardView::build(&DashboardInputs {
            messages_counter: Some(7),
            site_name: "Claude".to_string(),
            pending_count: 1,
            ..Default::default()
        }));

        let text = TextRenderer::new(ListFormat::Text)
            .render(&document.snapshot(), &[Toast::success("Saved")])
            .unwrap();

        assert!(text.starts_with("! Please confirm"));
        assert!(text.contains("Conversations shared:  7"));
        assert!(text.contains("Current site:          Claude"));
        assert!(text.contains("1 conversation ready to share (10%)"));
        assert!(text.ends_with("[success] Saved\n"));
        assert!(!text.contains("== Settings =="));
    }

    #[test]
    fn test_renders_conversation_list_as_html() {
        let document = PopupDocument::new();
        document.activate_page(Page::Conversations);
        document.render_conversations(&ConversationListView::empty());

        let renderer = TextRenderer::new(ListFormat::Html(MarkupRenderer::new().unwrap()));
        let text = renderer.render(&document.snapshot(), &[]).unwrap();

        assert!(text.contains("== Conversations (0) =="));
        assert!(text.contains("<p class=\"text-center\">No conversations found."));
    }
}
