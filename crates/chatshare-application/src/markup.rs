//! HTML fragments for the conversations page.
//!
//! Produces the same class names and data attributes the popup stylesheet
//! and click handlers expect. All values are HTML-escaped.

use minijinja::{Environment, context};

use chatshare_core::conversation::{
    CLEARED_LIST_MESSAGE, ConversationListState, ConversationListView, EMPTY_LIST_MESSAGE,
    LOADING_MESSAGE, NO_VALID_MESSAGE,
};
use chatshare_core::error::{PopupError, Result};

const ITEM_TEMPLATE: &str = r#"<div class="conversation-item" data-conversation-id="{{ item.id }}">
  <div class="conversation-header">
    <div class="conversation-title">{{ item.title }}</div>
    <div class="conversation-date">{{ item.date }}</div>
  </div>
  <div class="conversation-preview">{{ item.preview }}</div>
  <div class="conversation-footer">
    <div class="conversation-badges">
{% if item.pending %}
      <span class="badge pending">Pending</span>
{% endif %}
      <span class="badge">{{ item.user_msg_count }} messages</span>
      <span class="badge">{{ item.bot_msg_count }} responses</span>
    </div>
    <div class="conversation-actions">
      <button class="view-btn" data-action="view" data-conversation-id="{{ item.id }}">👁️ View</button>
      <button class="remove-btn" data-action="remove" data-conversation-id="{{ item.id }}">❌ Remove</button>
    </div>
  </div>
</div>
"#;

const MESSAGE_CARD_TEMPLATE: &str = r#"<div class="card">
  <p class="text-center">{{ message }}</p>
</div>
"#;

const LOADING_TEMPLATE: &str = r#"<div class="loading-state">{{ message }}</div>
"#;

pub struct MarkupRenderer {
    env: Environment<'static>,
}

impl MarkupRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.add_template("conversation_item.html", ITEM_TEMPLATE)
            .map_err(template_error)?;
        env.add_template("message_card.html", MESSAGE_CARD_TEMPLATE)
            .map_err(template_error)?;
        env.add_template("loading.html", LOADING_TEMPLATE)
            .map_err(template_error)?;
        Ok(Self { env })
    }

    /// Inner HTML of `#conversations-list` for the given view.
    pub fn render_conversation_list(&self, view: &ConversationListView) -> Result<String> {
        match &view.state {
            ConversationListState::Loading => self.render("loading.html", LOADING_MESSAGE),
            ConversationListState::Empty => self.render("message_card.html", EMPTY_LIST_MESSAGE),
            ConversationListState::NoValid => self.render("message_card.html", NO_VALID_MESSAGE),
            ConversationListState::Cleared => {
                self.render("message_card.html", CLEARED_LIST_MESSAGE)
            }
            ConversationListState::Items(items) => {
                let template = self
                    .env
                    .get_template("conversation_item.html")
                    .map_err(template_error)?;
                items
                    .iter()
                    .map(|item| template.render(context! { item => item }).map_err(template_error))
                    .collect()
            }
        }
    }

    fn render(&self, name: &str, message: &str) -> Result<String> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(context! { message => message }))
            .map_err(template_error)
    }
}

fn template_error(err: minijinja::Error) -> PopupError {
    PopupError::internal(format!("Template error: {}", err))
}
