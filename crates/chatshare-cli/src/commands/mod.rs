use anyhow::{Result, bail};
use clap::Subcommand;

use chatshare_application::{PopupController, PublishScope, UnavailableFeature};

pub mod settings;

use settings::SettingsAction;

/// Every command opens the popup first, then performs one interaction.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Open the popup on the dashboard
    Open,
    /// Switch to a page by its identifier (dashboard, conversations, settings, help)
    Page { id: String },
    /// List locally held conversations
    Conversations,
    /// Show the transcript of a conversation
    View { id: String },
    /// Remove a conversation from local storage
    Remove { id: String },
    /// Confirm age and accept the terms of use
    Verify,
    /// Ask the background worker to publish conversations
    Publish {
        /// Use the "publish all" button of the conversations page
        #[arg(long)]
        all: bool,
    },
    /// Clear the extension storage
    Clear {
        /// Use the settings page button, which keeps the popup's cached state
        #[arg(long)]
        local: bool,
    },
    /// Copy the stored user id
    CopyUserId,
    /// Show or edit the user information
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Expand or collapse a help entry
    Faq { index: usize },
    /// Download conversations
    Download {
        /// Use the CSV button of the conversations page
        #[arg(long)]
        csv: bool,
    },
    /// Export user data
    Export,
}

pub async fn execute(controller: &PopupController, command: Command) -> Result<()> {
    tracing::debug!(?command, "executing");

    match command {
        Command::Open => {}
        Command::Page { id } => {
            if controller.navigate_to(&id).await.is_none() {
                bail!("Unknown page '{id}'");
            }
        }
        Command::Conversations => {
            controller.navigate_to("conversations").await;
        }
        Command::View { id } => {
            if controller.view_conversation(&id).await.is_none() {
                tracing::warn!(conversation_id = %id, "nothing to show");
            }
        }
        Command::Remove { id } => {
            controller.navigate_to("conversations").await;
            let outcome = controller.remove_conversation(&id).await;
            tracing::info!(conversation_id = %id, ?outcome, "remove finished");
        }
        Command::Verify => controller.verify_age().await,
        Command::Publish { all } => {
            if all {
                controller.navigate_to("conversations").await;
                controller.publish(PublishScope::All);
            } else {
                controller.publish(PublishScope::Pending);
            }
        }
        Command::Clear { local } => {
            let outcome = if local {
                controller.navigate_to("settings").await;
                controller.clear_local_storage().await
            } else {
                controller.clear_all_data().await
            };
            tracing::info!(?outcome, "clear finished");
        }
        Command::CopyUserId => {
            controller.copy_user_id().await;
        }
        Command::Settings { action } => settings::execute(controller, action).await?,
        Command::Faq { index } => {
            controller.navigate_to("help").await;
            controller.toggle_faq(index);
        }
        Command::Download { csv } => {
            if csv {
                controller.navigate_to("conversations").await;
                controller.request_unavailable(UnavailableFeature::CsvDownload);
            } else {
                controller.request_unavailable(UnavailableFeature::QuickDownload);
            }
        }
        Command::Export => {
            controller.navigate_to("settings").await;
            controller.request_unavailable(UnavailableFeature::Export);
        }
    }

    Ok(())
}
