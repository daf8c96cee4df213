use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc;

use chatshare_application::{MarkupRenderer, PopupController, PopupDocument, PopupServices};
use chatshare_infrastructure::{ChatsharePaths, ConfigService, HostConfig, JsonFileStore};

mod commands;
mod host;
mod logging;
mod render;

use commands::Command;
use host::{ChannelDispatcher, StaticTab, StdoutClipboard, TerminalConfirmation};
use render::{ListFormat, TextRenderer};

/// Entries on the help page.
const FAQ_ENTRIES: usize = 5;

#[derive(Parser)]
#[command(name = "chatshare")]
#[command(about = "Chatshare popup - review and publish captured AI-chat conversations", long_about = None)]
struct Cli {
    /// Directory holding config.toml, storage.json and logs
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Configuration file to load instead of <root>/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Storage namespace file
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// URL of the active tab
    #[arg(long, global = true)]
    tab_url: Option<String>,

    /// Whether the active tab's content script reports a supported site
    #[arg(long, global = true)]
    tab_supported: Option<bool>,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    yes: bool,

    /// Print the conversation list as popup HTML
    #[arg(long, global = true)]
    html: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut HostConfig) {
        if let Some(storage) = &self.storage {
            config.storage_path = Some(storage.clone());
        }
        if let Some(url) = &self.tab_url {
            config.tab.url = Some(url.clone());
        }
        if let Some(supported) = self.tab_supported {
            config.tab.supported = Some(supported);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_service = ConfigService::new(ChatsharePaths::new(cli.root.clone()));
    let mut config = config_service
        .load(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    let _log_guard = logging::init(&config.logging, config_service.paths())?;
    tracing::info!("[Bootstrap] chatshare {}", env!("CARGO_PKG_VERSION"));

    let storage_path = config_service.storage_path(&config)?;
    tracing::info!("[Bootstrap] Storage: {}", storage_path.display());

    let list_format = if cli.html {
        ListFormat::Html(MarkupRenderer::new().context("Failed to load popup templates")?)
    } else {
        ListFormat::Text
    };

    let (sender, receiver) = mpsc::unbounded_channel();
    let worker = tokio::spawn(host::run_background_worker(receiver));

    let document = Arc::new(
        PopupDocument::new()
            .with_faq_entries(FAQ_ENTRIES)
            .with_toast_duration(config.notifications.toast_duration()),
    );
    let controller = PopupController::new(PopupServices {
        store: Arc::new(JsonFileStore::new(storage_path)),
        active_tab: Arc::new(StaticTab::new(config.tab.url.clone(), config.tab.supported)),
        dispatcher: Arc::new(ChannelDispatcher::new(sender)),
        confirmation: Arc::new(TerminalConfirmation::new(cli.yes)),
        clipboard: Arc::new(StdoutClipboard),
        presenter: document.clone(),
    });

    let support = controller.open().await;
    tracing::debug!(?support, "popup opened");

    commands::execute(&controller, cli.command.unwrap_or(Command::Open)).await?;

    // Dropping the controller closes the dispatch channel and lets the worker finish.
    drop(controller);
    worker.await.context("Background worker failed")?;

    let output = TextRenderer::new(list_format)
        .render(&document.snapshot(), &document.visible_toasts())?;
    print!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "chatshare",
            "--storage",
            "/tmp/storage.json",
            "--tab-url",
            "https://poe.com/chat",
            "--tab-supported",
            "false",
            "conversations",
        ]);
        let mut config = HostConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/storage.json")));
        assert_eq!(config.tab.url.as_deref(), Some("https://poe.com/chat"));
        assert_eq!(config.tab.supported, Some(false));
        assert!(matches!(cli.command, Some(Command::Conversations)));
    }

    #[test]
    fn test_settings_set_parses() {
        let cli = Cli::parse_from([
            "chatshare",
            "-y",
            "settings",
            "set",
            "--age",
            "30",
            "--gender",
            "Specify your own",
            "--custom-gender",
            "agender",
        ]);
        assert!(cli.yes);
        assert!(matches!(
            cli.command,
            Some(Command::Settings {
                action: commands::settings::SettingsAction::Set { .. }
            })
        ));
    }
}
