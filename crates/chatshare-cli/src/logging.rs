//! Log subscriber setup.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use chatshare_infrastructure::ChatsharePaths;
use chatshare_infrastructure::config_service::LoggingSettings;

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the configured level. Logs always go to stderr so
/// stdout stays reserved for the rendered popup. The returned guard must be
/// held until exit to flush the log file.
pub fn init(settings: &LoggingSettings, paths: &ChatsharePaths) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .with_context(|| format!("Invalid log level '{}'", settings.level))?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = if settings.file {
        let logs_dir = paths.logs_dir()?;
        let appender = tracing_appender::rolling::daily(logs_dir, "chatshare.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_ansi(false).with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}
