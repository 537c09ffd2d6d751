pub mod cli;
pub mod tui;

pub use cli::Cli;

use std::error::Error;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use twirc_core::config::{AppConfig, expand_path};
use twirc_core::{message_feed, spawn_session};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing(cli.log_file.as_deref())?;
    info!("Starting twirc");
    debug!(
        server = %cli.server,
        nick = %cli.nick,
        channel = %cli.channel,
        config = ?cli.config,
        "CLI arguments parsed"
    );

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(path) = &cli.config {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path");
    }
    config.apply_overrides(cli.overrides());

    let settings = config.connection(&cli.server, &cli.nick, &cli.channel);
    let (feed, feed_rx) = message_feed();
    let session = spawn_session(settings.clone(), config.reconnect, feed);

    let chat_result = tui::chat::run_chat(&settings, config.line_ending, &session, feed_rx).await;
    let session_result = session.shutdown().await;
    chat_result?;
    if let Err(err) = session_result {
        warn!(error = %err, "Session ended with an error");
        return Err(err.into());
    }
    info!("Client execution finished");
    Ok(())
}

/// Logs go to `log_file` when given. Without it they are off, since the
/// TUI owns the terminal.
fn init_tracing(log_file: Option<&Path>) -> io::Result<()> {
    static INIT: std::sync::Once = std::sync::Once::new();
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(expand_path(path))?;
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    });
    Ok(())
}
