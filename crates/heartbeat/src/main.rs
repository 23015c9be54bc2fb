//! Heartbeat - liveness process binary
//!
//! Prints a heartbeat line every interval until Ctrl+C or SIGTERM.

use anyhow::Result;
use heartbeat_core::{Console, ConsoleNotifier, HeartbeatConfig};
use heartbeat_shared::{bootstrap, signal};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    bootstrap::init_env();

    // The guard must be kept alive for the duration of the program to ensure logs are flushed
    let _guard = bootstrap::init_tracing("heartbeat");

    let config = HeartbeatConfig::from_env()?;
    info!("✓ Configuration loaded");

    if !config.has_bot_token() || !config.has_chat_id() {
        warn!("Telegram credentials incomplete; notifications go to the console only");
    }

    let console = Console::stdout();
    let notifier = ConsoleNotifier::new(console.clone());

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        signal::wait_for_shutdown().await;
        info!("📡 Shutdown signal received");
        signal_token.cancel();
    });

    let beats = heartbeat::run_heartbeat(&config, &console, &notifier, shutdown).await?;

    info!("✓ Heartbeat stopped gracefully after {} beats", beats);
    Ok(())
}
