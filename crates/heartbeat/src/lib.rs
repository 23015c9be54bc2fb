//! Heartbeat - liveness loop
//!
//! Prints a startup banner, fires the startup notification once, then emits a
//! liveness line every interval until cancelled.

pub mod messages;

use anyhow::{Context, Result};
use heartbeat_core::{Console, HeartbeatConfig, Notifier};
use tokio::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Run the heartbeat service
///
/// Runs the startup sequence and then the liveness loop until `shutdown` is
/// cancelled. Returns the number of liveness lines written.
///
/// # Arguments
/// * `config` - Heartbeat configuration
/// * `console` - Sink for user-visible lines
/// * `notifier` - Receives the startup notification
/// * `shutdown` - Cancellation token; the loop never ends without it firing
pub async fn run_heartbeat<N>(
    config: &HeartbeatConfig,
    console: &Console,
    notifier: &N,
    shutdown: CancellationToken,
) -> Result<u64>
where
    N: Notifier + ?Sized,
{
    info!(
        "Starting heartbeat: interval={}s, token_set={}, chat_id_set={}",
        config.interval_secs,
        config.has_bot_token(),
        config.has_chat_id()
    );

    announce_startup(console, notifier)?;

    run_heartbeat_loop(config.interval(), console, shutdown).await
}

/// Banner, startup notification, running confirmation
fn announce_startup<N>(console: &Console, notifier: &N) -> Result<()>
where
    N: Notifier + ?Sized,
{
    console
        .line(messages::BANNER)
        .context("Failed to print startup banner")?;

    notifier
        .notify(messages::STARTUP_MESSAGE)
        .context("Failed to send startup notification")?;

    console
        .line(messages::RUNNING)
        .context("Failed to print running confirmation")?;

    Ok(())
}

/// Main liveness loop
async fn run_heartbeat_loop(
    interval: Duration,
    console: &Console,
    shutdown: CancellationToken,
) -> Result<u64> {
    let mut beats: u64 = 0;

    loop {
        tokio::select! {
            biased;

            () = shutdown.cancelled() => {
                info!("Heartbeat received shutdown signal after {} beats", beats);
                break;
            }
            () = tokio::time::sleep(interval) => {
                console
                    .line(messages::ALIVE)
                    .context("Failed to print liveness line")?;
                beats += 1;
                debug!(beats, "Heartbeat");
            }
        }
    }

    Ok(beats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartbeat_core::ConsoleNotifier;

    #[test]
    fn test_announce_startup_order() {
        let (console, sink) = Console::memory();
        let notifier = ConsoleNotifier::new(console.clone());

        announce_startup(&console, &notifier).unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], messages::BANNER);
        assert!(lines[1].contains(messages::STARTUP_MESSAGE));
        assert_eq!(lines[2], messages::RUNNING);
    }

    #[tokio::test(start_paused = true)]
    async fn test_loop_stops_when_already_cancelled() {
        let (console, sink) = Console::memory();
        let shutdown = CancellationToken::new();
        shutdown.cancel();

        let beats = run_heartbeat_loop(Duration::from_secs(60), &console, shutdown)
            .await
            .unwrap();

        assert_eq!(beats, 0);
        assert!(sink.lines().is_empty());
    }
}
