//! Outbound notifications
//!
//! [`Notifier`] is the seam where a real Telegram sender would plug in. The
//! only implementation is [`ConsoleNotifier`], which prints instead of sending.

use crate::console::Console;
use crate::error::NotifyResult;
use tracing::debug;

/// Label prefixed to every console notification
pub const NOTIFY_LABEL: &str = "[Telegram]";

/// Something that can deliver a text notification
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str) -> NotifyResult<()>;
}

/// Notification stub that writes one labelled line to the console
#[derive(Debug, Clone)]
pub struct ConsoleNotifier {
    console: Console,
}

impl ConsoleNotifier {
    #[must_use]
    pub const fn new(console: Console) -> Self {
        Self { console }
    }

    /// Render the line printed for `message`
    #[must_use]
    pub fn format_line(message: &str) -> String {
        format!("{NOTIFY_LABEL} {message}")
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) -> NotifyResult<()> {
        // Sending is not wired up yet, so the console is the only channel.
        self.console.line(&Self::format_line(message))?;
        debug!(len = message.len(), "Notification written to console");
        Ok(())
    }
}
