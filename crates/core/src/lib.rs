//! Heartbeat Core - configuration, errors and the notification seam
//!
//! This crate performs no scheduling. Console output goes through [`Console`]
//! so callers can swap stdout for an in-memory sink.

pub mod config;
pub mod console;
pub mod error;
pub mod notify;

pub use config::HeartbeatConfig;
pub use console::Console;
pub use error::{ConfigError, NotifyError};
pub use notify::{ConsoleNotifier, Notifier};
