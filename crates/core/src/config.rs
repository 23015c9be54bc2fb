//! Heartbeat configuration
//!
//! Loads configuration from environment variables. Both Telegram values are
//! optional and opaque; only the interval is parsed.

use crate::error::ConfigError;
use std::env;
use std::time::Duration;

/// Environment variable holding the bot token
pub const TOKEN_VAR: &str = "TELEGRAM_TOKEN";

/// Environment variable holding the target chat id
pub const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Environment variable overriding the heartbeat period
pub const INTERVAL_VAR: &str = "HEARTBEAT_INTERVAL_SECS";

/// Default heartbeat period in seconds
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

/// Configuration read once at startup and passed to the run loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatConfig {
    /// Telegram bot token, if set
    pub bot_token: Option<String>,

    /// Telegram chat id, if set
    pub chat_id: Option<String>,

    /// Seconds between liveness lines (default: 60)
    pub interval_secs: u64,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            interval_secs: DEFAULT_INTERVAL_SECS,
        }
    }
}

impl HeartbeatConfig {
    /// Load configuration from environment variables
    ///
    /// This will also initialize dotenv if it hasn't been done yet.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let interval_secs = match lookup(INTERVAL_VAR) {
            Some(raw) => parse_interval(&raw)?,
            None => DEFAULT_INTERVAL_SECS,
        };

        Ok(Self {
            bot_token: lookup(TOKEN_VAR),
            chat_id: lookup(CHAT_ID_VAR),
            interval_secs,
        })
    }

    /// Heartbeat period as a [`Duration`]
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    #[must_use]
    pub const fn has_bot_token(&self) -> bool {
        self.bot_token.is_some()
    }

    #[must_use]
    pub const fn has_chat_id(&self) -> bool {
        self.chat_id.is_some()
    }
}

fn parse_interval(raw: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        var: INTERVAL_VAR,
        value: raw.to_string(),
        reason,
    };

    match raw.trim().parse::<u64>() {
        Ok(0) => Err(invalid("must be greater than zero".to_string())),
        Ok(secs) => Ok(secs),
        Err(e) => Err(invalid(e.to_string())),
    }
}
