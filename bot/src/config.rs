//! Bot configuration loaded from environment variables.

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use url::Url;

/// Telegram's limit on message text length.
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 4096;

/// Port the webhook server binds when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 10000;

/// Runtime configuration of the bot.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    /// Public URL Telegram posts updates to; long polling when absent.
    pub webhook_url: Option<Url>,
    pub port: u16,
    /// Longer markup is sent as a file instead of a message.
    pub max_message_len: usize,
}

impl BotConfig {
    /// Load from `TELEGRAM_TOKEN` (required), `WEBHOOK_URL`, `PORT` and
    /// `MAX_MESSAGE_LEN`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = get("TELEGRAM_TOKEN").ok_or_else(|| anyhow!("TELEGRAM_TOKEN not set"))?;

        let webhook_url = get("WEBHOOK_URL")
            .map(|raw| Url::parse(raw.trim()).with_context(|| format!("invalid WEBHOOK_URL: {}", raw)))
            .transpose()?;

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid PORT: {}", raw))?,
            None => DEFAULT_PORT,
        };

        let max_message_len = match get("MAX_MESSAGE_LEN") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("invalid MAX_MESSAGE_LEN: {}", raw))?,
            None => DEFAULT_MAX_MESSAGE_LEN,
        };

        Ok(Self {
            token,
            webhook_url,
            port,
            max_message_len,
        })
    }

    /// Where to serve the webhook and the URL Telegram posts to, or `None`
    /// for long polling. The server listens on all interfaces.
    pub fn webhook_endpoint(&self) -> Option<(SocketAddr, Url)> {
        self.webhook_url
            .clone()
            .map(|url| (SocketAddr::from(([0, 0, 0, 0], self.port)), url))
    }
}
