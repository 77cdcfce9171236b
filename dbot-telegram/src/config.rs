//! Minimal framework config: token, API URL, log path.
//! Loaded from env vars BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE.

use dbot_core::{DbotError, Result};
use std::env;

/// Telegram connection and logging config. Read once at startup, immutable afterwards.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Loads from env: BOT_TOKEN required, TELEGRAM_API_URL and LOG_FILE optional.
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Like [`Self::from_env`], but `token` overrides BOT_TOKEN when provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN")
                .map_err(|_| DbotError::Config("BOT_TOKEN not set".to_string()))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|url| !url.trim().is_empty());
        let log_file = env::var("LOG_FILE").ok().filter(|path| !path.trim().is_empty());

        let config = Self {
            bot_token,
            telegram_api_url,
            log_file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds with the given token; everything else None.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
        }
    }

    /// Token must be non-blank; API URL must parse if set.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            return Err(DbotError::Config("BOT_TOKEN is empty".to_string()));
        }
        if let Some(url) = &self.telegram_api_url {
            reqwest::Url::parse(url).map_err(|e| {
                DbotError::Config(format!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is not a valid URL: {} ({})",
                    url, e
                ))
            })?;
        }
        Ok(())
    }

    /// Creates the teloxide Bot, pointing it at the custom API server when configured.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(&self.bot_token);
        match &self.telegram_api_url {
            Some(url) => {
                let url = reqwest::Url::parse(url)
                    .map_err(|e| DbotError::Config(format!("Invalid API URL {}: {}", url, e)))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
