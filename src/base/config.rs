//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::{error::BotError, types::Res};

/// Default homework status endpoint.
pub const DEFAULT_PRACTICUM_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default endpoint for homework statuses.
fn default_practicum_endpoint() -> String {
    DEFAULT_PRACTICUM_ENDPOINT.to_string()
}

/// Default pause between poll cycles, in seconds.
fn default_retry_time() -> u64 {
    600
}

/// Configuration for the homework-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Practicum API token (`PRACTICUM_TOKEN`).
    #[serde(default)]
    pub practicum_token: String,
    /// Telegram bot token (`TELEGRAM_TOKEN`).
    #[serde(default)]
    pub telegram_token: String,
    /// Destination chat: a numeric id or a `@channel` username (`TELEGRAM_CHAT_ID`).
    #[serde(default)]
    pub telegram_chat_id: String,
    /// Homework status endpoint (`PRACTICUM_ENDPOINT`).
    #[serde(default = "default_practicum_endpoint")]
    pub practicum_endpoint: String,
    /// Seconds to wait between poll cycles (`RETRY_TIME`).
    #[serde(default = "default_retry_time")]
    pub retry_time: u64,
    /// Optional Bot API base URL override (`TELEGRAM_API_URL`).
    #[serde(default)]
    pub telegram_api_url: Option<String>,
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default());

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Checks that every required setting is present.
    pub fn validate(&self) -> Res<()> {
        let required = [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ];

        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(BotError::MissingConfig(*name).into());
        }

        if self.retry_time < 1 {
            return Err(anyhow::anyhow!("Retry time must be at least 1 second."));
        }

        Ok(())
    }
}
