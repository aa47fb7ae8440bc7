//! Telegram delivery through `teloxide`.

use std::sync::Arc;

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, Recipient},
};
use tracing::{info, instrument};

use crate::base::{
    config::Config,
    error::BotError,
    types::{BotResult, Res},
};

use super::{GenericNotifier, Notifier};

// Extra methods on `Notifier` applied by the telegram implementation.

impl Notifier {
    /// Creates a new Telegram notifier.
    pub fn telegram(config: &Config) -> Res<Self> {
        let client = TelegramNotifier::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Specific implementations.

/// Telegram notifier implementation.
#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
    chat: Recipient,
}

impl TelegramNotifier {
    /// Create a new Telegram notifier.
    #[instrument(name = "TelegramNotifier::new", skip_all)]
    pub fn new(config: &Config) -> Res<Self> {
        let mut bot = Bot::new(config.telegram_token.clone());

        // A blank override means the public Bot API.
        if let Some(api_url) = config.telegram_api_url.as_deref().map(str::trim).filter(|url| !url.is_empty()) {
            bot = bot.set_api_url(reqwest::Url::parse(api_url)?);
        }

        Ok(Self {
            bot,
            chat: parse_recipient(&config.telegram_chat_id),
        })
    }
}

#[async_trait]
impl GenericNotifier for TelegramNotifier {
    #[instrument(skip(self))]
    async fn send_message(&self, text: &str) -> BotResult<()> {
        self.bot
            .send_message(self.chat.clone(), text.to_string())
            .await
            .map_err(|e| BotError::SendMessage(e.to_string()))?;

        info!("Message sent successfully.");

        Ok(())
    }
}

/// Numeric ids address a chat directly; anything else is a channel username.
pub fn parse_recipient(chat_id: &str) -> Recipient {
    let chat_id = chat_id.trim();

    match chat_id.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.to_string()),
    }
}
