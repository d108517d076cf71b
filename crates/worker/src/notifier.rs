//! Notification transport
//!
//! Sends rendered status messages to the configured Telegram chat.

use async_trait::async_trait;
use teloxide::prelude::*;
use thiserror::Error;

/// Message delivery failures
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

/// Destination for rendered notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

/// Telegram notifier bound to a single chat
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }
}
