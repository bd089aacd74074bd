use serde::Serialize;

use crate::config::schema::TelegramConfig;
use crate::notify::channel::{NotificationChannel, OutboundRequest};
use crate::notify::error::NotifyError;
use crate::notify::format::telegram_text;

pub struct TelegramChannel {
    config: TelegramConfig,
}

impl TelegramChannel {
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl NotificationChannel for TelegramChannel {
    fn name(&self) -> &'static str {
        "telegram"
    }

    fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    fn prepare(&self, message: &str) -> Result<OutboundRequest, NotifyError> {
        let payload = TelegramPayload {
            chat_id: &self.config.chat_id,
            text: telegram_text(message),
        };
        OutboundRequest::json(self.config.send_message_url(), &payload)
    }
}

#[derive(Debug, Serialize)]
struct TelegramPayload<'a> {
    chat_id: &'a str,
    text: String,
}
