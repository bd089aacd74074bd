use serde::Serialize;

use crate::config::schema::SlackConfig;
use crate::notify::channel::{NotificationChannel, OutboundRequest};
use crate::notify::error::NotifyError;

pub struct SlackChannel {
    config: SlackConfig,
}

impl SlackChannel {
    pub fn new(config: &SlackConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl NotificationChannel for SlackChannel {
    fn name(&self) -> &'static str {
        "slack"
    }

    fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    fn prepare(&self, message: &str) -> Result<OutboundRequest, NotifyError> {
        let payload = SlackWebhookPayload {
            username: &self.config.username,
            icon_emoji: &self.config.icon_emoji,
            text: message,
        };
        OutboundRequest::json(&self.config.webhook_url, &payload)
    }
}

#[derive(Debug, Serialize)]
struct SlackWebhookPayload<'a> {
    username: &'a str,
    icon_emoji: &'a str,
    text: &'a str,
}
