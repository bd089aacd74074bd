use serde::Serialize;

use crate::config::schema::DiscordConfig;
use crate::notify::channel::{NotificationChannel, OutboundRequest};
use crate::notify::error::NotifyError;

/// Posts through Discord's Slack-compatible endpoint (`<webhook>/slack`).
pub struct DiscordChannel {
    config: DiscordConfig,
}

impl DiscordChannel {
    pub fn new(config: &DiscordConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl NotificationChannel for DiscordChannel {
    fn name(&self) -> &'static str {
        "discord"
    }

    fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    fn prepare(&self, message: &str) -> Result<OutboundRequest, NotifyError> {
        let payload = DiscordSlackPayload {
            username: &self.config.username,
            text: message,
        };
        OutboundRequest::json(self.config.slack_compatible_url(), &payload)
    }
}

#[derive(Debug, Serialize)]
struct DiscordSlackPayload<'a> {
    username: &'a str,
    text: &'a str,
}
