use serde::Serialize;

use crate::config::schema::TeamsConfig;
use crate::notify::channel::{NotificationChannel, OutboundRequest};
use crate::notify::error::NotifyError;
use crate::notify::format::teams_text;

pub struct TeamsChannel {
    config: TeamsConfig,
}

impl TeamsChannel {
    pub fn new(config: &TeamsConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl NotificationChannel for TeamsChannel {
    fn name(&self) -> &'static str {
        "teams"
    }

    fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    fn prepare(&self, message: &str) -> Result<OutboundRequest, NotifyError> {
        let payload = TeamsPayload {
            text: teams_text(message),
        };
        OutboundRequest::json(&self.config.webhook_url, &payload)
    }
}

#[derive(Debug, Serialize)]
struct TeamsPayload {
    text: String,
}
