use serde::Serialize;

use crate::config::schema::PushoverConfig;
use crate::notify::channel::{NotificationChannel, OutboundRequest};
use crate::notify::error::NotifyError;

pub struct PushoverChannel {
    config: PushoverConfig,
}

impl PushoverChannel {
    pub fn new(config: &PushoverConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl NotificationChannel for PushoverChannel {
    fn name(&self) -> &'static str {
        "pushover"
    }

    fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    fn prepare(&self, message: &str) -> Result<OutboundRequest, NotifyError> {
        let payload = PushoverPayload {
            token: &self.config.token,
            user: &self.config.user,
            message,
        };
        OutboundRequest::json(&self.config.api_url, &payload)
    }
}

#[derive(Debug, Serialize)]
struct PushoverPayload<'a> {
    token: &'a str,
    user: &'a str,
    message: &'a str,
}
