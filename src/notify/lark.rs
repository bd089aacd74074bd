use serde::Serialize;

use crate::config::schema::LarkConfig;
use crate::notify::channel::{NotificationChannel, OutboundRequest};
use crate::notify::error::NotifyError;
use crate::notify::format::strip_code_fences;
use crate::notify::sign::sign;

pub struct LarkChannel {
    config: LarkConfig,
    clock: fn() -> i64,
}

impl LarkChannel {
    pub fn new(config: &LarkConfig) -> Self {
        Self {
            config: config.clone(),
            clock: unix_now,
        }
    }

    /// Replaces the wall clock used for the signature timestamp.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }
}

impl NotificationChannel for LarkChannel {
    fn name(&self) -> &'static str {
        "lark"
    }

    fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    fn prepare(&self, message: &str) -> Result<OutboundRequest, NotifyError> {
        let (timestamp, signature) = match self.config.signing_secret() {
            Some(secret) => {
                let timestamp = (self.clock)();
                (Some(timestamp.to_string()), Some(sign(secret, timestamp)?))
            }
            None => (None, None),
        };

        let payload = LarkPayload {
            timestamp,
            sign: signature,
            msg_type: "post",
            content: LarkContent {
                post: LarkPost {
                    en_us: LarkPostBody {
                        title: &self.config.title,
                        content: vec![vec![LarkElement {
                            tag: "text",
                            text: strip_code_fences(message),
                        }]],
                    },
                },
            },
        };
        OutboundRequest::pretty_json(&self.config.webhook_url, &payload)
    }
}

fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[derive(Debug, Serialize)]
struct LarkPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sign: Option<String>,
    msg_type: &'static str,
    content: LarkContent<'a>,
}

#[derive(Debug, Serialize)]
struct LarkContent<'a> {
    post: LarkPost<'a>,
}

#[derive(Debug, Serialize)]
struct LarkPost<'a> {
    en_us: LarkPostBody<'a>,
}

#[derive(Debug, Serialize)]
struct LarkPostBody<'a> {
    title: &'a str,
    content: Vec<Vec<LarkElement>>,
}

#[derive(Debug, Serialize)]
struct LarkElement {
    tag: &'static str,
    text: String,
}
