use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::notify::error::NotifyError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A single POST, built per provider and consumed by one dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub url: String,
    pub body: Vec<u8>,
}

impl OutboundRequest {
    /// Compact JSON body.
    pub fn json<T: Serialize>(url: impl Into<String>, payload: &T) -> Result<Self, NotifyError> {
        Ok(Self {
            url: url.into(),
            body: serde_json::to_vec(payload)?,
        })
    }

    /// JSON body pretty-printed with a four-space indent.
    pub fn pretty_json<T: Serialize>(
        url: impl Into<String>,
        payload: &T,
    ) -> Result<Self, NotifyError> {
        let mut body = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut body, formatter);
        payload.serialize(&mut serializer)?;
        Ok(Self {
            url: url.into(),
            body,
        })
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[async_trait]
pub trait NotificationChannel: Send + Sync {
    fn name(&self) -> &'static str;

    fn is_enabled(&self) -> bool;

    /// Builds the provider request for an already normalised message.
    fn prepare(&self, message: &str) -> Result<OutboundRequest, NotifyError>;

    /// Posts the prepared request. Only transport errors are reported; the
    /// response status and body are not inspected.
    async fn send(&self, client: &Client, message: &str) -> Result<(), NotifyError> {
        let request = self.prepare(message)?;
        let response = client
            .post(&request.url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(request.body)
            .send()
            .await?;

        debug!(
            channel = self.name(),
            status = %response.status(),
            "Notification posted"
        );
        Ok(())
    }
}
