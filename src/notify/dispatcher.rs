use std::time::Duration;

use reqwest::Client;
use tracing::{error, warn};

use crate::config::schema::{HttpConfig, ProvidersConfig};
use crate::notify::channel::NotificationChannel;
use crate::notify::discord::DiscordChannel;
use crate::notify::format::normalize_line_endings;
use crate::notify::lark::LarkChannel;
use crate::notify::pushover::PushoverChannel;
use crate::notify::slack::SlackChannel;
use crate::notify::teams::TeamsChannel;
use crate::notify::telegram::TelegramChannel;

/// Best-effort fan-out of one message to every configured provider.
pub struct Notifier {
    client: Client,
}

impl Notifier {
    pub fn new(config: &HttpConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build notification client; using defaults");
            Client::new()
        });
        Self { client }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Sends `message` to each provider whose settings are complete, one after
    /// another. Failures are logged as `<PROVIDER>_WEBHOOK_ERROR: <error>` and
    /// never returned.
    pub async fn notify(&self, message: &str, config: &ProvidersConfig) {
        let message = normalize_line_endings(message);

        for channel in channels_for(config) {
            if !channel.is_enabled() {
                continue;
            }
            if let Err(err) = channel.send(&self.client, &message).await {
                error!(
                    channel = channel.name(),
                    "{}_WEBHOOK_ERROR: {err}",
                    channel.name().to_uppercase()
                );
            }
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(&HttpConfig::default())
    }
}

/// One channel per configured section, in dispatch order. New providers are
/// added here.
pub fn channels_for(config: &ProvidersConfig) -> Vec<Box<dyn NotificationChannel>> {
    let mut channels: Vec<Box<dyn NotificationChannel>> = Vec::new();
    if let Some(ref slack) = config.slack {
        channels.push(Box::new(SlackChannel::new(slack)));
    }
    if let Some(ref pushover) = config.pushover {
        channels.push(Box::new(PushoverChannel::new(pushover)));
    }
    if let Some(ref telegram) = config.telegram {
        channels.push(Box::new(TelegramChannel::new(telegram)));
    }
    if let Some(ref lark) = config.lark {
        channels.push(Box::new(LarkChannel::new(lark)));
    }
    if let Some(ref discord) = config.discord {
        channels.push(Box::new(DiscordChannel::new(discord)));
    }
    if let Some(ref teams) = config.teams {
        channels.push(Box::new(TeamsChannel::new(teams)));
    }
    channels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{PushoverConfig, SlackConfig, TeamsConfig};
    use crate::test_utils::{SharedBuffer, TRACING_LOCK};
    use tracing_subscriber::Layer;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    const UNREACHABLE: &str = "http://127.0.0.1:1/hook";

    fn capture_logs() -> (SharedBuffer, tracing::subscriber::DefaultGuard) {
        let buffer = SharedBuffer::default();
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_filter(LevelFilter::WARN);
        let guard = tracing_subscriber::registry().with(layer).set_default();
        (buffer, guard)
    }

    #[test]
    fn channels_follow_configured_sections() {
        let config = ProvidersConfig {
            slack: Some(SlackConfig::new("https://slack.example/hook")),
            pushover: Some(PushoverConfig::new("token", "")),
            teams: Some(TeamsConfig::new("https://teams.example/hook")),
            ..ProvidersConfig::default()
        };

        let channels = channels_for(&config);
        let names: Vec<_> = channels.iter().map(|channel| channel.name()).collect();
        let enabled: Vec<_> = channels
            .iter()
            .filter(|channel| channel.is_enabled())
            .map(|channel| channel.name())
            .collect();

        assert_eq!(names, vec!["slack", "pushover", "teams"]);
        assert_eq!(enabled, vec!["slack", "teams"]);
    }

    #[tokio::test]
    async fn transport_failure_is_logged_per_provider() {
        let _lock = TRACING_LOCK.lock().unwrap();
        let (buffer, _guard) = capture_logs();
        let config = ProvidersConfig {
            slack: Some(SlackConfig::new(UNREACHABLE)),
            teams: Some(TeamsConfig::new(UNREACHABLE)),
            ..ProvidersConfig::default()
        };

        Notifier::default().notify("hello", &config).await;

        let logs = buffer.contents();
        assert!(logs.contains("SLACK_WEBHOOK_ERROR: "));
        assert!(logs.contains("TEAMS_WEBHOOK_ERROR: "));
    }

    #[tokio::test]
    async fn nothing_configured_logs_nothing() {
        let _lock = TRACING_LOCK.lock().unwrap();
        let (buffer, _guard) = capture_logs();

        Notifier::default()
            .notify("hello", &ProvidersConfig::default())
            .await;

        assert!(buffer.contents().is_empty());
    }
}
