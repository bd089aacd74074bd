use serde::{Deserialize, Serialize};

pub const DEFAULT_USERNAME: &str = "knary";
pub const DEFAULT_ICON_EMOJI: &str = ":bird:";
pub const DEFAULT_LARK_TITLE: &str = "Knary Triggered 🐦";
pub const DEFAULT_PUSHOVER_API_URL: &str = "https://api.pushover.net/1/messages.json/";
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";

const REDACTED: &str = "****";

/// Root configuration for knary-notify.
///
/// Example:
/// ```toml
/// [log]
/// level = "info"
///
/// [http]
/// timeout_secs = 10
///
/// [providers.slack]
/// webhook_url = "https://hooks.slack.com/services/..."
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Logging configuration section.
    /// Example: [log]
    pub log: LogConfig,
    /// Outbound HTTP client configuration section.
    /// Example: [http]
    pub http: HttpConfig,
    /// Notification provider configuration section.
    /// Example: [providers.slack]
    pub providers: ProvidersConfig,
}

impl Config {
    /// Returns a copy with credentials and webhook paths masked, safe to print.
    pub fn redacted(&self) -> Self {
        Self {
            log: self.log.clone(),
            http: self.http.clone(),
            providers: self.providers.redacted(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    /// Example: level = "info"
    pub level: String,
    /// Emit JSON log lines instead of plain text.
    /// Example: json = false
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Outbound HTTP client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in seconds; the client default applies when unset.
    /// Example: timeout_secs = 10
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Per-provider settings. A provider fires only when all of its required
/// settings are non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Slack incoming webhook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<SlackConfig>,
    /// Pushover message API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pushover: Option<PushoverConfig>,
    /// Telegram bot API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<TelegramConfig>,
    /// Lark (Feishu) custom bot webhook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lark: Option<LarkConfig>,
    /// Discord webhook, posted through its Slack-compatible endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord: Option<DiscordConfig>,
    /// Microsoft Teams incoming webhook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<TeamsConfig>,
}

impl ProvidersConfig {
    /// True when no provider would fire.
    pub fn is_empty(&self) -> bool {
        self.enabled_names().is_empty()
    }

    /// Names of providers whose required settings are all present.
    pub fn enabled_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.slack.as_ref().is_some_and(SlackConfig::is_enabled) {
            names.push("slack");
        }
        if self.pushover.as_ref().is_some_and(PushoverConfig::is_enabled) {
            names.push("pushover");
        }
        if self.telegram.as_ref().is_some_and(TelegramConfig::is_enabled) {
            names.push("telegram");
        }
        if self.lark.as_ref().is_some_and(LarkConfig::is_enabled) {
            names.push("lark");
        }
        if self.discord.as_ref().is_some_and(DiscordConfig::is_enabled) {
            names.push("discord");
        }
        if self.teams.as_ref().is_some_and(TeamsConfig::is_enabled) {
            names.push("teams");
        }
        names
    }

    fn redacted(&self) -> Self {
        Self {
            slack: self.slack.as_ref().map(|slack| SlackConfig {
                webhook_url: redact_url(&slack.webhook_url),
                ..slack.clone()
            }),
            pushover: self.pushover.as_ref().map(|pushover| PushoverConfig {
                token: redact(&pushover.token),
                user: redact(&pushover.user),
                ..pushover.clone()
            }),
            telegram: self.telegram.as_ref().map(|telegram| TelegramConfig {
                bot_token: redact(&telegram.bot_token),
                ..telegram.clone()
            }),
            lark: self.lark.as_ref().map(|lark| LarkConfig {
                webhook_url: redact_url(&lark.webhook_url),
                secret: lark.secret.as_deref().map(redact),
                ..lark.clone()
            }),
            discord: self.discord.as_ref().map(|discord| DiscordConfig {
                webhook_url: redact_url(&discord.webhook_url),
                ..discord.clone()
            }),
            teams: self.teams.as_ref().map(|teams| TeamsConfig {
                webhook_url: redact_url(&teams.webhook_url),
            }),
        }
    }
}

/// Slack incoming webhook configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SlackConfig {
    /// Slack webhook URL.
    /// Example: webhook_url = "https://hooks.slack.com/services/..."
    pub webhook_url: String,
    /// Display name of the posting bot.
    /// Example: username = "knary"
    pub username: String,
    /// Emoji used as the bot avatar.
    /// Example: icon_emoji = ":bird:"
    pub icon_emoji: String,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            username: DEFAULT_USERNAME.to_string(),
            icon_emoji: DEFAULT_ICON_EMOJI.to_string(),
        }
    }
}

impl SlackConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.webhook_url.is_empty()
    }
}

/// Pushover configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PushoverConfig {
    /// Application API token.
    /// Example: token = "azGDORePK8gMaC0QOYAMyEEuzJnyUi"
    pub token: String,
    /// User or group key.
    /// Example: user = "uQiRzpo4DXghDmr9QzzfQu27cmVRsG"
    pub user: String,
    /// Messages API endpoint.
    /// Example: api_url = "https://api.pushover.net/1/messages.json/"
    pub api_url: String,
}

impl Default for PushoverConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            user: String::new(),
            api_url: DEFAULT_PUSHOVER_API_URL.to_string(),
        }
    }
}

impl PushoverConfig {
    pub fn new(token: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: user.into(),
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.token.is_empty() && !self.user.is_empty()
    }
}

/// Telegram bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TelegramConfig {
    /// Target chat identifier.
    /// Example: chat_id = "-1001234567890"
    pub chat_id: String,
    /// Bot token issued by BotFather.
    /// Example: bot_token = "123456:ABC-DEF"
    pub bot_token: String,
    /// Bot API base URL; the token and method are appended.
    /// Example: api_base = "https://api.telegram.org"
    pub api_base: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            chat_id: String::new(),
            bot_token: String::new(),
            api_base: DEFAULT_TELEGRAM_API_BASE.to_string(),
        }
    }
}

impl TelegramConfig {
    pub fn new(chat_id: impl Into<String>, bot_token: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            bot_token: bot_token.into(),
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.chat_id.is_empty() && !self.bot_token.is_empty()
    }

    pub fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.bot_token
        )
    }
}

/// Lark (Feishu) custom bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LarkConfig {
    /// Lark webhook URL.
    /// Example: webhook_url = "https://open.larksuite.com/open-apis/bot/v2/hook/..."
    pub webhook_url: String,
    /// Signing secret; requests are signed when set.
    /// Example: secret = "..."
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Title of the rich-text post.
    /// Example: title = "Knary Triggered 🐦"
    pub title: String,
}

impl Default for LarkConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            secret: None,
            title: DEFAULT_LARK_TITLE.to_string(),
        }
    }
}

impl LarkConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            ..Self::default()
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    pub fn is_enabled(&self) -> bool {
        !self.webhook_url.is_empty()
    }

    /// The signing secret, ignoring an empty value.
    pub fn signing_secret(&self) -> Option<&str> {
        self.secret.as_deref().filter(|secret| !secret.is_empty())
    }
}

/// Discord webhook configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord webhook URL, without the `/slack` suffix.
    /// Example: webhook_url = "https://discord.com/api/webhooks/..."
    pub webhook_url: String,
    /// Display name of the posting bot.
    /// Example: username = "knary"
    pub username: String,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            username: DEFAULT_USERNAME.to_string(),
        }
    }
}

impl DiscordConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.webhook_url.is_empty()
    }

    pub fn slack_compatible_url(&self) -> String {
        format!("{}/slack", self.webhook_url)
    }
}

/// Microsoft Teams incoming webhook configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TeamsConfig {
    /// Teams webhook URL.
    /// Example: webhook_url = "https://example.webhook.office.com/webhookb2/..."
    pub webhook_url: String,
}

impl TeamsConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.webhook_url.is_empty()
    }
}

fn redact(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        REDACTED.to_string()
    }
}

fn redact_url(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match reqwest::Url::parse(value) {
        Ok(url) => match url.host_str() {
            Some(host) => format!("{}://{}/{REDACTED}", url.scheme(), host),
            None => REDACTED.to_string(),
        },
        Err(_) => REDACTED.to_string(),
    }
}
