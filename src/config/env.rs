//! Environment variable overlay for provider settings.

use std::env;

use crate::config::schema::{
    DiscordConfig, LarkConfig, ProvidersConfig, PushoverConfig, SlackConfig, TeamsConfig,
    TelegramConfig,
};

pub const SLACK_WEBHOOK: &str = "SLACK_WEBHOOK";
pub const PUSHOVER_TOKEN: &str = "PUSHOVER_TOKEN";
pub const PUSHOVER_USER: &str = "PUSHOVER_USER";
pub const TELEGRAM_CHATID: &str = "TELEGRAM_CHATID";
pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const LARK_WEBHOOK: &str = "LARK_WEBHOOK";
pub const LARK_SECRET: &str = "LARK_SECRET";
pub const DISCORD_WEBHOOK: &str = "DISCORD_WEBHOOK";
pub const TEAMS_WEBHOOK: &str = "TEAMS_WEBHOOK";

/// Every variable the overlay reads.
pub const PROVIDER_ENV_VARS: [&str; 9] = [
    SLACK_WEBHOOK,
    PUSHOVER_TOKEN,
    PUSHOVER_USER,
    TELEGRAM_CHATID,
    TELEGRAM_BOT_TOKEN,
    LARK_WEBHOOK,
    LARK_SECRET,
    DISCORD_WEBHOOK,
    TEAMS_WEBHOOK,
];

impl ProvidersConfig {
    /// Builds provider settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds provider settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_lookup(lookup);
        config
    }

    /// Overrides settings with every non-empty value the lookup yields.
    /// Missing or empty values leave existing settings untouched.
    pub fn apply_lookup<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(url) = get(SLACK_WEBHOOK) {
            self.slack.get_or_insert_with(SlackConfig::default).webhook_url = url;
        }

        let pushover_token = get(PUSHOVER_TOKEN);
        let pushover_user = get(PUSHOVER_USER);
        if pushover_token.is_some() || pushover_user.is_some() {
            let pushover = self.pushover.get_or_insert_with(PushoverConfig::default);
            if let Some(token) = pushover_token {
                pushover.token = token;
            }
            if let Some(user) = pushover_user {
                pushover.user = user;
            }
        }

        let chat_id = get(TELEGRAM_CHATID);
        let bot_token = get(TELEGRAM_BOT_TOKEN);
        if chat_id.is_some() || bot_token.is_some() {
            let telegram = self.telegram.get_or_insert_with(TelegramConfig::default);
            if let Some(chat_id) = chat_id {
                telegram.chat_id = chat_id;
            }
            if let Some(bot_token) = bot_token {
                telegram.bot_token = bot_token;
            }
        }

        let lark_webhook = get(LARK_WEBHOOK);
        let lark_secret = get(LARK_SECRET);
        if lark_webhook.is_some() || lark_secret.is_some() {
            let lark = self.lark.get_or_insert_with(LarkConfig::default);
            if let Some(url) = lark_webhook {
                lark.webhook_url = url;
            }
            if lark_secret.is_some() {
                lark.secret = lark_secret;
            }
        }

        if let Some(url) = get(DISCORD_WEBHOOK) {
            self.discord.get_or_insert_with(DiscordConfig::default).webhook_url = url;
        }

        if let Some(url) = get(TEAMS_WEBHOOK) {
            self.teams.get_or_insert_with(TeamsConfig::default).webhook_url = url;
        }
    }
}
