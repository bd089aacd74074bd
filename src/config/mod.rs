//! Configuration management module.

pub mod env;
pub mod loader;
pub mod paths;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, load_config, load_config_with};
pub use paths::Paths;
pub use schema::{
    Config, DiscordConfig, HttpConfig, LarkConfig, LogConfig, ProvidersConfig, PushoverConfig,
    SlackConfig, TeamsConfig, TelegramConfig,
};
pub use validation::{ValidationError, ValidationResult, ValidationWarning, validate_config};
