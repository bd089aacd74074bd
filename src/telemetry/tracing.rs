use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::schema::LogConfig;

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub level: Level,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
        }
    }
}

impl TracingConfig {
    /// Builds the subscriber settings from the `[log]` section. `debug`
    /// forces debug level regardless of the configured one.
    pub fn from_log_config(config: &LogConfig, debug: bool) -> Result<Self, TracingError> {
        let level = if debug {
            Level::DEBUG
        } else {
            Level::from_str(config.level.trim()).map_err(|_| TracingError::InvalidLevel {
                level: config.level.clone(),
            })?
        };
        Ok(Self {
            level,
            json_format: config.json,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Invalid log level: {level}")]
    InvalidLevel { level: String },
}

/// Keeps the subscriber installed until dropped.
#[derive(Debug)]
pub struct TracingGuard {
    _default_guard: tracing::subscriber::DefaultGuard,
}

/// Installs a stderr subscriber; stderr is the diagnostic stream that carries
/// `<PROVIDER>_WEBHOOK_ERROR` lines.
pub fn init_tracing(config: &TracingConfig) -> TracingGuard {
    let (json_layer, text_layer) = if config.json_format {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr);
        (Some(layer), None)
    } else {
        let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
        (None, Some(layer))
    };

    let default_guard = tracing_subscriber::registry()
        .with(resolve_env_filter(config))
        .with(json_layer)
        .with(text_layer)
        .set_default();

    TracingGuard {
        _default_guard: default_guard,
    }
}

/// `--debug` pins the filter; otherwise RUST_LOG wins over the configured level.
fn resolve_env_filter(config: &TracingConfig) -> EnvFilter {
    if config.level == Level::DEBUG {
        return EnvFilter::new(Level::DEBUG.as_str());
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level.as_str()))
}
