use std::io::{self, Read};

use anyhow::{Context, bail};
use tracing::{info, warn};

use crate::config::schema::Config;
use crate::notify::Notifier;

pub async fn handle_send(config: &Config, message: Option<String>) -> anyhow::Result<()> {
    let message = match message {
        Some(message) => message,
        None => read_stdin()?,
    };
    if message.trim().is_empty() {
        bail!("Refusing to send an empty message");
    }

    let providers = &config.providers;
    let enabled = providers.enabled_names();
    if enabled.is_empty() {
        warn!("No notification provider is configured; nothing sent");
        return Ok(());
    }

    Notifier::new(&config.http).notify(&message, providers).await;
    info!(providers = ?enabled, "Notification dispatched");
    Ok(())
}

fn read_stdin() -> anyhow::Result<String> {
    let mut message = String::new();
    io::stdin()
        .read_to_string(&mut message)
        .context("Failed to read message from stdin")?;
    Ok(message.trim_end_matches(['\r', '\n']).to_string())
}
