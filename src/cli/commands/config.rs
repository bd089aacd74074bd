use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::schema::Config;
use crate::config::validation::validate_config;

pub fn handle_init(config_path: &Path, force: bool) -> anyhow::Result<()> {
    if config_path.exists() && !force && !confirm_overwrite(config_path)? {
        println!("Aborted.");
        return Ok(());
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
        set_dir_permissions(parent);
    }

    fs::write(config_path, generate_default_config_toml())?;
    set_file_permissions(config_path);

    println!("Config created at {}", config_path.display());
    Ok(())
}

pub fn handle_show(config: &Config) -> anyhow::Result<()> {
    let rendered = toml::to_string_pretty(&config.redacted())?;
    print!("{rendered}");

    let enabled = config.providers.enabled_names();
    if enabled.is_empty() {
        println!("# enabled providers: none");
    } else {
        println!("# enabled providers: {}", enabled.join(", "));
    }
    Ok(())
}

/// Prints every finding and returns whether the configuration is valid.
pub fn handle_validate(config: &Config) -> anyhow::Result<bool> {
    let result = validate_config(config);

    for error in &result.errors {
        println!("error: {}: {}", error.field, error.message);
        if let Some(ref suggestion) = error.suggestion {
            println!("  hint: {suggestion}");
        }
    }
    for warning in &result.warnings {
        println!("warning: {}: {}", warning.field, warning.message);
    }

    if result.is_valid() {
        println!("Configuration is valid");
    } else {
        println!("Configuration has {} error(s)", result.errors.len());
    }
    Ok(result.is_valid())
}

fn confirm_overwrite(path: &Path) -> anyhow::Result<bool> {
    print!(
        "Config already exists at {}. Overwrite? [y/N] ",
        path.display()
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let response = input.trim();
    Ok(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes"))
}

fn set_dir_permissions(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(err) = fs::set_permissions(path, fs::Permissions::from_mode(0o700)) {
            eprintln!("Warning: failed to set directory permissions: {err}");
        }
    }
}

// The file holds webhook URLs and tokens.
fn set_file_permissions(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(err) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
            eprintln!("Warning: failed to set config file permissions: {err}");
        }
    }
}

fn generate_default_config_toml() -> String {
    r#"# knary-notify configuration file
#
# Every provider below can also be configured through environment variables,
# which take precedence over this file when non-empty.

# Logging
[log]
# Log level: trace, debug, info, warn, error
level = "info"
# Emit JSON log lines
json = false

# Outbound HTTP client
[http]
# Optional: per-request timeout in seconds (client default when unset)
# timeout_secs = 10

# Slack (env: SLACK_WEBHOOK)
# [providers.slack]
# webhook_url = "https://hooks.slack.com/services/..."
# username = "knary"
# icon_emoji = ":bird:"

# Pushover (env: PUSHOVER_TOKEN, PUSHOVER_USER)
# [providers.pushover]
# token = "..."
# user = "..."

# Telegram (env: TELEGRAM_CHATID, TELEGRAM_BOT_TOKEN)
# [providers.telegram]
# chat_id = "..."
# bot_token = "..."

# Lark (env: LARK_WEBHOOK, LARK_SECRET)
# [providers.lark]
# webhook_url = "https://open.larksuite.com/open-apis/bot/v2/hook/..."
# secret = "..."  # optional, signs requests when set

# Discord, posted to <webhook_url>/slack (env: DISCORD_WEBHOOK)
# [providers.discord]
# webhook_url = "https://discord.com/api/webhooks/..."
# username = "knary"

# Microsoft Teams (env: TEAMS_WEBHOOK)
# [providers.teams]
# webhook_url = "https://example.webhook.office.com/webhookb2/..."
"#
    .to_string()
}
