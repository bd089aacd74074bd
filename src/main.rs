use std::process::ExitCode;

use clap::Parser;

use knary_notify::cli::commands::{config as config_command, send, sign};
use knary_notify::cli::{Cli, Commands, ConfigAction};
use knary_notify::config::{Paths, load_config};
use knary_notify::telemetry::{TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Paths::config_file);

    if let Commands::Config {
        action: ConfigAction::Init { force },
    } = cli.command
    {
        config_command::handle_init(&config_path, force)?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&config_path)?;
    let mut tracing_config =
        TracingConfig::from_log_config(&config.log, cli.debug).unwrap_or_else(|err| {
            eprintln!("Warning: {err}; falling back to info");
            TracingConfig::default()
        });
    tracing_config.json_format |= cli.json_logs;
    let _guard = init_tracing(&tracing_config);

    match cli.command {
        Commands::Send { message } => send::handle_send(&config, message).await?,
        Commands::Sign { secret, timestamp } => sign::handle_sign(&secret, timestamp)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => config_command::handle_show(&config)?,
            ConfigAction::Validate => {
                if !config_command::handle_validate(&config)? {
                    return Ok(ExitCode::FAILURE);
                }
            }
            ConfigAction::Init { .. } => {}
        },
    }

    Ok(ExitCode::SUCCESS)
}
