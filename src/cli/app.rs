use std::path::PathBuf;

use clap::Parser;

use crate::config::env::LARK_SECRET;
use crate::config::paths::CONFIG_ENV_VAR;

/// Forward a message to every configured chat webhook
#[derive(Parser, Debug)]
#[command(name = "knary-notify", author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
    /// Emit JSON log lines
    #[arg(long, global = true)]
    pub json_logs: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Send a message to every configured provider
    Send {
        /// Message text (read from stdin when omitted)
        message: Option<String>,
    },
    /// Print the Lark signature for a secret and timestamp
    Sign {
        /// Lark signing secret
        #[arg(long, env = LARK_SECRET, hide_env_values = true)]
        secret: String,
        /// Unix timestamp in seconds (defaults to now)
        #[arg(long)]
        timestamp: Option<i64>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize configuration file
    Init {
        /// Overwrite an existing file without asking
        #[arg(short, long)]
        force: bool,
    },
    /// Show effective configuration with credentials masked
    Show,
    /// Validate configuration
    Validate,
}
