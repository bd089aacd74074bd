use std::env;
use std::path::PathBuf;

pub const CONFIG_ENV_VAR: &str = "KNARY_NOTIFY_CONFIG";

const APP_DIR: &str = "knary-notify";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Platform-specific path resolution for knary-notify.
pub struct Paths;

impl Paths {
    /// Application config directory.
    /// - Linux: ~/.config/knary-notify/
    /// - macOS: ~/Library/Application Support/knary-notify/
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR)
    }

    /// Config file location. A non-empty `KNARY_NOTIFY_CONFIG` replaces the
    /// platform default.
    pub fn config_file() -> PathBuf {
        env::var_os(CONFIG_ENV_VAR)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::config_dir().join(CONFIG_FILE_NAME))
    }
}
