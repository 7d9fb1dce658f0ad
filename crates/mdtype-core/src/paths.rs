//! Well-known filesystem locations

use std::path::PathBuf;

use crate::constants::ui::{APP_DIR_NAME, CONFIG_FILE_NAME};

/// Base config directory (`~/.config/mdtype` on Linux)
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// Default config file location
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// Directory for log files (`~/.local/share/mdtype/logs` on Linux)
pub fn logs_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join("logs")
}
