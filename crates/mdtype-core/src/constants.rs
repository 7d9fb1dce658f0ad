//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// Timing defaults for the demo page
pub mod timing {
    use super::*;

    /// Delay between revealed characters
    pub const TYPING_INTERVAL: Duration = Duration::from_millis(5);

    /// Window for both throttled handlers (reveal and scroll)
    pub const HANDLER_THROTTLE: Duration = Duration::from_millis(50);

    /// Frame budget for the event loop (~60fps)
    pub const FRAME: Duration = Duration::from_millis(16);
}

/// UI configuration
pub mod ui {
    /// Config and data directory name
    pub const APP_DIR_NAME: &str = "mdtype";

    /// Config file name inside the config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Log file name inside the logs directory
    pub const LOG_FILE_NAME: &str = "mdtype.log";

    /// Question shown next to the start button
    pub const PROMPT: &str = "What is the Pythagorean Theorem";
}
