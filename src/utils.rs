/// Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("alphalist-debug.log");
    path
}

/// Preferred config file location (`<config_dir>/alphalist/config.yaml`)
pub fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("alphalist").join("config.yaml"))
}
