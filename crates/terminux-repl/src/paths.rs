//! XDG Base Directory paths for terminux.
//!
//! | Purpose | XDG Variable | Default | terminux Path |
//! |---------|--------------|---------|---------------|
//! | Config | `$XDG_CONFIG_HOME` | `~/.config` | `$XDG_CONFIG_HOME/terminux/config.toml` |
//! | History | `$XDG_DATA_HOME` | `~/.local/share` | `$XDG_DATA_HOME/terminux/history.txt` |
//!
//! The emulated filesystem itself is never written to disk.

use std::path::PathBuf;

use directories::BaseDirs;

const APP_DIR: &str = "terminux";

/// Get the data directory.
///
/// Uses `$XDG_DATA_HOME/terminux` or falls back to `~/.local/share/terminux`.
pub fn data_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| dirs_fallback().join(".local").join("share"))
        .join(APP_DIR)
}

/// Get the config directory.
///
/// Uses `$XDG_CONFIG_HOME/terminux` or falls back to `~/.config/terminux`.
pub fn config_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| dirs_fallback().join(".config"))
        .join(APP_DIR)
}

/// Default config file location.
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Line editor history file.
pub fn history_file() -> PathBuf {
    data_dir().join("history.txt")
}

/// Fallback home directory when BaseDirs fails.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}
