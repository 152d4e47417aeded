//! REPL configuration.
//!
//! Read from `$XDG_CONFIG_HOME/terminux/config.toml`:
//!
//! ```toml
//! color = true
//! history = true
//! history_size = 1000
//!
//! [kernel]
//! user = "user"
//! hostname = "ubuntu"
//! home = "/home/user"
//! locale = "fr"
//! seed = 42
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use terminux_kernel::{KernelConfig, Locale};

use crate::paths;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
    /// Session settings handed to the kernel.
    pub kernel: KernelConfig,
    /// Colorize output with ANSI escapes.
    pub color: bool,
    /// Load and save line editor history.
    pub history: bool,
    /// Maximum number of history entries kept.
    pub history_size: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            kernel: KernelConfig::default().with_locale(Locale::from_env()),
            color: true,
            history: true,
            history_size: 1000,
        }
    }
}

impl ReplConfig {
    /// No color, no history, fixed seed: for tests and scripted runs.
    pub fn transient() -> Self {
        Self {
            kernel: KernelConfig::transient(),
            color: false,
            history: false,
            ..Self::default()
        }
    }

    /// Load the default config file, or defaults if there is none.
    pub fn load() -> Result<Self> {
        let path = paths::config_file();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load a specific config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML")
    }
}
