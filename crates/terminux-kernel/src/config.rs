//! Kernel configuration.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::vfs::DEFAULT_HOME;

/// Configuration for a shell session.
///
/// Deserializes from a `[kernel]` table; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KernelConfig {
    /// User name shown by `whoami` and in the prompt.
    pub user: String,
    /// Host name shown in the prompt.
    pub hostname: String,
    /// Home directory; `cd` with no argument returns here.
    pub home: String,
    /// Message language. When a config file leaves it out, the system
    /// language (`LANG`) decides.
    #[serde(default = "Locale::from_env")]
    pub locale: Locale,
    /// Seed for the cosmetic commands' random source. `None` seeds from
    /// the OS.
    pub seed: Option<u64>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            user: "user".to_string(),
            hostname: "ubuntu".to_string(),
            home: DEFAULT_HOME.to_string(),
            locale: Locale::En,
            seed: None,
        }
    }
}

impl KernelConfig {
    /// Defaults with a fixed seed, for reproducible sessions.
    pub fn transient() -> Self {
        Self {
            seed: Some(0),
            ..Self::default()
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = home.into();
        self
    }
}
