//! Execution context for builtins.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::KernelConfig;
use crate::locale::Locale;
use crate::vfs::{self, Vfs};

/// Execution context passed to builtins.
///
/// Borrows the session state for the length of one command. The current
/// directory is read-only here: a builtin that wants to move the session
/// returns [`Effect::ChangeDirectory`](super::Effect::ChangeDirectory).
pub struct ExecContext<'a> {
    /// Virtual filesystem.
    pub vfs: &'a mut Vfs,
    /// Current working directory (absolute).
    pub cwd: &'a str,
    /// Session configuration.
    pub config: &'a KernelConfig,
    /// Random source for the cosmetic commands.
    pub rng: &'a mut StdRng,
}

impl<'a> ExecContext<'a> {
    /// Create a new execution context.
    pub fn new(
        vfs: &'a mut Vfs,
        cwd: &'a str,
        config: &'a KernelConfig,
        rng: &'a mut StdRng,
    ) -> Self {
        Self {
            vfs,
            cwd,
            config,
            rng,
        }
    }

    /// Resolve a path relative to cwd.
    pub fn resolve_path(&self, path: &str) -> String {
        vfs::resolve_path(path, self.cwd)
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }
}

/// Build the random source for a session.
pub fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
