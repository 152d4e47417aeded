//! The Shell: one interactive session.
//!
//! The Shell owns everything a session needs and applies the effects that
//! commands request:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                          Shell                           │
//! │  ┌──────────────┐  ┌──────────────┐  ┌────────────────┐  │
//! │  │     Vfs      │  │  cwd, config │  │ EditorSession  │  │
//! │  │ (node tree)  │  │  (prompt)    │  │ (open buffer)  │  │
//! │  └──────────────┘  └──────────────┘  └────────────────┘  │
//! │           ▲                                  ▲           │
//! │           │   dispatch(line) ─► ExecResult ──┘           │
//! │           └──── builtins ◄──── Command                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! `cd` updates the current directory, `nano` opens the editor session, and
//! `clear` is passed through for the host to act on.

use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::config::KernelConfig;
use crate::editor::EditorSession;
use crate::interpreter::{dispatch, session_rng, Effect, ErrorKind, ExecContext, ExecResult};
use crate::locale::Message;
use crate::render::{Output, Tone};
use crate::vfs::{display_path, join, FsError, Vfs};

/// A shell session.
#[derive(Debug)]
pub struct Shell {
    config: KernelConfig,
    vfs: Vfs,
    cwd: String,
    rng: StdRng,
    editor: Option<EditorSession>,
}

impl Shell {
    /// Start a session on the seeded tree, in the configured home.
    pub fn new(config: KernelConfig) -> Self {
        let vfs = Vfs::seeded(&config.home);
        let cwd = config.home.clone();
        Self::with_vfs(config, vfs, cwd)
    }

    /// Start a session on an existing tree.
    pub fn with_vfs(config: KernelConfig, vfs: Vfs, cwd: impl Into<String>) -> Self {
        let cwd = cwd.into();
        info!(home = %config.home, cwd = %cwd, locale = %config.locale, "shell session started");
        Self {
            rng: session_rng(config.seed),
            config,
            vfs,
            cwd,
            editor: None,
        }
    }

    /// A session with default settings and a fixed seed.
    pub fn transient() -> Self {
        Self::new(KernelConfig::transient())
    }

    /// Execute one command line and apply its effect.
    ///
    /// The result is returned unchanged so the host can render the output
    /// and act on [`Effect::ClearOutput`].
    pub fn execute(&mut self, line: &str) -> ExecResult {
        let result = {
            let mut ctx = ExecContext::new(&mut self.vfs, &self.cwd, &self.config, &mut self.rng);
            dispatch(line, &mut ctx)
        };

        match &result.effect {
            Some(Effect::ChangeDirectory(path)) => {
                debug!(from = %self.cwd, to = %path, "change directory");
                self.cwd = path.clone();
            }
            Some(Effect::OpenEditor { filename, content }) => {
                let path = join(&self.cwd, filename);
                debug!(path = %path, "open editor");
                self.editor = Some(EditorSession::new(filename.as_str(), path, content.as_str()));
            }
            Some(Effect::ClearOutput) | None => {}
        }
        result
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    pub fn vfs(&self) -> &Vfs {
        &self.vfs
    }

    pub fn vfs_mut(&mut self) -> &mut Vfs {
        &mut self.vfs
    }

    /// `user@host:path$ ` with the home prefix shown as `~`.
    pub fn prompt(&self) -> String {
        self.prompt_output().to_plain()
    }

    /// The prompt as styled output.
    pub fn prompt_output(&self) -> Output {
        Output::styled(
            Tone::Success,
            format!("{}@{}", self.config.user, self.config.hostname),
        )
        .text(":")
        .push(Tone::Info, display_path(&self.cwd, &self.config.home))
        .text("$ ")
    }

    /// Greeting shown when a session starts.
    pub fn welcome(&self) -> Output {
        let locale = self.config.locale;
        Output::styled(Tone::Success, locale.text(Message::Welcome))
            .text("\n")
            .push(Tone::Muted, locale.text(Message::WelcomeHint))
    }

    /// The open editor, if any.
    pub fn editor(&self) -> Option<&EditorSession> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut EditorSession> {
        self.editor.as_mut()
    }

    /// Write the editor buffer back to its file.
    ///
    /// The file was created when the editor opened; if it has since been
    /// removed or replaced by a directory the save fails and the buffer is
    /// kept. With no editor open this is a no-op.
    pub fn save_editor(&mut self) -> ExecResult {
        let locale = self.config.locale;
        let Some(editor) = self.editor.as_mut() else {
            return ExecResult::empty();
        };

        match self.vfs.set_file_content(editor.path(), editor.buffer()) {
            Ok(()) => {
                editor.mark_saved();
                ExecResult::success(Output::success(locale.text(Message::FileSaved)))
            }
            Err(error) => {
                warn!(path = %editor.path(), %error, "editor save failed");
                let (kind, message) = match error {
                    FsError::IsADirectory { .. } => (ErrorKind::IsADirectory, Message::IsADirectory),
                    _ => (ErrorKind::NotFound, Message::FileVanished),
                };
                ExecResult {
                    output: Output::error(format!("nano: {}: {}", editor.filename(), locale.text(message))),
                    effect: None,
                    error: Some(kind),
                }
            }
        }
    }

    /// Close the editor without saving, returning its final state.
    pub fn close_editor(&mut self) -> Option<EditorSession> {
        let closed = self.editor.take();
        if let Some(editor) = &closed {
            debug!(path = %editor.path(), modified = editor.is_modified(), "close editor");
        }
        closed
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(KernelConfig::default())
    }
}
