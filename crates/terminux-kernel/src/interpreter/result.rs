//! ExecResult: What one command line produces.
//!
//! Besides the rendered output, a command may ask its host to do something
//! it cannot do itself: move the session to another directory, open the
//! editor, or wipe the screen. Those requests travel as an [`Effect`]; the
//! host decides how to honour them.

use super::error::{CommandError, ErrorKind};
use crate::locale::Locale;
use crate::render::Output;

/// A side effect requested by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Make `path` (absolute) the current directory.
    ChangeDirectory(String),
    /// Open `filename` in the editor, starting from `content`.
    OpenEditor { filename: String, content: String },
    /// Drop everything shown so far.
    ClearOutput,
}

/// The result of executing a command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Rendered output, possibly empty.
    pub output: Output,
    /// Side effect for the host to apply.
    pub effect: Option<Effect>,
    /// Set when the command failed.
    pub error: Option<ErrorKind>,
}

impl ExecResult {
    /// A successful result with output.
    pub fn success(output: Output) -> Self {
        Self {
            output,
            effect: None,
            error: None,
        }
    }

    /// A successful result with nothing to show.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A successful result that also requests `effect`.
    pub fn with_effect(output: Output, effect: Effect) -> Self {
        Self {
            output,
            effect: Some(effect),
            error: None,
        }
    }

    /// A failed result rendering `error` in `locale`.
    pub fn failure(error: &CommandError, locale: Locale) -> Self {
        Self {
            output: Output::error(error.render(locale)),
            effect: None,
            error: Some(error.kind()),
        }
    }

    /// True if the command succeeded.
    pub fn ok(&self) -> bool {
        self.error.is_none()
    }

    /// Plain text of the output.
    pub fn text(&self) -> String {
        self.output.to_plain()
    }
}
