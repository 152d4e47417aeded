//! Command interpreter.
//!
//! A line is trimmed and cut at its first space into a command name and an
//! argument string. The name is parsed into a [`Command`]; each command has
//! one handler in [`crate::builtins`] that works against an
//! [`ExecContext`] and returns an [`ExecResult`].

mod command;
mod context;
mod dispatch;
mod effects;
mod error;
mod result;

pub use command::{split_command_line, Command};
pub use context::{session_rng, ExecContext};
pub use dispatch::dispatch;
pub use effects::{execute_command, execute_command_with, Effects};
pub use error::{CommandError, ErrorKind};
pub use result::{Effect, ExecResult};
