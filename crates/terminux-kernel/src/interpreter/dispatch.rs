//! Command dispatch.

use tracing::debug;

use super::command::{split_command_line, Command};
use super::context::ExecContext;
use super::error::CommandError;
use super::result::ExecResult;
use crate::builtins;

/// Execute one command line against the context.
///
/// A blank line yields an empty result. Unknown command names and every
/// handler failure come back as an error-toned result; nothing here panics
/// or aborts the session.
pub fn dispatch(line: &str, ctx: &mut ExecContext<'_>) -> ExecResult {
    let Some((name, args)) = split_command_line(line) else {
        return ExecResult::empty();
    };
    debug!(command = name, cwd = ctx.cwd, "dispatch");

    let result = match Command::from_name(name) {
        Some(command) => builtins::handler(command)(args, ctx),
        None => Err(CommandError::CommandNotFound {
            name: name.to_string(),
        }),
    };

    match result {
        Ok(result) => result,
        Err(error) => {
            debug!(%error, "command failed");
            ExecResult::failure(&error, ctx.locale())
        }
    }
}
