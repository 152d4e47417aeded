//! nano: Open a file in the editor.

use super::operand;
use crate::interpreter::{Command, CommandError, Effect, ExecContext, ExecResult};
use crate::render::Output;
use crate::vfs::join;

/// Nano: create the file in the current directory if needed, then ask the
/// host to open the editor on it.
pub fn run(args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let filename = operand(Command::Nano, args)?;
    let fs_error = |e| CommandError::fs(Command::Nano, filename, e);

    ctx.vfs.ensure_file(ctx.cwd, filename).map_err(fs_error)?;
    let content = ctx
        .vfs
        .read_file(&join(ctx.cwd, filename))
        .map_err(fs_error)?
        .to_string();

    Ok(ExecResult::with_effect(
        Output::new(),
        Effect::OpenEditor {
            filename: filename.to_string(),
            content,
        },
    ))
}
