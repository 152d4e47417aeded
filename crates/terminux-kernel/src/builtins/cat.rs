//! cat: Print file contents.

use crate::interpreter::{Command, CommandError, ExecContext, ExecResult};
use crate::render::Output;

pub fn run(args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let target = args.trim();
    if target.is_empty() {
        return Err(CommandError::MissingOperand {
            command: Command::Cat,
        });
    }

    let path = ctx.resolve_path(target);
    let content = ctx
        .vfs
        .read_file(&path)
        .map_err(|e| CommandError::fs(Command::Cat, path.as_str(), e))?;
    Ok(ExecResult::success(Output::plain(content)))
}
