//! cd: Change working directory.

use crate::interpreter::{Command, CommandError, Effect, ExecContext, ExecResult};
use crate::render::Output;

/// Cd: move the session to another directory.
///
/// With no argument the session returns home. The target must exist and be
/// a directory; the new path is requested as [`Effect::ChangeDirectory`].
pub fn run(args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let target = args.trim();
    if target.is_empty() {
        return Ok(ExecResult::with_effect(
            Output::new(),
            Effect::ChangeDirectory(ctx.config.home.clone()),
        ));
    }

    let path = ctx.resolve_path(target);
    ctx.vfs
        .directory(&path)
        .map_err(|e| CommandError::fs(Command::Cd, path.as_str(), e))?;

    Ok(ExecResult::with_effect(
        Output::new(),
        Effect::ChangeDirectory(path),
    ))
}
