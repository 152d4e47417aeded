//! pwd: Print working directory.

use crate::interpreter::{CommandError, ExecContext, ExecResult};
use crate::render::Output;

pub fn run(_args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    Ok(ExecResult::success(Output::plain(ctx.cwd)))
}
