//! clear: Clear the screen.

use crate::interpreter::{CommandError, Effect, ExecContext, ExecResult};
use crate::render::Output;

pub fn run(_args: &str, _ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    Ok(ExecResult::with_effect(Output::new(), Effect::ClearOutput))
}
