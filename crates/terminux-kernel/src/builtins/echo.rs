//! echo: Print the argument string.

use crate::interpreter::{CommandError, ExecContext, ExecResult};
use crate::render::Output;

/// Echo: the argument string exactly as typed after `echo `.
pub fn run(args: &str, _ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    Ok(ExecResult::success(Output::plain(args)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::testing::TestSession;

    #[test]
    fn keeps_inner_spacing() {
        let mut session = TestSession::new();
        assert_eq!(session.run(run, "hello   world").unwrap().text(), "hello   world");
        assert_eq!(session.run(run, "").unwrap().text(), "");
    }
}
