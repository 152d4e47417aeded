//! touch: Create an empty file if it does not exist.

use super::operand;
use crate::interpreter::{Command, CommandError, ExecContext, ExecResult};

/// Touch: create `name` in the current directory unless something already
/// uses that name. Existing files keep their content; directories are left
/// alone.
pub fn run(args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let name = operand(Command::Touch, args)?;
    ctx.vfs
        .ensure_file(ctx.cwd, name)
        .map_err(|e| CommandError::fs(Command::Touch, format!("'{name}'"), e))?;
    Ok(ExecResult::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::testing::TestSession;
    use crate::interpreter::ErrorKind;

    #[test]
    fn creates_empty_file() {
        let mut session = TestSession::new();
        session.run(run, "notes.txt").unwrap();
        assert_eq!(session.vfs.read_file("/home/user/notes.txt").unwrap(), "");
    }

    #[test]
    fn existing_nodes_untouched() {
        let mut session = TestSession::new();
        let before = session.vfs.clone();
        session.run(run, "welcome.txt").unwrap();
        session.run(run, "Documents").unwrap();
        assert_eq!(session.vfs, before);
    }

    #[test]
    fn slash_makes_filename_invalid() {
        let mut session = TestSession::new();
        let err = session.run(run, "../x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidName);
        assert_eq!(err.render(session.config.locale), "touch: invalid filename");
    }
}
