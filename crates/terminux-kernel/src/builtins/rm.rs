//! rm: Remove a file or directory from the current directory.

use super::operand;
use crate::interpreter::{Command, CommandError, ExecContext, ExecResult};

/// Rm: delete the named child without confirmation.
///
/// Directories go with everything below them, empty or not.
pub fn run(args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let name = operand(Command::Rm, args)?;
    ctx.vfs
        .remove_child(ctx.cwd, name)
        .map_err(|e| CommandError::fs(Command::Rm, format!("'{name}'"), e))?;
    Ok(ExecResult::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::testing::TestSession;
    use crate::interpreter::ErrorKind;

    #[test]
    fn removes_file() {
        let mut session = TestSession::new();
        session.run(run, "readme.md").unwrap();
        assert!(!session.vfs.exists("/home/user/readme.md"));
    }

    #[test]
    fn removes_non_empty_directory() {
        let mut session = TestSession::new();
        session.cwd = "/home".into();
        session.run(run, "user").unwrap();
        assert!(session.vfs.list("/home").unwrap().is_empty());
    }

    #[test]
    fn missing_name() {
        let mut session = TestSession::new();
        let err = session.run(run, "ghost").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            err.render(session.config.locale),
            "rm: 'ghost': No such file or directory"
        );
    }

    #[test]
    fn operand_errors() {
        let mut session = TestSession::new();
        assert_eq!(
            session.run(run, "").unwrap_err().kind(),
            ErrorKind::MissingOperand
        );
        let err = session.run(run, "/etc").unwrap_err();
        assert_eq!(err.render(session.config.locale), "rm: invalid name");
        assert!(session.vfs.exists("/etc"));
    }
}
