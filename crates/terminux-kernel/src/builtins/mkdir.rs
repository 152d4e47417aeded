//! mkdir: Create a directory in the current directory.

use super::operand;
use crate::interpreter::{Command, CommandError, ExecContext, ExecResult};
use crate::vfs::Node;

pub fn run(args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let name = operand(Command::Mkdir, args)?;
    ctx.vfs
        .create_child(ctx.cwd, name, Node::directory())
        .map_err(|e| CommandError::fs(Command::Mkdir, format!("'{name}'"), e))?;
    Ok(ExecResult::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::testing::TestSession;
    use crate::interpreter::ErrorKind;

    #[test]
    fn creates_directory_in_cwd() {
        let mut session = TestSession::new();
        let result = session.run(run, "projects").unwrap();
        assert!(result.output.is_empty());
        assert!(session
            .vfs
            .get_node_at_path("/home/user/projects")
            .is_some_and(Node::is_dir));
    }

    #[test]
    fn name_may_contain_spaces() {
        let mut session = TestSession::new();
        session.run(run, "  my dir ").unwrap();
        assert!(session.vfs.exists("/home/user/my dir"));
    }

    #[test]
    fn duplicate_leaves_tree_unchanged() {
        let mut session = TestSession::new();
        let before = session.vfs.clone();
        let err = session.run(run, "welcome.txt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(err.render(session.config.locale), "mkdir: 'welcome.txt': File exists");
        assert_eq!(session.vfs, before);
    }

    #[test]
    fn operand_errors() {
        let mut session = TestSession::new();
        let err = session.run(run, "").unwrap_err();
        assert_eq!(err.render(session.config.locale), "mkdir: missing operand");
        let err = session.run(run, "a/b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidName);
        assert_eq!(err.render(session.config.locale), "mkdir: invalid directory name");
    }
}
