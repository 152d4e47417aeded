//! Command failures.
//!
//! Every failure is recoverable: the dispatcher renders it as an error line
//! and the session continues.

use thiserror::Error;

use super::command::Command;
use crate::locale::{Locale, Message};
use crate::vfs::FsError;

/// Category of a failed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    NotADirectory,
    IsADirectory,
    MissingOperand,
    InvalidName,
    AlreadyExists,
    CommandNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{command}: missing operand")]
    MissingOperand { command: Command },

    #[error("{command}: invalid name {name:?}")]
    InvalidName { command: Command, name: String },

    /// A tree operation failed. `target` is what the message shows: the
    /// resolved path for path commands, the quoted name for name commands.
    #[error("{command}: {target}: {source}")]
    Fs {
        command: Command,
        target: String,
        #[source]
        source: FsError,
    },

    #[error("{name}: command not found")]
    CommandNotFound { name: String },
}

impl CommandError {
    pub(crate) fn fs(command: Command, target: impl Into<String>, source: FsError) -> Self {
        CommandError::Fs {
            command,
            target: target.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::MissingOperand { .. } => ErrorKind::MissingOperand,
            CommandError::InvalidName { .. } => ErrorKind::InvalidName,
            CommandError::CommandNotFound { .. } => ErrorKind::CommandNotFound,
            CommandError::Fs { source, .. } => match source {
                FsError::NotFound { .. } => ErrorKind::NotFound,
                FsError::NotADirectory { .. } => ErrorKind::NotADirectory,
                FsError::IsADirectory { .. } => ErrorKind::IsADirectory,
                FsError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
                FsError::InvalidName { .. } => ErrorKind::InvalidName,
            },
        }
    }

    /// The line shown to the user, in `locale`.
    pub fn render(&self, locale: Locale) -> String {
        match self {
            CommandError::MissingOperand { command: Command::Nano } => {
                format!("nano: {}", locale.text(Message::FilenameMissing))
            }
            CommandError::MissingOperand { command } => {
                format!("{command}: {}", locale.text(Message::MissingOperand))
            }
            CommandError::InvalidName { command, .. } => {
                format!("{command}: {}", locale.text(invalid_name_message(*command)))
            }
            CommandError::Fs {
                command,
                target,
                source: FsError::InvalidName { .. },
            } => format!("{command}: {target}: {}", locale.text(Message::InvalidName)),
            CommandError::Fs {
                command,
                target,
                source,
            } => format!("{command}: {target}: {}", locale.text(fs_message(source))),
            CommandError::CommandNotFound { name } => {
                format!("bash: {name}: {}", locale.text(Message::CommandNotFound))
            }
        }
    }
}

fn invalid_name_message(command: Command) -> Message {
    match command {
        Command::Mkdir => Message::InvalidDirectoryName,
        Command::Touch | Command::Nano => Message::InvalidFilename,
        _ => Message::InvalidName,
    }
}

fn fs_message(error: &FsError) -> Message {
    match error {
        FsError::NotFound { .. } => Message::FileNotFound,
        FsError::NotADirectory { .. } => Message::NotADirectory,
        FsError::IsADirectory { .. } => Message::IsADirectory,
        FsError::AlreadyExists { .. } => Message::FileExists,
        FsError::InvalidName { .. } => Message::InvalidName,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_shell_style_messages() {
        let en = Locale::En;
        assert_eq!(
            CommandError::MissingOperand { command: Command::Mkdir }.render(en),
            "mkdir: missing operand"
        );
        assert_eq!(
            CommandError::MissingOperand { command: Command::Nano }.render(en),
            "nano: filename missing"
        );
        assert_eq!(
            CommandError::InvalidName {
                command: Command::Mkdir,
                name: "a/b".into()
            }
            .render(en),
            "mkdir: invalid directory name"
        );
        assert_eq!(
            CommandError::InvalidName {
                command: Command::Rm,
                name: "a/b".into()
            }
            .render(en),
            "rm: invalid name"
        );
        assert_eq!(
            CommandError::CommandNotFound { name: "foo".into() }.render(en),
            "bash: foo: command not found"
        );
    }

    #[test]
    fn fs_errors_show_target() {
        let err = CommandError::fs(
            Command::Ls,
            "/nope",
            FsError::NotFound {
                path: "/nope".into(),
            },
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.render(Locale::En), "ls: /nope: No such file or directory");
        assert_eq!(
            err.render(Locale::Fr),
            "ls: /nope: Aucun fichier ou dossier de ce type"
        );
    }

    #[test]
    fn display_is_untranslated() {
        let err = CommandError::fs(
            Command::Mkdir,
            "'x'",
            FsError::AlreadyExists { path: "/x".into() },
        );
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(err.to_string(), "mkdir: 'x': /x: file exists");
        assert_eq!(err.render(Locale::En), "mkdir: 'x': File exists");
    }
}
