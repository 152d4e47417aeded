//! Builtin command handlers.
//!
//! One module per command (the cosmetic ones share [`fun`]). Every handler
//! has the [`Builtin`] signature: it receives the raw argument string and
//! the execution context, and either returns a result or a
//! [`CommandError`] for the dispatcher to render.

pub mod cat;
pub mod cd;
pub mod clear;
pub mod echo;
pub mod fun;
pub mod help;
pub mod ls;
pub mod mkdir;
pub mod nano;
pub mod pwd;
pub mod rm;
pub mod system;
pub mod touch;
pub mod tree;

use crate::interpreter::{Command, CommandError, ExecContext, ExecResult};
use crate::vfs::is_valid_name;

/// Signature shared by all builtins.
pub type Builtin = fn(&str, &mut ExecContext<'_>) -> Result<ExecResult, CommandError>;

/// The handler for `command`.
pub fn handler(command: Command) -> Builtin {
    match command {
        Command::Help => help::run,
        Command::Ls => ls::run,
        Command::Cd => cd::run,
        Command::Pwd => pwd::run,
        Command::Mkdir => mkdir::run,
        Command::Touch => touch::run,
        Command::Rm => rm::run,
        Command::Cat => cat::run,
        Command::Nano => nano::run,
        Command::Tree => tree::run,
        Command::Clear => clear::run,
        Command::Whoami => system::whoami,
        Command::Date => system::date,
        Command::Echo => echo::run,
        Command::Neofetch => fun::neofetch,
        Command::Cowsay => fun::cowsay,
        Command::Sl => fun::sl,
        Command::Matrix => fun::matrix,
        Command::Fortune => fun::fortune,
        Command::Figlet => fun::figlet,
        Command::Joke => fun::joke,
        Command::Weather => fun::weather,
    }
}

/// The single child name a name-taking command operates on.
///
/// The whole trimmed argument string is the name, spaces included.
pub(crate) fn operand(command: Command, args: &str) -> Result<&str, CommandError> {
    let name = args.trim();
    if name.is_empty() {
        return Err(CommandError::MissingOperand { command });
    }
    if !is_valid_name(name) {
        return Err(CommandError::InvalidName {
            command,
            name: name.to_string(),
        });
    }
    Ok(name)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_is_whole_trimmed_string() {
        assert_eq!(operand(Command::Mkdir, "  my dir "), Ok("my dir"));
    }

    #[test]
    fn operand_errors() {
        assert_eq!(
            operand(Command::Touch, "   "),
            Err(CommandError::MissingOperand {
                command: Command::Touch
            })
        );
        assert!(matches!(
            operand(Command::Rm, "a/b"),
            Err(CommandError::InvalidName { .. })
        ));
    }
}
