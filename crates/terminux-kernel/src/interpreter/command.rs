//! The closed set of commands the interpreter understands.

use std::fmt;

/// A builtin command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Ls,
    Cd,
    Pwd,
    Mkdir,
    Touch,
    Rm,
    Cat,
    Nano,
    Tree,
    Clear,
    Whoami,
    Date,
    Echo,
    Neofetch,
    Cowsay,
    Sl,
    Matrix,
    Fortune,
    Figlet,
    Joke,
    Weather,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: &'static [Command] = &[
        Command::Help,
        Command::Ls,
        Command::Cd,
        Command::Pwd,
        Command::Mkdir,
        Command::Touch,
        Command::Rm,
        Command::Cat,
        Command::Nano,
        Command::Tree,
        Command::Clear,
        Command::Whoami,
        Command::Date,
        Command::Echo,
        Command::Neofetch,
        Command::Cowsay,
        Command::Sl,
        Command::Matrix,
        Command::Fortune,
        Command::Figlet,
        Command::Joke,
        Command::Weather,
    ];

    /// Look a command up by the name typed at the prompt.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "help" => Command::Help,
            "ls" => Command::Ls,
            "cd" => Command::Cd,
            "pwd" => Command::Pwd,
            "mkdir" => Command::Mkdir,
            "touch" => Command::Touch,
            "rm" => Command::Rm,
            "cat" => Command::Cat,
            "nano" => Command::Nano,
            "tree" => Command::Tree,
            "clear" => Command::Clear,
            "whoami" => Command::Whoami,
            "date" => Command::Date,
            "echo" => Command::Echo,
            "neofetch" => Command::Neofetch,
            "cowsay" => Command::Cowsay,
            "sl" => Command::Sl,
            "matrix" => Command::Matrix,
            "fortune" => Command::Fortune,
            "figlet" => Command::Figlet,
            "joke" => Command::Joke,
            "weather" => Command::Weather,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Ls => "ls",
            Command::Cd => "cd",
            Command::Pwd => "pwd",
            Command::Mkdir => "mkdir",
            Command::Touch => "touch",
            Command::Rm => "rm",
            Command::Cat => "cat",
            Command::Nano => "nano",
            Command::Tree => "tree",
            Command::Clear => "clear",
            Command::Whoami => "whoami",
            Command::Date => "date",
            Command::Echo => "echo",
            Command::Neofetch => "neofetch",
            Command::Cowsay => "cowsay",
            Command::Sl => "sl",
            Command::Matrix => "matrix",
            Command::Fortune => "fortune",
            Command::Figlet => "figlet",
            Command::Joke => "joke",
            Command::Weather => "weather",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Split a raw line into the command name and the rest of the line.
///
/// The line is trimmed, then cut at the first space. The argument string
/// keeps any further spacing untouched; handlers trim it as they need.
/// Returns `None` for a blank line.
pub fn split_command_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.split_once(' ').unwrap_or((trimmed, "")))
}
