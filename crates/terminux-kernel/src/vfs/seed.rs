//! The tree every new session starts from.

pub const DEFAULT_HOME: &str = "/home/user";

/// Top-level directories created next to `/home`.
pub const SYSTEM_DIRS: &[&str] = &["etc", "usr", "var"];

/// Directories created inside the home directory.
pub const HOME_DIRS: &[&str] = &["Documents", "Desktop", "Downloads"];

pub const WELCOME_FILE: &str = "welcome.txt";

pub const WELCOME_TEXT: &str = "Welcome to your Ubuntu Terminal!

Available commands:
- help : Show help
- ls : List files
- cd : Change directory
- nano : Open text editor
- clear : Clear screen

Happy exploring! 🐧";

pub const README_FILE: &str = "readme.md";

pub const README_TEXT: &str = "# Terminal Simulator

## Features

- Complete file system
- Integrated text editor
- Command history
- Authentic Ubuntu interface

## Shortcuts

- ↑/↓ : Navigate history
- Tab : Autocomplete
- Ctrl+L : Clear screen
- Ctrl+C : Cancel current command";
