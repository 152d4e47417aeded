//! terminux-kernel: the core of the terminux shell emulator.
//!
//! This crate provides:
//!
//! - **VFS**: an in-memory tree of directories and files with path
//!   resolution and a checked mutation API
//! - **Interpreter**: splits a command line, dispatches it to a builtin and
//!   reports side effects (change directory, open editor, clear screen)
//! - **Builtins**: `ls`, `cd`, `pwd`, `mkdir`, `touch`, `rm`, `cat`, `nano`,
//!   `tree`, `clear` and a handful of cosmetic commands
//! - **Shell**: a session that owns the tree, the current directory and the
//!   open editor buffer
//! - **Render**: styled output that front ends turn into HTML or ANSI
//!
//! ```
//! use terminux_kernel::Shell;
//!
//! let mut shell = Shell::transient();
//! shell.execute("mkdir projects");
//! shell.execute("cd projects");
//! assert_eq!(shell.execute("pwd").text(), "/home/user/projects");
//! ```

pub mod builtins;
pub mod config;
pub mod editor;
pub mod interpreter;
pub mod locale;
pub mod render;
pub mod shell;
pub mod vfs;

pub use config::KernelConfig;
pub use editor::EditorSession;
pub use interpreter::{
    dispatch, execute_command, Command, CommandError, Effect, Effects, ErrorKind, ExecContext,
    ExecResult,
};
pub use locale::Locale;
pub use render::{Output, Tone};
pub use shell::Shell;
pub use vfs::{resolve_path, FsError, Node, NodeKind, Vfs};
