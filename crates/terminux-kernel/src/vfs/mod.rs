//! Virtual Filesystem (VFS) for terminux.
//!
//! A single rooted tree of [`Node`]s held entirely in memory:
//!
//! ```text
//! /
//! ├── etc/
//! ├── home/
//! │   └── user/          # home: Documents/, Desktop/, Downloads/, welcome.txt, readme.md
//! ├── usr/
//! └── var/
//! ```
//!
//! Callers address nodes by path strings. [`resolve_path`] turns a relative
//! path plus the current directory into an absolute one; [`Vfs`] walks and
//! mutates the tree. Nothing is persisted.

mod error;
mod node;
mod path;
mod seed;
mod tree;

pub use error::FsError;
pub use node::{Node, NodeKind};
pub use path::{display_path, is_valid_name, join, resolve_path, segments};
pub use seed::DEFAULT_HOME;
pub use tree::{DirEntry, Vfs};
