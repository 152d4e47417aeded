//! ls: List directory contents.

use crate::interpreter::{Command, CommandError, ExecContext, ExecResult};
use crate::render::{Output, Tone};
use crate::vfs::NodeKind;

/// List the current directory, or the directory named by the argument.
///
/// Directories are shown with a trailing `/`; entries are separated by two
/// spaces. An empty directory prints nothing.
pub fn run(args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let target = args.trim();
    let path = if target.is_empty() {
        ctx.cwd.to_string()
    } else {
        ctx.resolve_path(target)
    };

    let entries = ctx
        .vfs
        .list(&path)
        .map_err(|e| CommandError::fs(Command::Ls, path.as_str(), e))?;

    let mut out = Output::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out = out.text("  ");
        }
        out = match entry.kind {
            NodeKind::Directory => out.push(Tone::Directory, format!("{}/", entry.name)),
            NodeKind::File => out.push(Tone::File, entry.name.as_str()),
        };
    }
    Ok(ExecResult::success(out))
}
