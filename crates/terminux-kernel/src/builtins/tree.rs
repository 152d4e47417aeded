//! tree: Draw the current directory as a tree.

use std::collections::BTreeMap;

use crate::interpreter::{Command, CommandError, ExecContext, ExecResult};
use crate::render::{Output, Tone};
use crate::vfs::Node;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

pub fn run(_args: &str, ctx: &mut ExecContext<'_>) -> Result<ExecResult, CommandError> {
    let children = ctx
        .vfs
        .directory(ctx.cwd)
        .map_err(|e| CommandError::fs(Command::Tree, ctx.cwd, e))?;
    Ok(ExecResult::success(render_tree(children)))
}

/// Draw `children` depth-first, one line per node.
///
/// Each line is `prefix + connector + icon + " " + name`. The last entry of
/// a directory gets `└── `, the others `├── `. Non-empty directories are
/// descended into with the prefix extended by four spaces below a last
/// entry and by `│   ` otherwise.
pub fn render_tree(children: &BTreeMap<String, Node>) -> Output {
    draw(children, "", Output::new())
}

fn draw(children: &BTreeMap<String, Node>, prefix: &str, mut out: Output) -> Output {
    let count = children.len();
    for (index, (name, node)) in children.iter().enumerate() {
        let is_last = index + 1 == count;
        if !out.is_empty() {
            out = out.text("\n");
        }
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        out = out.text(format!("{prefix}{connector}"));
        out = match node {
            Node::Directory { .. } => out.text("📁 ").push(Tone::Directory, name.as_str()),
            Node::File { .. } => out.text("📄 ").push(Tone::File, name.as_str()),
        };

        if let Node::Directory { children: grandchildren } = node {
            if !grandchildren.is_empty() {
                let extension = if is_last { SPACE } else { PIPE };
                out = draw(grandchildren, &format!("{prefix}{extension}"), out);
            }
        }
    }
    out
}
