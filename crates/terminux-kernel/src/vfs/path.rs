//! Path resolution and name rules.
//!
//! Paths are `/`-delimited strings. Resolution is purely textual: it never
//! touches the tree, and it does not normalize `.` or `..` that appear inside
//! a multi-segment relative path. Those segments reach the lookup literally
//! and only match a child actually named `.` or `..`.

/// Resolve `path` against `cwd` into an absolute path string.
///
/// - absolute input is returned unchanged
/// - `..` drops the last segment of `cwd` (the root stays `/`)
/// - `.` returns `cwd`
/// - anything else is appended to `cwd` with a single `/`
pub fn resolve_path(path: &str, cwd: &str) -> String {
    if path.starts_with('/') {
        return path.to_string();
    }

    match path {
        ".." => {
            let mut parts: Vec<&str> = segments(cwd).collect();
            parts.pop();
            format!("/{}", parts.join("/"))
        }
        "." => cwd.to_string(),
        _ if cwd == "/" => format!("/{path}"),
        _ => format!("{cwd}/{path}"),
    }
}

/// Non-empty segments of a path, so `//a/` and `/a` walk the same way.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Join a directory path and a child name.
pub fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Whether `name` can be used as a single child name.
///
/// Names must be non-empty and free of `/`. Anything else goes, `.` and
/// `..` included.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/')
}

/// Replace a leading `home` with `~` for display.
pub fn display_path(path: &str, home: &str) -> String {
    if path == home {
        return "~".to_string();
    }
    match path.strip_prefix(home) {
        Some(rest) if rest.starts_with('/') && home != "/" => format!("~{rest}"),
        _ => path.to_string(),
    }
}
