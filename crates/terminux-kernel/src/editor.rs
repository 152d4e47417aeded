//! Editor session state.
//!
//! `nano` asks the host to open a file; the session keeps the file's
//! location and a working buffer until the user saves or closes. Nothing
//! reaches the tree until [`Shell::save_editor`](crate::Shell::save_editor).

/// An open file in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    filename: String,
    path: String,
    buffer: String,
    modified: bool,
}

impl EditorSession {
    /// Open `filename`, stored at the absolute `path`, with `content`.
    pub fn new(filename: impl Into<String>, path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            path: path.into(),
            buffer: content.into(),
            modified: false,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Absolute path the buffer is saved to.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// True if the buffer changed since it was opened or last saved.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Replace the whole buffer.
    pub fn set_buffer(&mut self, content: impl Into<String>) {
        self.buffer = content.into();
        self.modified = true;
    }

    /// Append `line` as a new last line.
    pub fn push_line(&mut self, line: &str) {
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);
        self.modified = true;
    }

    /// Remove the last line and return it.
    pub fn cut_line(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let trimmed_len = self.buffer.trim_end_matches('\n').len();
        self.buffer.truncate(trimmed_len);
        let cut = match self.buffer.rfind('\n') {
            Some(pos) => {
                let line = self.buffer[pos + 1..].to_string();
                self.buffer.truncate(pos);
                line
            }
            None => std::mem::take(&mut self.buffer),
        };
        self.modified = true;
        Some(cut)
    }

    pub(crate) fn mark_saved(&mut self) {
        self.modified = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_line_separates_lines() {
        let mut editor = EditorSession::new("a.txt", "/a.txt", "");
        assert!(!editor.is_modified());
        editor.push_line("one");
        editor.push_line("two");
        assert_eq!(editor.buffer(), "one\ntwo");
        assert!(editor.is_modified());
    }

    #[test]
    fn push_line_after_trailing_newline() {
        let mut editor = EditorSession::new("a.txt", "/a.txt", "one\n");
        editor.push_line("two");
        assert_eq!(editor.buffer(), "one\ntwo");
    }

    #[test]
    fn cut_line_pops_from_the_end() {
        let mut editor = EditorSession::new("a.txt", "/a.txt", "one\ntwo\n");
        assert_eq!(editor.cut_line().as_deref(), Some("two"));
        assert_eq!(editor.buffer(), "one");
        assert_eq!(editor.cut_line().as_deref(), Some("one"));
        assert_eq!(editor.buffer(), "");
        assert_eq!(editor.cut_line(), None);
    }

    #[test]
    fn set_buffer_marks_modified() {
        let mut editor = EditorSession::new("a.txt", "/home/a.txt", "x");
        editor.set_buffer("hi");
        assert_eq!(editor.buffer(), "hi");
        assert!(editor.is_modified());
        editor.mark_saved();
        assert!(!editor.is_modified());
        assert_eq!(editor.path(), "/home/a.txt");
        assert_eq!(editor.filename(), "a.txt");
    }
}
