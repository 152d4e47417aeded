//! Styled output.
//!
//! Commands produce an [`Output`]: a run of text segments, each optionally
//! tagged with a [`Tone`]. The plain text is the contract tests assert on;
//! front ends pick a renderer ([`Output::html`] here, ANSI in the REPL).

use std::fmt;

/// Semantic style of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Error,
    Success,
    Info,
    Warning,
    Highlight,
    Muted,
    Directory,
    File,
}

impl Tone {
    /// CSS utility class used by the browser front end.
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Error => "text-red-400",
            Tone::Success => "text-green-400",
            Tone::Info => "text-blue-400",
            Tone::Warning => "text-yellow-400",
            Tone::Highlight => "text-cyan-400",
            Tone::Muted => "text-gray-300",
            Tone::Directory => "text-blue-400 font-bold",
            Tone::File => "text-green-400",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Option<Tone>,
}

/// Rendered command output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    segments: Vec<Segment>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    /// Text in a single tone.
    pub fn styled(tone: Tone, text: impl Into<String>) -> Self {
        Self::new().push(tone, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::styled(Tone::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::styled(Tone::Success, text)
    }

    /// Append a toned segment.
    pub fn push(mut self, tone: Tone, text: impl Into<String>) -> Self {
        self.append(Some(tone), text.into());
        self
    }

    /// Append an unstyled segment.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.append(None, text.into());
        self
    }

    fn append(&mut self, tone: Option<Tone>, text: String) {
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.tone == tone {
                last.text.push_str(&text);
                return;
            }
        }
        self.segments.push(Segment { text, tone });
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The text with all styling dropped.
    pub fn to_plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// HTML with toned segments wrapped in `<span class="...">`.
    ///
    /// Text is escaped; line breaks are kept as `\n` for a `pre` container.
    pub fn html(&self) -> String {
        let mut html = String::new();
        for segment in &self.segments {
            match segment.tone {
                Some(tone) => {
                    html.push_str("<span class=\"");
                    html.push_str(tone.css_class());
                    html.push_str("\">");
                    escape_into(&mut html, &segment.text);
                    html.push_str("</span>");
                }
                None => escape_into(&mut html, &segment.text),
            }
        }
        html
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
