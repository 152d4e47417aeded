//! Terminal rendering of kernel output.

use owo_colors::OwoColorize;
use terminux_kernel::{Output, Tone};

/// Escape sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// How output is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Text only.
    Plain,
    /// ANSI colors.
    Ansi,
    /// HTML spans with the browser front end's classes.
    Html,
}

impl RenderMode {
    pub fn from_color(color: bool) -> Self {
        if color {
            RenderMode::Ansi
        } else {
            RenderMode::Plain
        }
    }
}

pub fn render(output: &Output, mode: RenderMode) -> String {
    match mode {
        RenderMode::Plain => output.to_plain(),
        RenderMode::Html => output.html(),
        RenderMode::Ansi => output
            .segments()
            .iter()
            .map(|segment| match segment.tone {
                Some(tone) => paint(tone, &segment.text),
                None => segment.text.clone(),
            })
            .collect(),
    }
}

fn paint(tone: Tone, text: &str) -> String {
    match tone {
        Tone::Error => text.red().to_string(),
        Tone::Success | Tone::File => text.green().to_string(),
        Tone::Info => text.blue().to_string(),
        Tone::Warning => text.yellow().to_string(),
        Tone::Highlight => text.cyan().to_string(),
        Tone::Muted => text.bright_black().to_string(),
        Tone::Directory => text.blue().bold().to_string(),
    }
}
