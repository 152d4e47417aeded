//! terminux REPL: an interactive terminal front end for the shell emulator.
//!
//! The kernel runs commands against its in-memory tree; this crate owns
//! everything that touches the real terminal:
//!
//! - Line editing and history via rustyline
//! - ANSI rendering of styled output (`/html` shows the browser markup)
//! - nano-style editor mode: typed lines append to the buffer,
//!   `^S` saves, `^X` closes, `^K` cuts the last line, `^W` shows help
//! - Batch mode that replays a script as a numbered task transcript
//! - Meta-commands: `/help`, `/quit`, `/dump`, `/html`

pub mod config;
pub mod paths;
pub mod style;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing::{debug, info, warn};

use terminux_kernel::locale::Message;
use terminux_kernel::{Effect, ErrorKind, ExecResult, Output, Shell, Tone};

use crate::config::ReplConfig;
use crate::style::{render, RenderMode, CLEAR_SCREEN};

/// REPL state: one shell session plus terminal settings.
pub struct Repl {
    shell: Shell,
    color: bool,
    mode: RenderMode,
    last_error: Option<ErrorKind>,
    exit: bool,
}

impl Repl {
    pub fn new(config: ReplConfig) -> Self {
        let mode = RenderMode::from_color(config.color);
        Self {
            shell: Shell::new(config.kernel),
            color: config.color,
            mode,
            last_error: None,
            exit: false,
        }
    }

    /// Process a single line of input.
    ///
    /// Returns the rendered output, or `None` when there is nothing to show.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>> {
        if self.shell.editor().is_some() {
            return Ok(self.editor_line(line));
        }

        let trimmed = line.trim();
        if trimmed.starts_with('/') {
            return self.handle_meta_command(trimmed);
        }

        let result = self.shell.execute(line);
        self.last_error = result.error;
        Ok(self.present(result))
    }

    /// Turn an execution result into terminal text.
    fn present(&self, result: ExecResult) -> Option<String> {
        match result.effect {
            Some(Effect::ClearOutput) => {
                (self.mode == RenderMode::Ansi).then(|| CLEAR_SCREEN.to_string())
            }
            Some(Effect::OpenEditor { filename, content }) => {
                let banner = self.editor_banner(&filename, &content);
                Some(render(&banner, self.mode))
            }
            Some(Effect::ChangeDirectory(_)) | None => self.show(&result.output),
        }
    }

    fn show(&self, output: &Output) -> Option<String> {
        if output.is_empty() {
            None
        } else {
            Some(render(output, self.mode))
        }
    }

    fn editor_banner(&self, filename: &str, content: &str) -> Output {
        let locale = self.shell.config().locale;
        let mut banner = Output::styled(Tone::Highlight, format!("  GNU nano  {filename}")).text("\n");
        if !content.is_empty() {
            banner = banner.text(content).text("\n");
        }
        banner.push(Tone::Muted, locale.text(Message::EditorHelp))
    }

    /// A line typed while the editor is open.
    fn editor_line(&mut self, line: &str) -> Option<String> {
        let locale = self.shell.config().locale;
        match line.trim() {
            "^S" => {
                let saved = self.shell.save_editor();
                self.last_error = saved.error;
                self.show(&saved.output)
            }
            "^X" => {
                self.shell.close_editor();
                None
            }
            "^W" => self.show(&Output::styled(Tone::Muted, locale.text(Message::EditorHelp))),
            "^K" => {
                let cut = self.shell.editor_mut().and_then(|editor| editor.cut_line());
                cut.and_then(|text| self.show(&Output::styled(Tone::Muted, text)))
            }
            _ => {
                if let Some(editor) = self.shell.editor_mut() {
                    editor.push_line(line);
                }
                None
            }
        }
    }

    /// Handle a meta-command (starts with /).
    fn handle_meta_command(&mut self, cmd: &str) -> Result<Option<String>> {
        let command = cmd.split_whitespace().next().unwrap_or("");
        debug!(command, "meta command");

        match command {
            "/quit" | "/q" | "/exit" => {
                self.exit = true;
                Ok(None)
            }
            "/help" | "/h" | "/?" => Ok(Some(HELP_TEXT.to_string())),
            "/dump" => {
                let json = self
                    .shell
                    .vfs()
                    .to_json_pretty()
                    .context("Failed to serialize filesystem")?;
                Ok(Some(json))
            }
            "/html" => {
                self.mode = if self.mode == RenderMode::Html {
                    RenderMode::from_color(self.color)
                } else {
                    RenderMode::Html
                };
                let state = if self.mode == RenderMode::Html { "ON" } else { "OFF" };
                Ok(Some(format!("HTML mode: {state}")))
            }
            _ => Ok(Some(format!(
                "Unknown command: {command}\nType /help for available commands."
            ))),
        }
    }

    /// Run a whole script as a sequence of tasks.
    ///
    /// Each non-empty line that is not a `#` comment is echoed with its task
    /// number and the prompt it ran at, followed by its output.
    pub fn run_batch(&mut self, script: &str) -> Result<String> {
        let tasks: Vec<&str> = script
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .collect();
        let total = tasks.len();
        info!(tasks = total, "running batch script");

        let mut transcript = Vec::new();
        for (index, line) in tasks.iter().enumerate() {
            transcript.push(format!("[Task {}/{}] {}{}", index + 1, total, self.prompt(), line.trim()));
            if let Some(output) = self.process_line(line)? {
                transcript.push(output);
            }
            if self.exit {
                break;
            }
        }

        let locale = self.shell.config().locale;
        transcript.push(render(&Output::success(locale.text(Message::TasksCompleted)), self.mode));
        Ok(transcript.join("\n"))
    }

    /// Prompt for the next line: the shell prompt, or `nano> ` while editing.
    pub fn prompt(&self) -> String {
        if self.in_editor() {
            "nano> ".to_string()
        } else {
            self.shell.prompt()
        }
    }

    /// Greeting printed when an interactive session starts.
    pub fn welcome(&self) -> String {
        render(&self.shell.welcome(), self.mode)
    }

    pub fn in_editor(&self) -> bool {
        self.shell.editor().is_some()
    }

    /// True once a quit command was entered.
    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// Error kind of the most recent command, if it failed.
    pub fn last_error(&self) -> Option<ErrorKind> {
        self.last_error
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut Shell {
        &mut self.shell
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new(ReplConfig::default())
    }
}

const HELP_TEXT: &str = r#"terminux REPL

Meta commands:
  /help, /h, /?     Show this help
  /quit, /q, /exit  Exit the REPL
  /dump             Print the filesystem as JSON
  /html             Toggle HTML output

Shell:
  help              List shell commands
  nano FILE         Open the editor

Editor:
  ^S                Save the buffer
  ^X                Close the editor
  ^K                Cut the last line
  ^W                Show editor keys
  anything else     Append a line to the buffer
"#;

/// Run the interactive REPL.
pub fn run(config: ReplConfig) -> Result<()> {
    let history = config.history;
    let rl_config = rustyline::Config::builder()
        .max_history_size(config.history_size)
        .context("Invalid history size")?
        .auto_add_history(false)
        .build();
    let mut rl: Editor<(), DefaultHistory> =
        Editor::with_config(rl_config).context("Failed to create editor")?;

    let history_path = paths::history_file();
    if history && history_path.exists() {
        if let Err(e) = rl.load_history(&history_path) {
            warn!(path = %history_path.display(), error = %e, "failed to load history");
        }
    }

    let mut repl = Repl::new(config);
    println!("{}", repl.welcome());

    loop {
        let prompt = repl.prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                if !repl.in_editor() && !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                match repl.process_line(&line) {
                    Ok(Some(output)) if output == CLEAR_SCREEN => print!("{output}"),
                    Ok(Some(output)) => println!("{output}"),
                    Ok(None) => {}
                    Err(e) => eprintln!("Error: {e:#}"),
                }
                if repl.should_exit() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        }
    }

    if history {
        if let Some(parent) = history_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "failed to create history directory");
            }
        }
        if let Err(e) = rl.save_history(&history_path) {
            warn!(path = %history_path.display(), error = %e, "failed to save history");
        }
    }

    Ok(())
}
