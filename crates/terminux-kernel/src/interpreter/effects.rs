//! Callback-style entry point.
//!
//! [`dispatch`](super::dispatch) hands effects back as values. Hosts that
//! prefer to be called instead implement [`Effects`] and use
//! [`execute_command`].

use super::context::{session_rng, ExecContext};
use super::dispatch::dispatch;
use super::result::{Effect, ExecResult};
use crate::config::KernelConfig;
use crate::render::Output;
use crate::vfs::Vfs;

/// Host hooks for the side effects a command may request.
pub trait Effects {
    /// Make `path` the current directory.
    fn set_current_path(&mut self, path: &str);

    /// Open the editor on `filename` with `content`.
    fn open_editor(&mut self, filename: &str, content: &str);

    /// Drop everything shown so far.
    fn clear_output(&mut self);
}

impl ExecResult {
    /// Hand the requested effect, if any, to `effects`.
    pub fn apply_to(&self, effects: &mut dyn Effects) {
        match &self.effect {
            Some(Effect::ChangeDirectory(path)) => effects.set_current_path(path),
            Some(Effect::OpenEditor { filename, content }) => effects.open_editor(filename, content),
            Some(Effect::ClearOutput) => effects.clear_output(),
            None => {}
        }
    }
}

/// Run `line` in `current_path` with default configuration, reporting
/// effects through `effects`.
pub fn execute_command(
    line: &str,
    current_path: &str,
    vfs: &mut Vfs,
    effects: &mut dyn Effects,
) -> Output {
    execute_command_with(line, current_path, vfs, &KernelConfig::default(), effects)
}

/// [`execute_command`] with an explicit configuration.
pub fn execute_command_with(
    line: &str,
    current_path: &str,
    vfs: &mut Vfs,
    config: &KernelConfig,
    effects: &mut dyn Effects,
) -> Output {
    let mut rng = session_rng(config.seed);
    let mut ctx = ExecContext::new(vfs, current_path, config, &mut rng);
    let result = dispatch(line, &mut ctx);
    result.apply_to(effects);
    result.output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        paths: Vec<String>,
        opened: Vec<(String, String)>,
        cleared: usize,
    }

    impl Effects for Recorder {
        fn set_current_path(&mut self, path: &str) {
            self.paths.push(path.to_string());
        }

        fn open_editor(&mut self, filename: &str, content: &str) {
            self.opened.push((filename.to_string(), content.to_string()));
        }

        fn clear_output(&mut self) {
            self.cleared += 1;
        }
    }

    #[test]
    fn cd_calls_set_current_path() {
        let mut vfs = Vfs::default();
        let mut recorder = Recorder::default();
        let out = execute_command("cd ..", "/home/user", &mut vfs, &mut recorder);
        assert!(out.is_empty());
        assert_eq!(recorder.paths, vec!["/home"]);
    }

    #[test]
    fn nano_calls_open_editor() {
        let mut vfs = Vfs::default();
        let mut recorder = Recorder::default();
        execute_command("nano welcome.txt", "/home/user", &mut vfs, &mut recorder);
        assert_eq!(recorder.opened.len(), 1);
        assert_eq!(recorder.opened[0].0, "welcome.txt");
        assert!(recorder.opened[0].1.starts_with("Welcome"));
    }

    #[test]
    fn clear_calls_clear_output() {
        let mut vfs = Vfs::default();
        let mut recorder = Recorder::default();
        execute_command("clear", "/", &mut vfs, &mut recorder);
        assert_eq!(recorder.cleared, 1);
    }

    #[test]
    fn errors_call_nothing() {
        let mut vfs = Vfs::default();
        let mut recorder = Recorder::default();
        let out = execute_command("cd nowhere", "/", &mut vfs, &mut recorder);
        assert_eq!(out.to_plain(), "cd: /nowhere: No such file or directory");
        assert!(recorder.paths.is_empty());
    }
}
