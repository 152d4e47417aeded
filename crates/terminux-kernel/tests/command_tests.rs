//! Command behavior tests for terminux-kernel.
//!
//! Each case runs a short script through a fresh `Shell` and checks the
//! output of the last line.

use rstest::rstest;
use terminux_kernel::{Effect, ErrorKind, ExecResult, KernelConfig, Locale, Shell, Tone};

/// Run every line of `script` in one session and return the last result.
fn run_script(script: &str) -> (Shell, ExecResult) {
    let mut shell = Shell::transient();
    let mut last = ExecResult::empty();
    for line in script.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        last = shell.execute(trimmed);
    }
    (shell, last)
}

fn last_output(script: &str) -> String {
    run_script(script).1.text()
}

// =============================================================================
// NAVIGATION
// =============================================================================

#[rstest]
#[case::pwd_starts_home("pwd", "/home/user")]
#[case::cd_relative("cd Documents\npwd", "/home/user/Documents")]
#[case::cd_parent("cd ..\npwd", "/home")]
#[case::cd_parent_twice("cd ..\ncd ..\ncd ..\npwd", "/")]
#[case::cd_dot("cd .\npwd", "/home/user")]
#[case::cd_absolute("cd /usr\npwd", "/usr")]
#[case::cd_home("cd /etc\ncd\npwd", "/home/user")]
#[case::cd_from_root("cd /\ncd home\npwd", "/home")]
fn navigation(#[case] script: &str, #[case] expected: &str) {
    assert_eq!(last_output(script), expected);
}

// =============================================================================
// LISTING
// =============================================================================

#[rstest]
#[case::home("ls", "Desktop/  Documents/  Downloads/  readme.md  welcome.txt")]
#[case::root("ls /", "etc/  home/  usr/  var/")]
#[case::parent("ls ..", "user/")]
#[case::empty_dir("ls Documents", "")]
#[case::after_mkdir("cd /var\nmkdir log\ntouch motd\nls", "log/  motd")]
fn listing(#[case] script: &str, #[case] expected: &str) {
    assert_eq!(last_output(script), expected);
}

#[test]
fn mkdir_then_ls_shows_directory_tone() {
    let (_, result) = run_script("mkdir x\nls");
    let segment = result
        .output
        .segments()
        .iter()
        .find(|s| s.text == "x/")
        .cloned();
    assert_eq!(segment.map(|s| s.tone), Some(Some(Tone::Directory)));
}

// =============================================================================
// ERRORS
// =============================================================================

#[rstest]
#[case::ls_missing("ls nope", ErrorKind::NotFound, "ls: /home/user/nope: No such file or directory")]
#[case::ls_file("ls welcome.txt", ErrorKind::NotADirectory, "ls: /home/user/welcome.txt: Not a directory")]
#[case::cd_missing("cd /nope", ErrorKind::NotFound, "cd: /nope: No such file or directory")]
#[case::cd_file("cd readme.md", ErrorKind::NotADirectory, "cd: /home/user/readme.md: Not a directory")]
#[case::mkdir_exists("mkdir Desktop", ErrorKind::AlreadyExists, "mkdir: 'Desktop': File exists")]
#[case::mkdir_missing("mkdir", ErrorKind::MissingOperand, "mkdir: missing operand")]
#[case::mkdir_slash("mkdir a/b", ErrorKind::InvalidName, "mkdir: invalid directory name")]
#[case::touch_missing("touch   ", ErrorKind::MissingOperand, "touch: missing operand")]
#[case::touch_slash("touch /x", ErrorKind::InvalidName, "touch: invalid filename")]
#[case::rm_missing("rm ghost", ErrorKind::NotFound, "rm: 'ghost': No such file or directory")]
#[case::rm_slash("rm a/b", ErrorKind::InvalidName, "rm: invalid name")]
#[case::rm_dotdot("rm ..", ErrorKind::NotFound, "rm: '..': No such file or directory")]
#[case::cat_dir("cat Documents", ErrorKind::IsADirectory, "cat: /home/user/Documents: Is a directory")]
#[case::cat_missing("cat nope", ErrorKind::NotFound, "cat: /home/user/nope: No such file or directory")]
#[case::nano_dir("nano Desktop", ErrorKind::IsADirectory, "nano: Desktop: Is a directory")]
#[case::nano_missing("nano", ErrorKind::MissingOperand, "nano: filename missing")]
#[case::unknown("frobnicate --all", ErrorKind::CommandNotFound, "bash: frobnicate: command not found")]
#[case::ai_not_built("ask what is rust", ErrorKind::CommandNotFound, "bash: ask: command not found")]
#[case::dotdot_not_normalized("cat ../user/welcome.txt", ErrorKind::NotFound, "cat: /home/user/../user/welcome.txt: No such file or directory")]
fn errors(#[case] line: &str, #[case] kind: ErrorKind, #[case] message: &str) {
    let (_, result) = run_script(line);
    assert_eq!(result.error, Some(kind));
    assert_eq!(result.text(), message);
    assert!(result
        .output
        .segments()
        .iter()
        .all(|s| s.tone == Some(Tone::Error)));
}

#[rstest]
#[case::mkdir_dotdot("mkdir ..\nls", "../  Desktop/  Documents/  Downloads/  readme.md  welcome.txt")]
#[case::touch_dot("cd Documents\ntouch .\nls", ".")]
#[case::rm_dot_after_touch("cd Documents\ntouch .\nrm .\nls", "")]
#[case::cd_dotdot_still_navigates("mkdir ..\ncd ..\npwd", "/home")]
fn dot_names_are_ordinary(#[case] script: &str, #[case] expected: &str) {
    let (_, result) = run_script(script);
    assert!(result.ok(), "{script:?} failed: {}", result.text());
    assert_eq!(result.text(), expected);
}

#[test]
fn nano_opens_file_named_dot() {
    let (shell, result) = run_script("nano .");
    assert_eq!(
        result.effect,
        Some(Effect::OpenEditor {
            filename: ".".into(),
            content: String::new()
        })
    );
    assert!(shell.vfs().get_node_at_path("/home/user/.").is_some_and(|n| n.is_file()));
}

#[test]
fn failed_mkdir_leaves_tree_unchanged() {
    let mut shell = Shell::transient();
    shell.execute("mkdir x");
    let before = shell.vfs().clone();
    let result = shell.execute("mkdir x");
    assert_eq!(result.error, Some(ErrorKind::AlreadyExists));
    assert_eq!(shell.vfs(), &before);
}

#[test]
fn errors_in_french() {
    let mut shell = Shell::new(KernelConfig::transient().with_locale(Locale::Fr));
    assert_eq!(
        shell.execute("cat Documents").text(),
        "cat: /home/user/Documents: Est un dossier"
    );
    assert_eq!(shell.execute("mkdir").text(), "mkdir: opérande manquant");
}

// =============================================================================
// FILE LIFECYCLE
// =============================================================================

#[test]
fn touch_then_cat_is_empty() {
    let (_, result) = run_script("touch a\ncat a");
    assert!(result.ok());
    assert_eq!(result.text(), "");
}

#[test]
fn rm_then_cat_is_not_found() {
    let (_, result) = run_script("touch a\nrm a\ncat a");
    assert_eq!(result.error, Some(ErrorKind::NotFound));
}

#[test]
fn nano_save_then_cat() {
    let mut shell = Shell::transient();
    let opened = shell.execute("nano a");
    assert_eq!(
        opened.effect,
        Some(Effect::OpenEditor {
            filename: "a".into(),
            content: String::new()
        })
    );
    if let Some(editor) = shell.editor_mut() {
        editor.set_buffer("hi");
    }
    assert!(shell.save_editor().ok());
    shell.close_editor();
    assert_eq!(shell.execute("cat a").text(), "hi");
}

#[test]
fn rm_removes_whole_subtree() {
    let (shell, result) = run_script("mkdir box\ncd box\nmkdir inner\ntouch inner-file\ncd ..\nrm box\nls");
    assert!(result.ok());
    assert!(!result.text().contains("box"));
    assert!(!shell.vfs().exists("/home/user/box/inner"));
}

#[test]
fn names_with_spaces() {
    let (_, result) = run_script("mkdir my projects\ncd my projects\npwd");
    assert_eq!(result.text(), "/home/user/my projects");
}

// =============================================================================
// TREE
// =============================================================================

#[test]
fn tree_two_entries() {
    let (_, result) = run_script("cd /var\nmkdir Documents\ntouch welcome.txt\ntree");
    let text = result.text();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("├── "));
    assert!(lines[1].starts_with("└── "));
}

#[test]
fn tree_from_root() {
    let (_, result) = run_script("cd /\ntree");
    insta::assert_snapshot!(result.text(), @r"
    ├── 📁 etc
    ├── 📁 home
    │   └── 📁 user
    │       ├── 📁 Desktop
    │       ├── 📁 Documents
    │       ├── 📁 Downloads
    │       ├── 📄 readme.md
    │       └── 📄 welcome.txt
    ├── 📁 usr
    └── 📁 var
    ");
}

// =============================================================================
// EFFECTS & MISC
// =============================================================================

#[test]
fn clear_requests_output_reset() {
    let (_, result) = run_script("clear");
    assert_eq!(result.effect, Some(Effect::ClearOutput));
    assert!(result.output.is_empty());
}

#[test]
fn blank_line_is_silent() {
    let mut shell = Shell::transient();
    assert_eq!(shell.execute("   "), ExecResult::empty());
}

#[rstest]
#[case::echo("echo hello world", "hello world")]
#[case::whoami("whoami", "user")]
#[case::leading_spaces("   pwd   ", "/home/user")]
fn simple_output(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(last_output(line), expected);
}

#[test]
fn cowsay_keeps_spacing_after_command() {
    let text = last_output("cowsay  hi");
    assert!(text.starts_with("╭───────╮\n│   hi  │\n╰───────╯\n"), "{text}");
}

#[test]
fn seeded_sessions_agree() {
    let mut a = Shell::new(KernelConfig::default().with_seed(42));
    let mut b = Shell::new(KernelConfig::default().with_seed(42));
    for line in ["matrix", "fortune", "joke", "weather"] {
        assert_eq!(a.execute(line), b.execute(line));
    }
}

#[test]
fn welcome_file_lists_commands() {
    let text = last_output("cat welcome.txt");
    assert!(text.contains("- nano : Open text editor"));
}
