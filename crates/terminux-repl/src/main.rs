//! terminux entry point.
//!
//! ```bash
//! terminux                 # interactive session
//! terminux -c "ls /"       # run one line
//! terminux tasks.txt       # replay a script as a task transcript
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use terminux_kernel::Locale;
use terminux_repl::config::ReplConfig;
use terminux_repl::{paths, Repl};

#[derive(Parser, Debug)]
#[command(name = "terminux")]
#[command(about = "A Unix shell emulator with an in-memory filesystem")]
#[command(version)]
struct Cli {
    /// Run a single command line and exit
    #[arg(short = 'c', value_name = "LINE")]
    command: Option<String>,

    /// Script file to run, one command per line
    #[arg(value_name = "SCRIPT")]
    script_file: Option<PathBuf>,

    /// Config file (defaults to $XDG_CONFIG_HOME/terminux/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Message language (en or fr)
    #[arg(long, value_name = "LANG")]
    locale: Option<Locale>,

    /// Seed for the random commands
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr so they never mix with command output (RUST_LOG)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if let Some(line) = &cli.command {
        let mut repl = Repl::new(config);
        if let Some(output) = repl.process_line(line)? {
            println!("{output}");
        }
        return Ok(exit_code(&repl));
    }

    if let Some(path) = &cli.script_file {
        let script = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read script file {}", path.display()))?;
        let mut repl = Repl::new(config);
        println!("{}", repl.run_batch(&script)?);
        return Ok(ExitCode::SUCCESS);
    }

    terminux_repl::run(config)?;
    Ok(ExitCode::SUCCESS)
}

fn load_config(cli: &Cli) -> Result<ReplConfig> {
    let mut config = match &cli.config {
        Some(path) => ReplConfig::load_from(path)?,
        None => ReplConfig::load()?,
    };

    if cli.no_color {
        config.color = false;
    }
    if let Some(locale) = cli.locale {
        config.kernel.locale = locale;
    }
    if let Some(seed) = cli.seed {
        config.kernel.seed = Some(seed);
    }

    let config_path = cli.config.clone().unwrap_or_else(paths::config_file);
    tracing::info!(
        config = %config_path.display(),
        locale = %config.kernel.locale,
        "terminux starting"
    );
    Ok(config)
}

fn exit_code(repl: &Repl) -> ExitCode {
    if repl.last_error().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
