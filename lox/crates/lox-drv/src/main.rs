//! lox - scan Lox source into tokens.
//!
//! With a script argument the whole file is scanned once; without one an
//! interactive prompt scans each input line on its own.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lox_drv::{Config, DriverError, OutputFormat, Result, Session, Status};

/// Scan Lox source into tokens
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan Lox source into tokens", long_about = None)]
struct Cli {
    /// Script to scan (starts an interactive prompt when omitted)
    script: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "LOX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "LOX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "LOX_NO_COLOR")]
    no_color: bool,

    /// Token output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Prompt text for interactive mode (default: from config)
    #[arg(long)]
    prompt: Option<String>,
}

impl Cli {
    /// Command-line flags take precedence over the configuration file.
    fn apply_overrides(&self, config: &mut Config) {
        config.verbose |= self.verbose;
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(prompt) = &self.prompt {
            config.repl.prompt = prompt.clone();
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<Status> {
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    init_logging(config.verbose, cli.no_color)?;

    let mut session = Session::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.script {
        Some(path) => session.run_file(&path, &mut out),
        None => {
            tracing::debug!("starting interactive prompt");
            session.run_prompt(io::stdin().lock(), &mut out)?;
            Ok(Status::Success)
        }
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr so stdout carries nothing but tokens. `RUST_LOG`
/// overrides the level picked from `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
