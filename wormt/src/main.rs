//! Wormt CLI - A command-line tool for scanning Worm source files.
//!
//! This is the main entry point for the wormt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::{KeywordsArg, OutputFormat},
    CheckArgs, CheckCommand, TokenizeArgs, TokenizeCommand,
};
use config::Config;
use error::{Result, WormtError};

/// Wormt - A CLI tool for scanning Worm source files
///
/// Wormt prints the tokens of Worm programs and reports lexical problems
/// such as malformed numbers and unterminated strings.
#[derive(Parser, Debug)]
#[command(name = "wormt")]
#[command(author = "Worm Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for scanning Worm source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "WORMT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "WORMT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "WORMT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the wormt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of Worm source files
    ///
    /// Reads the given `.worm` files, or standard input when none is
    /// given, and prints one row per token.
    Tokenize(TokenizeOptions),

    /// Report lexical problems in Worm source files
    ///
    /// Prints every diagnostic with the offending source line and exits
    /// with status 1 if any was found.
    Check(CheckOptions),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeOptions {
    /// Source files to scan (default: standard input)
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Emit comments as tokens
    #[arg(long)]
    include_comments: bool,

    /// Reserved word set
    #[arg(short, long, value_enum)]
    keywords: Option<KeywordsArg>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<usize>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckOptions {
    /// Source files to check (default: standard input)
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Reserved word set
    #[arg(short, long, value_enum)]
    keywords: Option<KeywordsArg>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<usize>,
}

/// Main entry point for the wormt CLI.
///
/// Exits with 0 when every source scanned cleanly, 1 when lexical
/// diagnostics were reported and 2 on any other failure.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        },
    }
}

/// Initialize logging, load configuration and execute the command.
fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token or JSON output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| WormtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(opts) => {
            let args = TokenizeArgs {
                files: opts.files,
                format: opts.format,
                include_comments: opts.include_comments,
                keywords: opts.keywords,
                jobs: opts.jobs,
            };
            commands::run::<TokenizeCommand>(args, config)
        },
        Commands::Check(opts) => {
            let args = CheckArgs {
                files: opts.files,
                format: opts.format,
                keywords: opts.keywords,
                jobs: opts.jobs,
            };
            commands::run::<CheckCommand>(args, config)
        },
    }
}
