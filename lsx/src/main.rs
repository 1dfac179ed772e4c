//! lsx - command-line host for the linescan scanner.
//!
//! Reads input files, resolves comment prefixes from the command line or a
//! config file, and prints or checks the resulting tokens.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::{resolve_prefixes, OutputFormat},
    run_check, run_tokens, CheckArgs, CheckCommand, TokensArgs, TokensCommand,
};
use commands::traits::CommandDescription;
use config::Config;
use error::{LsxError, Result};

/// lsx - scan source text into positioned tokens
#[derive(Parser, Debug)]
#[command(name = "lsx")]
#[command(author = "Linescan Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan source text into classified, positioned tokens", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LSX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LSX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LSX_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the lsx CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = TokensCommand::description(), long_about = TokensCommand::help())]
    Tokens(TokensOpts),

    #[command(about = CheckCommand::description(), long_about = CheckCommand::help())]
    Check(CheckOpts),
}

/// Comment prefix options shared by all scanning subcommands.
#[derive(Args, Debug)]
struct PrefixOpts {
    /// Comment prefix; repeat for several (replaces configured prefixes)
    #[arg(short = 'p', long = "comment-prefix", value_name = "PREFIX")]
    comment_prefix: Vec<String>,

    /// Disable comment-line skipping
    #[arg(long, conflicts_with = "comment_prefix")]
    no_comments: bool,
}

/// Arguments for the tokens subcommand.
#[derive(Args, Debug)]
struct TokensOpts {
    /// Input file, or `-` for standard input
    input: PathBuf,

    #[command(flatten)]
    prefixes: PrefixOpts,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
struct CheckOpts {
    /// Input files to check
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    #[command(flatten)]
    prefixes: PrefixOpts,
}

/// Main entry point for the lsx CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with token output on stdout.
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
        .map_err(|e| LsxError::Config(format!("Failed to initialize logging: {}", e)))?;

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
        Commands::Tokens(opts) => execute_tokens(opts, &config),
        Commands::Check(opts) => execute_check(opts, &config),
    }
}

/// Execute the tokens command.
fn execute_tokens(opts: TokensOpts, config: &Config) -> Result<()> {
    let tokens_args = TokensArgs {
        input: opts.input,
        comment_prefixes: resolve_prefixes(
            &opts.prefixes.comment_prefix,
            opts.prefixes.no_comments,
            config,
        ),
        format: opts.format.unwrap_or(config.output.format),
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(opts: CheckOpts, config: &Config) -> Result<()> {
    let check_args = CheckArgs {
        inputs: opts.inputs,
        comment_prefixes: resolve_prefixes(
            &opts.prefixes.comment_prefix,
            opts.prefixes.no_comments,
            config,
        ),
    };
    run_check(check_args)
}
