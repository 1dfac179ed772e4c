//! Tokens command implementation.
//!
//! Scans one input and prints every token it produces, end-of-input
//! included.

use std::io::Write;
use std::path::PathBuf;

use linescan_lex::{tokenize, Token};
use tracing::debug;

use crate::commands::common::{display_name, read_source, OutputFormat};
use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Input file, or `-` for standard input.
    pub input: PathBuf,
    /// Comment prefixes after CLI/config resolution.
    pub comment_prefixes: Vec<String>,
    /// Output format after CLI/config resolution.
    pub format: OutputFormat,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Scans the input and returns its tokens.
    pub fn run(&self) -> Result<CommandResult<Vec<Token>>> {
        let source = read_source(&self.args.input)?;
        let tokens = tokenize(&source, &self.args.comment_prefixes);

        debug!(
            input = %display_name(&self.args.input),
            tokens = tokens.len(),
            "scanned input"
        );

        Ok(CommandResult::success(tokens).with_items_processed(1))
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = CommandResult<Vec<Token>>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "Print the tokens of an input"
    }

    fn help() -> &'static str {
        "Scans a file (or standard input when the path is `-`) and prints \
         every token, one per line or as a JSON array."
    }
}

/// Renders tokens in the requested format, newline-terminated.
pub fn render_tokens(tokens: &[Token], format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Text => tokens
            .iter()
            .map(Token::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(tokens)?,
    };
    rendered.push('\n');
    Ok(rendered)
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let format = args.format;
    let command = TokensCommand::new(args);
    debug!(command = TokensCommand::name(), %format, "running command");

    let result = command.execute()?;
    let rendered = render_tokens(&result.data, format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
