//! Check command implementation.
//!
//! Scans each input and reports the position of every illegal token.

use std::path::PathBuf;

use linescan_lex::{tokenize, Token, TokenKind};
use tracing::{debug, info};

use crate::commands::common::{display_name, error_messages, read_source};
use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::error::{LsxError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Input files; `-` reads standard input.
    pub inputs: Vec<PathBuf>,
    /// Comment prefixes after CLI/config resolution.
    pub comment_prefixes: Vec<String>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Scans every input. The result data is the total number of illegal
    /// tokens and the warnings hold one diagnostic line per token.
    pub fn run(&self) -> Result<CommandResult<usize>> {
        if self.args.inputs.is_empty() {
            return Err(LsxError::Validation(error_messages::NO_INPUT_FILES.to_string()));
        }

        let mut diagnostics = Vec::new();
        let mut files_failed = 0;

        for input in &self.args.inputs {
            let name = display_name(input);
            let source = read_source(input)?;
            let tokens = tokenize(&source, &self.args.comment_prefixes);

            let before = diagnostics.len();
            diagnostics.extend(
                tokens
                    .iter()
                    .filter(|t| t.kind == TokenKind::Illegal)
                    .map(|t| format_diagnostic(&name, t)),
            );

            let illegal = diagnostics.len() - before;
            debug!(input = %name, tokens = tokens.len(), illegal, "checked input");
            if illegal > 0 {
                files_failed += 1;
            }
        }

        Ok(CommandResult::success(diagnostics.len())
            .with_items_processed(self.args.inputs.len())
            .with_items_failed(files_failed)
            .with_warnings(diagnostics))
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CommandResult<usize>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Report illegal tokens in inputs"
    }

    fn help() -> &'static str {
        "Scans each input and prints `path:line:column: illegal token` for \
         every character no token rule accepts. Fails if any are found."
    }
}

/// Formats one illegal token as `path:line:column: illegal token '...'`,
/// with one-based line and column.
pub fn format_diagnostic(name: &str, token: &Token) -> String {
    format!(
        "{}:{}:{}: illegal token '{}'",
        name,
        token.line + 1,
        token.start_column + 1,
        token.literal
    )
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let command = CheckCommand::new(args);
    debug!(command = CheckCommand::name(), "running command");

    let result = command.execute()?;
    for diagnostic in &result.warnings {
        eprintln!("{}", diagnostic);
    }

    if result.success {
        info!(files = result.items_processed, "no illegal tokens found");
        Ok(())
    } else {
        debug!(
            files = result.items_processed,
            failed = result.items_failed,
            "illegal tokens found"
        );
        Err(LsxError::IllegalTokens { count: result.data })
    }
}
