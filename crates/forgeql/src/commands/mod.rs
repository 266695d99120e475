mod check;
mod validate;

use check::CheckCmd;
use std::process::ExitCode;
use validate::ValidateCmd;

const GREEN_CHECK: &str = "\u{1b}[32m\u{2714}\u{1b}[0m";
const RED_X: &str = "\u{1b}[31m\u{2718}\u{1b}[0m";

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Command {
    /// Build and typecheck a schema from SDL files.
    Check(CheckCmd),
    /// Validate executable documents against a schema.
    Validate(ValidateCmd),
}

impl Command {
    pub(crate) fn run(self, graphql_file_exts: &[String]) -> CommandReport {
        match self {
            Command::Check(cmd) => cmd.run(graphql_file_exts),
            Command::Validate(cmd) => cmd.run(graphql_file_exts),
        }
    }
}

/// What a command run produced: a summary for stdout, or the diagnostics
/// that fail the process. Commands never print directly; they hand one of
/// these back so output and exit code stay in one place.
#[derive(Debug)]
pub(crate) enum CommandReport {
    Success { summary: String },
    Failure { diagnostics: Vec<String> },
}

impl CommandReport {
    pub(crate) fn success(summary: impl Into<String>) -> Self {
        CommandReport::Success {
            summary: summary.into(),
        }
    }

    pub(crate) fn failure(diagnostic: impl Into<String>) -> Self {
        CommandReport::Failure {
            diagnostics: vec![diagnostic.into()],
        }
    }

    /// Prints the report with its status mark and yields the process
    /// exit code.
    pub(crate) fn print(self) -> ExitCode {
        match self {
            CommandReport::Success { summary } => {
                println!("{GREEN_CHECK} {summary}");
                ExitCode::SUCCESS
            }
            CommandReport::Failure { diagnostics } => {
                for diagnostic in &diagnostics {
                    eprintln!("{RED_X} {diagnostic}");
                }
                ExitCode::FAILURE
            }
        }
    }
}
