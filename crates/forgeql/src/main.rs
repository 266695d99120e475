mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() -> std::process::ExitCode {
    let Cli {
        command,
        graphql_file_exts,
        verbose,
    } = Cli::parse();

    init_logging(verbose);
    command.run(&graphql_file_exts).print()
}

/// Command results go to stdout/stderr through the report itself; the
/// subscriber only carries the run's tracing, so it stays at warn unless
/// `-v` asks for the debug trail.
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
    log::debug!("Logging initialized at `{level}`.");
}
