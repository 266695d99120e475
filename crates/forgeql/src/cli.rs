use crate::commands::Command;

/// The command-line surface of the toolchain: `check` builds and
/// typechecks a schema from SDL files, `validate` checks executable
/// documents against one. Flags shared by every command live here.
#[derive(clap::Parser, Debug)]
#[command(
    name = "forgeql",
    version,
    subcommand_required = true,
    arg_required_else_help = true,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,

    /// File extensions treated as SDL when scanning a directory.
    #[arg(
        default_values_t = ["graphql".to_string(), "graphqls".to_string()],
        global = true,
        long,
        value_delimiter = ',',
    )]
    pub(crate) graphql_file_exts: Vec<String>,

    /// Enable debug logging.
    #[arg(global = true, long, short = 'v')]
    pub(crate) verbose: bool,
}
