use crate::commands::CommandReport;
use crate::commands::check::discover_sdl_files;
use forgeql_core::Validator;
use forgeql_core::schema::SchemaBuilder;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    /// Paths to SDL files or directories that make up the schema to
    /// validate against.
    #[arg(long, required = true, short = 's')]
    pub(crate) schema: Vec<PathBuf>,

    /// Executable-document files to validate against the schema.
    #[arg(name = "DOCUMENT_PATHS", required = true)]
    pub(crate) document_paths: Vec<PathBuf>,
}

impl ValidateCmd {
    pub(crate) fn run(self, graphql_file_exts: &[String]) -> CommandReport {
        let schema_files = match discover_sdl_files(&self.schema, graphql_file_exts) {
            Ok(paths) => paths,
            Err(error) => return CommandReport::failure(format!("{error:#}")),
        };

        let schema = match SchemaBuilder::new()
            .load_files(&schema_files)
            .and_then(SchemaBuilder::build)
        {
            Ok(schema) => schema,
            Err(error) => {
                return CommandReport::failure(format!(
                    "Schema failed to build: {error}"
                ));
            }
        };
        log::debug!(
            "Built schema from {} SDL files; validating {} documents.",
            schema_files.len(),
            self.document_paths.len(),
        );

        let validator = Validator::new(&schema);
        let mut diagnostics: Vec<String> = vec![];
        for path in &self.document_paths {
            let source = match std::fs::read_to_string(path) {
                Ok(source) => source,
                Err(error) => {
                    diagnostics.push(format!("{}: {error}", path.display()));
                    continue;
                }
            };
            if let Err(error) = validator.validate_source(&source) {
                diagnostics.push(format!("{}: {error}", path.display()));
            }
        }

        if diagnostics.is_empty() {
            CommandReport::success(format!(
                "All {} documents validated successfully.",
                self.document_paths.len(),
            ))
        } else {
            CommandReport::Failure { diagnostics }
        }
    }
}
