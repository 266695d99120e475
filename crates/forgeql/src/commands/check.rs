use crate::commands::CommandReport;
use anyhow::Context;
use forgeql_core::schema::Schema;
use forgeql_core::schema::SchemaBuilder;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    /// Paths to SDL files, or directories to scan for them.
    #[arg(name = "FILE_OR_DIR_PATHS", required = true)]
    pub(crate) paths: Vec<PathBuf>,
}

impl CheckCmd {
    pub(crate) fn run(self, graphql_file_exts: &[String]) -> CommandReport {
        let file_paths = match discover_sdl_files(&self.paths, graphql_file_exts) {
            Ok(paths) => paths,
            Err(error) => return CommandReport::failure(format!("{error:#}")),
        };
        log::debug!("Found {} SDL files to load.", file_paths.len());

        match SchemaBuilder::new()
            .load_files(&file_paths)
            .and_then(SchemaBuilder::build)
        {
            Ok(schema) => {
                let user_types = schema
                    .types()
                    .values()
                    .filter(|t| !t.is_introspection && !Schema::is_builtin_scalar(&t.name))
                    .count();
                CommandReport::success(format!(
                    "Schema checked: {} SDL files, {} type definitions, \
                     {} directive definitions.",
                    file_paths.len(),
                    user_types,
                    schema.directives().len(),
                ))
            }

            Err(error) => {
                CommandReport::failure(format!("Schema check failed: {error}"))
            }
        }
    }
}

/// Finds SDL files recursively located at or under each given path,
/// filtered by extension. A single explicitly named file is loaded even
/// when its extension doesn't match.
pub(crate) fn discover_sdl_files(
    file_or_dir_paths: &[PathBuf],
    graphql_file_exts: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    let graphql_file_exts: HashSet<String> = graphql_file_exts
        .iter()
        .map(|ext| ext.trim_start_matches('.').to_string())
        .collect();

    log::debug!("Scanning {} input paths...", file_or_dir_paths.len());
    let mut file_paths = vec![];
    for path in file_or_dir_paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = entry
                .with_context(|| format!("error scanning {}", path.display()))?;
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {:#?}.", entry.path());
                continue;
            }
            if has_matching_extension(entry.path(), &graphql_file_exts) {
                log::trace!("Found SDL file at {:#?}.", entry.path());
                file_paths.push(entry.path().to_path_buf());
            }
        }
    }

    if file_paths.is_empty()
        && file_or_dir_paths.len() == 1
        && let Some(first_arg_path) = file_or_dir_paths.first()
        && first_arg_path.is_file()
    {
        log::warn!(
            "Proceeding to load {:#?} even though it doesn't match any of \
            the --graphql-file-exts.",
            first_arg_path,
        );
        file_paths.push(first_arg_path.clone());
    }

    anyhow::ensure!(
        !file_paths.is_empty(),
        "no SDL files found at the given paths"
    );
    Ok(file_paths)
}

fn has_matching_extension(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .is_some_and(|ext| extensions.contains(&ext))
}
