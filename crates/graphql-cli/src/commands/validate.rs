use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t = ["graphql".to_string(), "graphqls".to_string()],
        help = "Set of file extensions to filter to when searching for files within a directory.",
        long,
        value_delimiter = ','
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help = "Paths to one or more GraphQL SDL files or directories containing GraphQL SDL files which need to be validated.",
        name = "FILE_OR_DIR_PATHS",
        required = true
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter().map(|ext| if ext.starts_with('.') { ext.clone() } else { format!(".{ext}") }).collect();

        tracing::debug!("Scanning {} input paths...", self.file_or_dir_paths.len());
        let mut num_non_graphql_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        tracing::trace!("Encountered an error while walking {path:?}: {e}");
                        continue;
                    }
                };
                if !entry.file_type().is_file() {
                    continue;
                }
                let matches_ext = entry.path().extension().map(|ext| graphql_file_exts.contains(&format!(".{}", ext.to_string_lossy()))).unwrap_or(false);
                if matches_ext {
                    file_paths.push(entry.path().to_path_buf());
                } else {
                    num_non_graphql_files += 1;
                }
            }
        }

        if file_paths.is_empty() && self.file_or_dir_paths.len() == 1 {
            if let Some(first) = self.file_or_dir_paths.first() {
                if first.is_file() {
                    tracing::warn!(
                        "Proceeding to validate {first:?} even though it doesn't match any of the --graphql-file-exts ({}).",
                        graphql_file_exts.iter().map(|ext| format!("`{ext}`")).collect::<Vec<_>>().join(", "),
                    );
                    file_paths.push(first.clone());
                }
            }
        }

        tracing::debug!("Found {} GraphQL files to be validated.", file_paths.len());

        let mut sdl = String::new();
        for path in &file_paths {
            match std::fs::read_to_string(path) {
                Ok(body) => {
                    sdl.push_str(&body);
                    sdl.push('\n');
                }
                Err(e) => return CommandResult::stderr(format_args!("{} Could not read {path:?}: {e}", output_utils::RED_X)),
            }
        }

        let schema = match graphql::build_schema(&sdl) {
            Ok(schema) => schema,
            Err(e) => return CommandResult::stderr(format_args!("{} GraphQL schema error: {e:#?}", output_utils::RED_X)),
        };

        let validation_errors = schema.validate();
        if !validation_errors.is_empty() {
            return CommandResult::stderr(format_args!("{} GraphQL schema validation errors: {validation_errors:#?}", output_utils::RED_X));
        }

        CommandResult::ok(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} type definitions.\n",
                "  * Validated {} directive definitions.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_non_graphql_files,
            schema.type_map.len(),
            schema.directives.len(),
        ))
    }
}
