use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_collect::operation::ExecutableDocumentBuilder;
use libgraphql_collect::validation::validate_fragments;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL executable documents or \
             directories containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<String> = vec![];

        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let has_graphql_ext = entry_path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| graphql_file_exts.contains(ext));
                if has_graphql_ext {
                    log::trace!("Found GraphQL file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                } else {
                    num_skipped_files += 1;
                }
            }
        }

        // A single file passed explicitly is validated regardless of its
        // extension.
        let single_file_path = match self.file_or_dir_paths.as_slice() {
            [only_path] if file_paths.is_empty() && only_path.is_file() =>
                Some(only_path.to_owned()),
            _ => None,
        };
        if let Some(only_path) = single_file_path {
            log::warn!(
                "Proceeding to validate {only_path:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = 0;
            file_paths.push(only_path);
        }

        log::debug!(
            "Found {} GraphQL files to be validated.",
            file_paths.len(),
        );

        let mut stats = DocumentStats::default();
        for file_path in &file_paths {
            let content = match std::fs::read_to_string(file_path) {
                Ok(content) => content,
                Err(e) => {
                    errors.push(format!("{}: {e}", file_path.display()));
                    continue;
                },
            };

            match validate_document(Some(file_path.as_path()), &content) {
                Ok(doc_stats) => stats += doc_stats,
                Err(doc_errors) => errors.extend(doc_errors),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Found {} GraphQL validation errors:\n{}",
                output_utils::RED_X,
                errors.len(),
                errors.iter()
                    .map(|err| format!("  * {err}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} operations.\n",
                "  * Validated {} fragments.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped_files,
            stats.num_operations,
            stats.num_fragments,
        ))
    }
}

#[derive(Debug, Default, PartialEq)]
pub(crate) struct DocumentStats {
    pub num_fragments: usize,
    pub num_operations: usize,
}
impl std::ops::AddAssign for DocumentStats {
    fn add_assign(&mut self, rhs: Self) {
        self.num_fragments += rhs.num_fragments;
        self.num_operations += rhs.num_operations;
    }
}

/// Build and validate one executable document, rendering every error found
/// as `location: message`.
pub(crate) fn validate_document(
    file_path: Option<&Path>,
    content: &str,
) -> Result<DocumentStats, Vec<String>> {
    let doc = ExecutableDocumentBuilder::from_str(file_path, content)
        .map_err(|errors| {
            errors.iter().map(|err| match file_path {
                Some(file_path) => format!("{}: {err}", file_path.display()),
                None => err.to_string(),
            }).collect::<Vec<_>>()
        })?
        .build();

    validate_fragments(&doc).map_err(|errors| {
        errors.iter().map(|err| {
            let locations = err.locations().iter()
                .map(|location| location.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{locations}: {}", err.message())
        }).collect::<Vec<_>>()
    })?;

    Ok(DocumentStats {
        num_fragments: doc.fragment_registry().len(),
        num_operations: doc.operations().len(),
    })
}
