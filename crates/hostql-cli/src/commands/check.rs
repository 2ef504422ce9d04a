use crate::Outcome;
use crate::commands::RunCommand;
use anyhow::Context;
use hostql::operation::ExecutableDocument;
use hostql::parser::ast;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
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
    query_file_exts: Vec<String>,

    #[arg(
        help="Print the parsed documents as JSON instead of a summary.",
        long,
    )]
    emit_ast: bool,

    #[arg(
        help="Paths to one or more query documents or directories containing \
             query documents which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// What checking one query document found.
#[derive(Debug, Default)]
pub(super) struct FileReport {
    pub document: Option<ast::Document>,
    pub errors: Vec<String>,
    pub fragments: usize,
    pub operations: usize,
}

#[inherent::inherent]
impl RunCommand for CheckCmd {
    pub async fn run(self) -> Outcome {
        let mut errors: Vec<String> = vec![];
        let query_file_exts = normalize_exts(&self.query_file_exts);

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        let matches_ext = path
                            .extension()
                            .is_some_and(|ext| query_file_exts.contains(&*ext.to_string_lossy()));
                        if matches_ext {
                            log::trace!("Found query document at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            num_skipped += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                    },
                }
            }
        }

        // A single file argument is checked even when its extension is not
        // one of `query_file_exts`.
        if file_paths.is_empty() && self.file_or_dir_paths.len() == 1 {
            if let Some(first_arg_path) = self.file_or_dir_paths.first() {
                if first_arg_path.is_file() {
                    log::warn!(
                        "Proceeding to check {first_arg_path:#?} even though it \
                        doesn't match any of the --query-file-exts ({}).",
                        query_file_exts.iter()
                            .map(|ext| format!("`.{ext}`"))
                            .collect::<Vec<_>>()
                            .join(", "),
                    );
                    num_skipped = 0;
                    file_paths.push(first_arg_path.clone());
                }
            }
        }

        log::debug!("Found {} query documents to be checked.", file_paths.len());

        let mut num_operations = 0;
        let mut num_fragments = 0;
        let mut documents = serde_json::Map::new();
        for path in &file_paths {
            let source = match read_document(path).await {
                Ok(source) => source,
                Err(e) => {
                    errors.push(format!("{e:#}"));
                    continue;
                },
            };
            let report = check_source(path, &source);
            num_operations += report.operations;
            num_fragments += report.fragments;
            errors.extend(report.errors);
            if self.emit_ast {
                if let Some(document) = report.document {
                    match serde_json::to_value(&document) {
                        Ok(value) => {
                            documents.insert(path.display().to_string(), value);
                        },
                        Err(e) => errors.push(format!("{}: {e}", path.display())),
                    }
                }
            }
        }

        if !errors.is_empty() {
            return Outcome::failed(format_args!(
                "{} problems found in query documents:\n\n{}",
                errors.len(),
                errors.join("\n"),
            ));
        }

        if self.emit_ast {
            return match serde_json::to_string_pretty(&documents) {
                Ok(json) => Outcome::output(json),
                Err(e) => Outcome::failed(format_args!("Failed to serialize documents: {e}")),
            };
        }

        Outcome::passed(format_args!(
            concat!(
                "All query documents checked successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} files with other extensions.\n",
                "  * Checked {} operations.\n",
                "  * Checked {} fragments.",
            ),
            file_paths.len(),
            num_skipped,
            num_operations,
            num_fragments,
        ))
    }
}

pub(super) async fn read_document(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("{}: could not be read", path.display()))
}

/// Lowercases extensions and strips any leading `.`.
pub(super) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Parses and validates one query document.
pub(super) fn check_source(path: &Path, source: &str) -> FileReport {
    let mut report = FileReport::default();
    let document = match hostql::parser::parse_query(source) {
        Ok(document) => document,
        Err(parse_errors) => {
            report.errors = parse_errors
                .iter()
                .map(|err| format!("{}: {}", path.display(), err.format_detailed(source)))
                .collect();
            return report;
        },
    };

    report.operations = document.operations().count();
    report.fragments = document
        .definitions
        .iter()
        .filter(|definition| matches!(definition, ast::Definition::Fragment(_)))
        .count();

    match ExecutableDocument::from_ast(document) {
        Ok(executable) => report.document = Some(executable.document().clone()),
        Err(document_errors) => {
            report.errors = document_errors
                .iter()
                .map(|err| match err.position() {
                    Some(position) => format!("{}:{position}: {err}", path.display()),
                    None => format!("{}: {err}", path.display()),
                })
                .collect();
        },
    }
    report
}
