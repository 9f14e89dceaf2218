use std::path::PathBuf;

use catalog_core::fs::resolve_path;
use catalog_enrich::{EnrichOptions, EnrichOutcome};
use tracing::info;

use super::{ExitStatus, Workspace};

/// Input parameters for the Enrich command strategy.
#[derive(Debug, Clone)]
pub struct EnrichInput {
    pub workspace: Workspace,
    /// Compute and report without rewriting entry files
    pub dry_run: bool,
    /// Report path override, relative to the root unless absolute
    pub report: Option<PathBuf>,
}

/// Strategy for the catalog enrichment pass.
///
/// Normalizes entry tags (unless dry-run), collects brand tokens without a
/// logo alias and writes the markdown report. Exits with 1 when the catalog
/// directory is missing.
#[derive(Debug, Clone, Copy)]
pub struct EnrichStrategy;

impl super::CommandStrategy for EnrichStrategy {
    type Input = EnrichInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<ExitStatus> {
        let workspace = &input.workspace;
        let paths = &workspace.config.paths;
        let alias_source = paths.alias_source(&workspace.root);

        let options = EnrichOptions {
            catalog_dir: paths.catalog_dir(&workspace.root),
            alias_source_label: workspace.display(&alias_source),
            alias_source,
            report_path: input.report.as_ref().map_or_else(
                || paths.enrich_report(&workspace.root),
                |report| resolve_path(&workspace.root, report),
            ),
            dry_run: input.dry_run,
        };
        info!(
            "Enriching catalog at {} (dry run: {})",
            options.catalog_dir.display(),
            options.dry_run
        );

        let outcome = catalog_enrich::run(&options)?;
        match &outcome {
            EnrichOutcome::MissingCatalog(dir) => {
                println!("catalog directory not found: {}", dir.display());
            }
            EnrichOutcome::Completed(summary) => {
                println!("scanned files: {}", summary.scanned);
                println!("known aliases: {}", summary.aliases);
                for file_name in &summary.normalized_files {
                    println!("normalized tags -> {file_name}");
                }
                println!("report -> {}", summary.report_path.display());
                if summary.dry_run {
                    println!("dry-run complete. potential changes: {}", summary.changed);
                } else {
                    println!("write complete. changed files: {}", summary.changed);
                }
            }
        }

        Ok(outcome.exit_code())
    }
}
