use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use catalog_core::{AliasTable, CatalogEntry, MAX_HINTS_PER_ENTRY, collect_tokens};
use tracing::{debug, info, warn};

use crate::{EnrichReport, Result};

/// Inputs of a single enrichment run. All paths are already resolved.
#[derive(Debug, Clone)]
pub struct EnrichOptions {
    pub catalog_dir: PathBuf,
    pub alias_source: PathBuf,
    pub report_path: PathBuf,
    /// How the alias source is named in the report.
    pub alias_source_label: String,
    /// Compute and report without rewriting entry files.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichSummary {
    pub scanned: usize,
    pub aliases: usize,
    /// Entries whose tags differ from their normalized form. In dry-run mode
    /// this counts files that would change.
    pub changed: usize,
    pub normalized_files: Vec<String>,
    pub unresolved: BTreeMap<String, Vec<String>>,
    pub report_path: PathBuf,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichOutcome {
    Completed(EnrichSummary),
    /// The catalog directory does not exist; nothing was written.
    MissingCatalog(PathBuf),
}

impl EnrichOutcome {
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Completed(_) => 0,
            Self::MissingCatalog(_) => 1,
        }
    }
}

/// All `*.json` files directly inside `dir`, sorted by path.
pub fn discover_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped).join("*.json");

    let mut files = Vec::new();
    for path in glob::glob(&pattern.to_string_lossy())? {
        let path = path?;
        if path.is_file() {
            files.push(path);
        } else {
            debug!("Skipping non-file match: {}", path.display());
        }
    }
    files.sort();
    Ok(files)
}

/// Sorted tokens of `entry` without a known alias, capped per entry.
#[must_use]
pub fn unresolved_tokens(entry: &CatalogEntry, aliases: &AliasTable) -> Vec<String> {
    collect_tokens(entry)
        .into_iter()
        .filter(|token| !aliases.resolves(token))
        .take(MAX_HINTS_PER_ENTRY)
        .collect()
}

/// Run the enrichment pass described by `options`.
///
/// A malformed entry aborts the run before the report is written.
pub fn run(options: &EnrichOptions) -> Result<EnrichOutcome> {
    if !options.catalog_dir.is_dir() {
        warn!(
            "Catalog directory not found: {}",
            options.catalog_dir.display()
        );
        return Ok(EnrichOutcome::MissingCatalog(options.catalog_dir.clone()));
    }

    let aliases = AliasTable::load(&options.alias_source)?;
    let files = discover_entries(&options.catalog_dir)?;
    info!(
        "Scanning {} entries with {} known aliases",
        files.len(),
        aliases.len()
    );

    let mut entries = Vec::with_capacity(files.len());
    let mut unresolved = BTreeMap::new();
    let mut normalized_files = Vec::new();

    for path in &files {
        let mut entry = CatalogEntry::read(path)?;

        if entry.normalize_tags() {
            if !options.dry_run {
                entry.write(path)?;
            }
            debug!("Normalized tags -> {}", entry.file_name);
            normalized_files.push(entry.file_name.clone());
        }

        let missing = unresolved_tokens(&entry, &aliases);
        if !missing.is_empty() {
            debug!("{}: unresolved {:?}", entry.file_name, missing);
            unresolved.insert(entry.file_name.clone(), missing);
        }

        entries.push(entry);
    }

    EnrichReport {
        entries: &entries,
        alias_count: aliases.len(),
        unresolved: &unresolved,
        alias_source: &options.alias_source_label,
    }
    .write(&options.report_path)?;
    info!("Report written to {}", options.report_path.display());

    Ok(EnrichOutcome::Completed(EnrichSummary {
        scanned: entries.len(),
        aliases: aliases.len(),
        changed: normalized_files.len(),
        normalized_files,
        unresolved,
        report_path: options.report_path.clone(),
        dry_run: options.dry_run,
    }))
}
