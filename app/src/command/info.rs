use std::path::Path;

use catalog_core::AliasTable;

use super::{ExitStatus, Workspace};

/// Strategy for displaying the effective configuration.
///
/// Shows the resolved root, where the config came from, every configured
/// path with whether it exists, and the grep and logging settings.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = Workspace;

    fn execute(&self, workspace: Self::Input) -> anyhow::Result<ExitStatus> {
        let root = &workspace.root;
        let paths = &workspace.config.paths;

        println!("=== catalog-tools Configuration ===\n");

        println!("Root: {}", root.display());
        let source = if workspace.config_path.is_file() {
            "loaded"
        } else {
            "not found, using defaults"
        };
        println!("Config: {} ({source})", workspace.config_path.display());
        println!();

        println!("Paths:");
        let catalog_dir = paths.catalog_dir(root);
        println!("  Catalog Dir: {}", describe(&workspace, &catalog_dir));
        let alias_source = paths.alias_source(root);
        println!("  Alias Source: {}", describe(&workspace, &alias_source));
        if alias_source.is_file() {
            let aliases = AliasTable::load(&alias_source)?;
            println!("    Known Aliases: {}", aliases.len());
        }
        println!(
            "  Enrich Report: {}",
            describe(&workspace, &paths.enrich_report(root))
        );
        println!(
            "  Ops Report: {}",
            describe(&workspace, &paths.ops_report(root))
        );
        println!();

        println!("Grep:");
        println!("  Pattern: {}", workspace.config.grep.pattern);
        if workspace.config.grep.exclude_dirs.is_empty() {
            println!("  Exclude Dirs: (none)");
        } else {
            println!(
                "  Exclude Dirs: {}",
                workspace.config.grep.exclude_dirs.join(", ")
            );
        }
        println!();

        println!("Logging:");
        println!("  Level: {}", workspace.config.logging.level);

        Ok(0)
    }
}

fn describe(workspace: &Workspace, path: &Path) -> String {
    let status = if path.exists() { "" } else { " (missing)" };
    format!("{}{status}", workspace.display(path))
}
