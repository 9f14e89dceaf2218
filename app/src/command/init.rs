use catalog_config::Config;

use super::{ExitStatus, Workspace};

/// Strategy for initializing the configuration.
///
/// Writes the default config template to the workspace config path. An
/// existing file is left untouched and reported as an error.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = Workspace;

    fn execute(&self, workspace: Self::Input) -> anyhow::Result<ExitStatus> {
        Config::create_config(&workspace.config_path)?;

        println!("Created config file at: {}", workspace.config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Point paths.catalog_dir and paths.alias_source at your site layout");
        println!("   2. Run 'catalog-tools enrich --dry-run' to preview tag changes");
        println!("   3. Run 'catalog-tools enrich' to rewrite entries and the report");
        Ok(0)
    }
}
