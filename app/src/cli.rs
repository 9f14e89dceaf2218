//! Arguments shared by the `catalog-tools` and `catalog_enrich` binaries.

use std::path::PathBuf;

use clap::Args;

use crate::command::Workspace;
use crate::logging::init_tracing;

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Repository root (default: nearest ancestor with `.git` or a config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Config file (default: `<root>/catalog-tools.json`)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Resolve the workspace, then install logging at the configured level.
    pub fn init(&self) -> anyhow::Result<Workspace> {
        let workspace = Workspace::load(self.root.as_deref(), self.config.as_deref())?;
        init_tracing(&workspace.config.logging.level, self.verbose)?;
        tracing::debug!("Workspace root: {}", workspace.root.display());
        Ok(workspace)
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct EnrichArgs {
    /// Only print suggestions; do not rewrite entry files
    #[arg(long)]
    pub dry_run: bool,

    /// Output markdown report path, relative to the root unless absolute
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}
