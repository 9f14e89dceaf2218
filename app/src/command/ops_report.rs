use std::path::PathBuf;

use catalog_core::fs::resolve_path;
use catalog_tools::OpsReport;

use super::{ExitStatus, Workspace};

/// Input parameters for the OpsReport command strategy.
#[derive(Debug, Clone)]
pub struct OpsReportInput {
    pub workspace: Workspace,
    /// Output path override, relative to the root unless absolute
    pub output: Option<PathBuf>,
}

/// Strategy for writing the timestamped ops status report.
#[derive(Debug, Clone, Copy)]
pub struct OpsReportStrategy;

impl super::CommandStrategy for OpsReportStrategy {
    type Input = OpsReportInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<ExitStatus> {
        let workspace = &input.workspace;
        let output = input.output.as_ref().map_or_else(
            || workspace.config.paths.ops_report(&workspace.root),
            |path| resolve_path(&workspace.root, path),
        );

        OpsReport::new(&workspace.root).write(&output)?;
        println!("wrote: {}", output.display());

        Ok(0)
    }
}
