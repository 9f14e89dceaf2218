use anyhow::Context;
use catalog_tools::ClassGrep;

use super::{ExitStatus, Workspace};

/// Input parameters for the Grep command strategy.
#[derive(Debug, Clone)]
pub struct GrepInput {
    pub workspace: Workspace,
    /// Literal text to look for (default: the configured pattern)
    pub pattern: Option<String>,
    /// File name glob, e.g. `*.tsx`
    pub glob: Option<String>,
}

/// Strategy for finding files that still use a CSS class.
///
/// Prints one matching path per line, relative to the root.
#[derive(Debug, Clone, Copy)]
pub struct GrepStrategy;

impl super::CommandStrategy for GrepStrategy {
    type Input = GrepInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<ExitStatus> {
        let workspace = &input.workspace;
        let grep_config = &workspace.config.grep;
        let pattern = input
            .pattern
            .unwrap_or_else(|| grep_config.pattern.clone());

        let mut grep = ClassGrep::new(&workspace.root, pattern)
            .with_exclude_dirs(grep_config.exclude_dirs.clone());
        if let Some(glob) = &input.glob {
            grep = grep
                .with_file_glob(glob)
                .with_context(|| format!("Invalid file glob: {glob}"))?;
        }

        let matches = grep
            .run()
            .with_context(|| format!("Search failed under {}", workspace.root.display()))?;
        for path in &matches {
            println!("{}", workspace.display(path));
        }

        Ok(0)
    }
}
