//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input type, so the
//! binaries dispatch with plain static calls.

use std::path::{Path, PathBuf};

use anyhow::Context;
use catalog_config::{Config, find_root};

mod enrich;
mod grep;
mod info;
mod init;
mod ops_report;
mod version;

pub use enrich::{EnrichInput, EnrichStrategy};
pub use grep::{GrepInput, GrepStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use ops_report::{OpsReportInput, OpsReportStrategy};
pub use version::VersionStrategy;

/// Exit status reported by a successful command.
pub type ExitStatus = u8;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<ExitStatus> {
///         Ok(0)
///     }
/// }
/// ```
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// Errors abort the process; a non-zero status is an expected, reported
    /// failure such as a missing catalog directory.
    fn execute(&self, input: Self::Input) -> anyhow::Result<ExitStatus>;
}

/// Repository root plus the configuration that applies to it.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
}

impl Workspace {
    /// Resolve the root (explicit or discovered from the current directory)
    /// and load its config file, if any.
    pub fn load(root: Option<&Path>, config_path: Option<&Path>) -> anyhow::Result<Self> {
        let root = match root {
            Some(root) => std::path::absolute(root)
                .with_context(|| format!("Cannot resolve root {}", root.display()))?,
            None => {
                let cwd = std::env::current_dir().context("Cannot read current directory")?;
                find_root(&cwd)
            }
        };

        let config_path = match config_path {
            Some(path) => std::path::absolute(path)
                .with_context(|| format!("Cannot resolve config path {}", path.display()))?,
            None => Config::default_path(&root),
        };
        let config = Config::load(&config_path)?;

        Ok(Self {
            root,
            config_path,
            config,
        })
    }

    /// A workspace rooted at `root` with default configuration.
    #[must_use]
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_path: Config::default_path(&root),
            root,
            config: Config::default(),
        }
    }

    /// Path relative to the root for display, falling back to the full path.
    #[must_use]
    pub fn display(&self, path: &Path) -> String {
        catalog_core::fs::display_relative(&self.root, path)
    }
}
