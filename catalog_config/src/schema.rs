use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use catalog_core::fs::{resolve_path, write_text};

use crate::{ConfigError, Result};

/// Name of the optional config file at the repository root.
pub const CONFIG_FILE_NAME: &str = "catalog-tools.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub grep: GrepConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Locations of the files the tools read and write, relative to the root
/// unless absolute.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    #[serde(default = "PathsConfig::default_catalog_dir")]
    pub catalog_dir: PathBuf,
    #[serde(default = "PathsConfig::default_alias_source")]
    pub alias_source: PathBuf,
    #[serde(default = "PathsConfig::default_enrich_report")]
    pub enrich_report: PathBuf,
    #[serde(default = "PathsConfig::default_ops_report")]
    pub ops_report: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            catalog_dir: Self::default_catalog_dir(),
            alias_source: Self::default_alias_source(),
            enrich_report: Self::default_enrich_report(),
            ops_report: Self::default_ops_report(),
        }
    }
}

impl PathsConfig {
    fn default_catalog_dir() -> PathBuf {
        PathBuf::from("content/catalog/entries")
    }

    fn default_alias_source() -> PathBuf {
        PathBuf::from("lib/server-logo.ts")
    }

    fn default_enrich_report() -> PathBuf {
        PathBuf::from("docs/catalog-enrich-report.md")
    }

    fn default_ops_report() -> PathBuf {
        PathBuf::from("docs/ops-report.md")
    }

    #[must_use]
    pub fn catalog_dir(&self, root: &Path) -> PathBuf {
        resolve_path(root, &self.catalog_dir)
    }

    #[must_use]
    pub fn alias_source(&self, root: &Path) -> PathBuf {
        resolve_path(root, &self.alias_source)
    }

    #[must_use]
    pub fn enrich_report(&self, root: &Path) -> PathBuf {
        resolve_path(root, &self.enrich_report)
    }

    #[must_use]
    pub fn ops_report(&self, root: &Path) -> PathBuf {
        resolve_path(root, &self.ops_report)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GrepConfig {
    /// Literal text searched for when no pattern is given on the command line.
    #[serde(default = "GrepConfig::default_pattern")]
    pub pattern: String,
    /// Directory names skipped at any depth.
    #[serde(default = "GrepConfig::default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

impl Default for GrepConfig {
    fn default() -> Self {
        Self {
            pattern: Self::default_pattern(),
            exclude_dirs: Self::default_exclude_dirs(),
        }
    }
}

impl GrepConfig {
    fn default_pattern() -> String {
        "bg-white".to_string()
    }

    fn default_exclude_dirs() -> Vec<String> {
        vec![".git".to_string(), ".next".to_string()]
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default `tracing` filter, overridden by `RUST_LOG` and `--verbose`.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "paths": {
    "catalog_dir": "content/catalog/entries",
    "alias_source": "lib/server-logo.ts",
    "enrich_report": "docs/catalog-enrich-report.md",
    "ops_report": "docs/ops-report.md"
  },
  "grep": {
    "pattern": "bg-white",
    "exclude_dirs": [".git", ".next"]
  },
  "logging": {
    "level": "info"
  }
}
"#;

impl Config {
    /// Default config location for a repository root.
    #[must_use]
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    /// Load the config at `path`. A missing file means all defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Write the config template to `path`, refusing to overwrite.
    pub fn create_config(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }

        write_text(path, CONFIG_TEMPLATE)?;
        info!("Created config file at {}", path.display());
        Ok(())
    }
}
