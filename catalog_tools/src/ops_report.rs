use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use catalog_core::fs::write_text;

/// Timestamped status note for the ops docs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpsReport {
    pub generated_at: DateTime<Utc>,
    pub root: PathBuf,
}

impl OpsReport {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            generated_at: Utc::now(),
            root: root.into(),
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "# Ops Report\n\n- Generated at: `{}`\n- Repo root: `{}`\n- Status: automation scaffold active\n",
            self.generated_at.to_rfc3339_opts(SecondsFormat::Micros, false),
            self.root.display()
        )
    }

    pub fn write(&self, path: &Path) -> catalog_core::Result<()> {
        write_text(path, &self.render())?;
        info!("Ops report written to {}", path.display());
        Ok(())
    }
}
