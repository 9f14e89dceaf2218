use std::path::{Path, PathBuf};

use tracing::debug;

use crate::CONFIG_FILE_NAME;

/// Locate the repository root starting at `start`.
///
/// The nearest ancestor holding a `.git` entry or a config file wins; when
/// none is found `start` itself is the root.
#[must_use]
pub fn find_root(start: &Path) -> PathBuf {
    let found = start
        .ancestors()
        .find(|dir| dir.join(".git").exists() || dir.join(CONFIG_FILE_NAME).is_file());

    match found {
        Some(dir) => {
            debug!("Repository root: {}", dir.display());
            dir.to_path_buf()
        }
        None => {
            debug!(
                "No repository marker above {}, using it as root",
                start.display()
            );
            start.to_path_buf()
        }
    }
}
