//! Small filesystem helpers shared by every tool in the workspace.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Resolve `path` against `root` unless it is already absolute.
#[must_use]
pub fn resolve_path(root: &Path, path: impl AsRef<Path>) -> PathBuf {
    let candidate = path.as_ref();
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        root.join(candidate)
    }
}

/// Write `contents` to `path`, creating parent directories first.
/// Any existing file is overwritten.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::write(parent, e))?;
    }
    std::fs::write(path, contents).map_err(|e| Error::write(path, e))
}

/// Render `path` relative to `root` for display, falling back to the full path.
#[must_use]
pub fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_join_root() {
        let resolved = resolve_path(Path::new("/repo"), "docs/report.md");
        assert_eq!(resolved, PathBuf::from("/repo/docs/report.md"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let resolved = resolve_path(Path::new("/repo"), "/tmp/report.md");
        assert_eq!(resolved, PathBuf::from("/tmp/report.md"));
    }

    #[test]
    fn write_text_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/deeper/out.md");

        write_text(&target, "first").unwrap();
        write_text(&target, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "second");
    }

    #[test]
    fn display_relative_strips_root() {
        let shown = display_relative(Path::new("/repo"), Path::new("/repo/lib/server-logo.ts"));
        assert_eq!(shown, "lib/server-logo.ts");

        let outside = display_relative(Path::new("/repo"), Path::new("/etc/aliases.ts"));
        assert_eq!(outside, "/etc/aliases.ts");
    }
}
