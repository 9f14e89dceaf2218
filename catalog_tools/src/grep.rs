use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Finds files under a root whose text contains a literal needle, such as a
/// CSS class name.
#[derive(Debug, Clone)]
pub struct ClassGrep {
    root: PathBuf,
    needle: String,
    exclude_dirs: Vec<String>,
    file_glob: Option<glob::Pattern>,
}

impl ClassGrep {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, needle: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            needle: needle.into(),
            exclude_dirs: vec![".git".to_string(), ".next".to_string()],
            file_glob: None,
        }
    }

    /// Directory names skipped wherever they appear in the tree.
    #[must_use]
    pub fn with_exclude_dirs(mut self, exclude_dirs: Vec<String>) -> Self {
        self.exclude_dirs = exclude_dirs;
        self
    }

    /// Only search files whose name matches `pattern`, e.g. `*.tsx`.
    pub fn with_file_glob(mut self, pattern: &str) -> Result<Self, glob::PatternError> {
        self.file_glob = Some(glob::Pattern::new(pattern)?);
        Ok(self)
    }

    /// Walk the tree and return matching files, sorted.
    pub fn run(&self) -> std::io::Result<Vec<PathBuf>> {
        info!("Grep: {:?} in {}", self.needle, self.root.display());

        let mut results = Vec::new();
        grep_recursive(&self.root, self, &mut results)?;
        results.sort();

        debug!("Grep matched {} files", results.len());
        Ok(results)
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|dir| dir == name)
    }

    fn accepts_file(&self, name: &str) -> bool {
        self.file_glob
            .as_ref()
            .is_none_or(|pattern| pattern.matches(name))
    }
}

fn grep_recursive(
    dir: &Path,
    grep: &ClassGrep,
    results: &mut Vec<PathBuf>,
) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let entry_path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            if grep.is_excluded(&name) {
                continue;
            }
            // Unreadable subdirectories are skipped, not fatal.
            if let Err(e) = grep_recursive(&entry_path, grep, results) {
                warn!("Skipping {}: {e}", entry_path.display());
            }
        } else if entry_path.is_file()
            && grep.accepts_file(&name)
            && file_contains(&entry_path, &grep.needle)
        {
            results.push(entry_path);
        }
    }
    Ok(())
}

fn file_contains(path: &Path, needle: &str) -> bool {
    let Ok(content) = std::fs::read_to_string(path) else {
        return false; // Skip binary / unreadable files
    };
    content.contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_grep_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("components/ui")).unwrap();
        std::fs::create_dir_all(root.join(".next/static")).unwrap();
        std::fs::create_dir_all(root.join("app/.git")).unwrap();

        std::fs::write(
            root.join("components/ui/card.tsx"),
            "<div className=\"rounded bg-white p-4\" />\n",
        )
        .unwrap();
        std::fs::write(
            root.join("components/ui/badge.tsx"),
            "<span className=\"bg-slate-900\" />\n",
        )
        .unwrap();
        std::fs::write(root.join("styles.css"), ".panel { @apply bg-white; }\n").unwrap();
        std::fs::write(root.join(".next/static/chunk.js"), "bg-white").unwrap();
        std::fs::write(root.join("app/.git/HEAD"), "bg-white").unwrap();
        std::fs::write(root.join("logo.png"), [0xff, 0xfe, b'b', b'g', 0x00, 0xc3]).unwrap();
        dir
    }

    #[test]
    fn finds_matching_files_sorted() {
        let dir = setup_grep_dir();
        let found = ClassGrep::new(dir.path(), "bg-white").run().unwrap();
        assert_eq!(
            found,
            vec![
                dir.path().join("components/ui/card.tsx"),
                dir.path().join("styles.css"),
            ]
        );
    }

    #[test]
    fn excluded_directories_are_skipped_at_any_depth() {
        let dir = setup_grep_dir();
        let found = ClassGrep::new(dir.path(), "bg-white").run().unwrap();
        assert!(found.iter().all(|p| !p.to_string_lossy().contains(".next")));
        assert!(found.iter().all(|p| !p.to_string_lossy().contains(".git")));

        let everything = ClassGrep::new(dir.path(), "bg-white")
            .with_exclude_dirs(Vec::new())
            .run()
            .unwrap();
        assert_eq!(everything.len(), 4);
    }

    #[test]
    fn glob_filters_file_names() {
        let dir = setup_grep_dir();
        let found = ClassGrep::new(dir.path(), "bg-white")
            .with_file_glob("*.tsx")
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(found, vec![dir.path().join("components/ui/card.tsx")]);
    }

    #[test]
    fn invalid_glob_is_rejected() {
        assert!(ClassGrep::new(".", "bg-white").with_file_glob("[").is_err());
    }

    #[test]
    fn no_matches_is_empty() {
        let dir = setup_grep_dir();
        let found = ClassGrep::new(dir.path(), "zzzzzzz").run().unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ClassGrep::new(dir.path().join("nope"), "bg-white").run().is_err());
    }
}
