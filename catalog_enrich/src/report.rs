use std::collections::BTreeMap;
use std::path::Path;

use catalog_core::CatalogEntry;
use catalog_core::fs::write_text;

const PLACEHOLDER: &str = "- No missing alias hints detected.";

/// Markdown summary of one enrichment run.
#[derive(Debug, Clone, Copy)]
pub struct EnrichReport<'a> {
    pub entries: &'a [CatalogEntry],
    pub alias_count: usize,
    /// Unresolved tokens keyed by entry file name.
    pub unresolved: &'a BTreeMap<String, Vec<String>>,
    /// Alias source as shown in the suggested next step.
    pub alias_source: &'a str,
}

impl EnrichReport<'_> {
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = vec![
            "# Catalog Enrichment Report".to_string(),
            String::new(),
            format!("- Entries scanned: `{}`", self.entries.len()),
            format!("- Known logo aliases: `{}`", self.alias_count),
            String::new(),
            "## Missing alias hints".to_string(),
            String::new(),
        ];

        let hints: Vec<String> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let tokens = self.unresolved.get(&entry.file_name)?;
                (!tokens.is_empty()).then(|| {
                    format!(
                        "- **{}** (`{}`): `{}`",
                        entry.file_name,
                        entry.name,
                        tokens.join(", ")
                    )
                })
            })
            .collect();

        if hints.is_empty() {
            lines.push(PLACEHOLDER.to_string());
        } else {
            lines.extend(hints);
        }

        lines.extend([
            String::new(),
            "## Suggested next step".to_string(),
            String::new(),
            format!(
                "Add missing aliases into `{}` (`simpleIconSlugByAlias`) for unresolved brand tokens.",
                self.alias_source
            ),
            String::new(),
        ]);

        lines.join("\n")
    }

    /// Render and write to `path`, replacing any previous report.
    pub fn write(&self, path: &Path) -> catalog_core::Result<()> {
        write_text(path, &self.render())
    }
}
