//! Known logo aliases scraped from the site's logo source file.
//!
//! The source is not parsed as TypeScript. Every line shaped like
//! `openai: "openai",` contributes one alias and everything else is ignored,
//! so the scrape keeps working while the surrounding file changes.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::{Error, Result};

static ALIAS_LINE: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn alias_line() -> &'static Regex {
    ALIAS_LINE.get_or_init(|| {
        Regex::new(r#"^\s*([A-Za-z0-9_-]+)\s*:\s*"([^"]+)"\s*,?\s*$"#)
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Mapping from lowercase alias token to canonical logo identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: BTreeMap<String, String>,
}

impl AliasTable {
    /// Load aliases from `path`. A missing file yields an empty table.
    pub fn load(path: &Path) -> Result<Self> {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Alias source not found: {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::read(path, e)),
        };

        let table = Self::parse(&source);
        debug!("Loaded {} aliases from {}", table.len(), path.display());
        Ok(table)
    }

    /// Scrape `key: "value"` lines. The last occurrence of a key wins.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let aliases = source
            .lines()
            .filter_map(|line| alias_line().captures(line))
            .filter_map(|caps| {
                let key = caps.get(1)?.as_str().to_lowercase();
                let value = caps.get(2)?.as_str().to_string();
                Some((key, value))
            })
            .collect();
        Self { aliases }
    }

    /// Whether `token` has a known alias, ignoring case.
    #[must_use]
    pub fn resolves(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    #[must_use]
    pub fn get(&self, token: &str) -> Option<&str> {
        self.aliases
            .get(token.to_lowercase().as_str())
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            aliases: iter
                .into_iter()
                .map(|(k, v)| (k.into().to_lowercase(), v.into()))
                .collect(),
        }
    }
}
