//! Brand-candidate tokens derived from a catalog entry.

use std::collections::BTreeSet;

use url::Url;

use crate::{CatalogEntry, MIN_TOKEN_LEN};

/// Generic words that show up in slugs and hostnames but never name a brand.
pub const STOPWORDS: &[&str] = &[
    "www",
    "com",
    "dev",
    "mcp",
    "server",
    "servers",
    "local",
    "ops",
    "search",
    "browser",
    "automation",
    "docs",
    "developer",
    "developers",
    "platform",
];

#[must_use]
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Lowercased hostname of `value`, or an empty string when it does not parse
/// as an absolute URL or carries no host.
#[must_use]
pub fn host_of(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    Url::parse(value)
        .ok()
        .and_then(|url| url.host_str().map(str::to_lowercase))
        .unwrap_or_default()
}

/// Maximal runs of ASCII lowercase letters and digits.
fn alnum_runs(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|run| !run.is_empty())
}

/// Collect candidate tokens from slug, name and the URL hostnames.
#[must_use]
pub fn collect_tokens(entry: &CatalogEntry) -> BTreeSet<String> {
    let slug = entry.slug.to_lowercase();
    let name = entry.name.to_lowercase();
    let hosts = [host_of(&entry.repo_url), host_of(&entry.server_url)];

    [slug.as_str(), name.as_str()]
        .into_iter()
        .chain(hosts.iter().map(String::as_str))
        .flat_map(alnum_runs)
        .filter(|token| token.len() >= MIN_TOKEN_LEN && !is_stopword(token))
        .map(str::to_string)
        .collect()
}
