//! Catalog entry records, one JSON object per file.

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::tags::normalize_tags;
use crate::{Error, Result};

/// Typed view over the keys the tools care about. Missing or `null` keys
/// fall back to empty values; other scalars are read as their JSON text.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct EntryFields {
    #[serde(deserialize_with = "lenient_text")]
    slug: String,
    #[serde(deserialize_with = "lenient_text")]
    name: String,
    #[serde(deserialize_with = "lenient_text")]
    repo_url: String,
    #[serde(deserialize_with = "lenient_text")]
    server_url: String,
    #[serde(deserialize_with = "lenient_tags")]
    tags: Vec<String>,
}

fn text_of(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .map(text_of)
        .unwrap_or_default())
}

/// `tags` must be an array (or `null`); its items may be any JSON value.
fn lenient_tags<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(text_of)
        .collect())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogEntry {
    /// File name of the record, e.g. `linear.json`.
    pub file_name: String,
    pub slug: String,
    pub name: String,
    pub repo_url: String,
    pub server_url: String,
    pub tags: Vec<String>,
    /// The full JSON object as read, so rewrites keep unknown keys and their order.
    pub document: Map<String, Value>,
}

impl CatalogEntry {
    /// Parse the JSON `source` of the record stored at `path`.
    pub fn parse(path: &Path, source: &str) -> Result<Self> {
        let malformed = |source| Error::MalformedEntry {
            path: path.to_path_buf(),
            source,
        };

        let document = match serde_json::from_str::<Value>(source).map_err(malformed)? {
            Value::Object(document) => document,
            _ => {
                return Err(Error::NotAnObject {
                    path: path.to_path_buf(),
                });
            }
        };
        let fields: EntryFields =
            serde_json::from_value(Value::Object(document.clone())).map_err(malformed)?;

        Ok(Self {
            file_name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            slug: fields.slug,
            name: fields.name,
            repo_url: fields.repo_url,
            server_url: fields.server_url,
            tags: fields.tags,
            document,
        })
    }

    pub fn read(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Self::parse(path, &source)
    }

    /// Replace the tags with their normalized form.
    ///
    /// Returns `true` when the normalized list differs from the stored JSON,
    /// so non-string items such as `2024` count as a change.
    pub fn normalize_tags(&mut self) -> bool {
        let normalized = normalize_tags(&self.tags);
        let rewritten = Value::Array(normalized.iter().cloned().map(Value::String).collect());
        let unchanged = match self.document.get("tags") {
            None | Some(Value::Null) => normalized.is_empty(),
            Some(current) => *current == rewritten,
        };
        if unchanged {
            return false;
        }
        self.document.insert("tags".to_string(), rewritten);
        self.tags = normalized;
        true
    }

    /// Pretty-printed JSON with two-space indentation and a trailing newline.
    pub fn to_pretty_json(&self, path: &Path) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.document).map_err(|source| {
            Error::Serialize {
                path: path.to_path_buf(),
                source,
            }
        })?;
        out.push('\n');
        Ok(out)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let contents = self.to_pretty_json(path)?;
        std::fs::write(path, contents).map_err(|e| Error::write(path, e))
    }
}
