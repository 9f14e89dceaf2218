#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod alias;
pub mod entry;
pub mod error;
pub mod fs;
pub mod tags;
pub mod tokens;

pub use alias::AliasTable;
pub use entry::CatalogEntry;
pub use error::{Error, Result};
pub use tags::normalize_tags;
pub use tokens::{STOPWORDS, collect_tokens, host_of, is_stopword};

/// Shortest token that is considered a brand candidate.
pub const MIN_TOKEN_LEN: usize = 3;

/// Number of unresolved tokens kept per entry in the report.
pub const MAX_HINTS_PER_ENTRY: usize = 6;
