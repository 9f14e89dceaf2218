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

//! Catalog enrichment: tag normalization plus missing-logo-alias hints.

pub mod driver;
pub mod report;

pub use driver::{
    EnrichOptions, EnrichOutcome, EnrichSummary, discover_entries, run, unresolved_tokens,
};
pub use report::EnrichReport;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnrichError>;

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error(transparent)]
    Catalog(#[from] catalog_core::Error),

    #[error("invalid catalog glob: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to list catalog entries: {0}")]
    Discover(#[from] glob::GlobError),
}
