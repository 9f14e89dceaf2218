pub mod grep;
pub mod ops_report;

// Re-export tool types for convenience
pub use grep::ClassGrep;
pub use ops_report::OpsReport;
