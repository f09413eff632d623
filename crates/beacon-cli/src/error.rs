//! Error types for the Beacon command line.

use thiserror::Error;

/// Result type for beacon-cli operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading input, allocating or reporting.
#[derive(Debug, Error)]
pub enum Error {
    /// The allocation engine rejected the input or configuration.
    #[error("allocation failed: {0}")]
    Alloc(#[from] beacon_alloc::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input could not be read as delimited records.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the report text failed.
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The header row lacks a required column.
    #[error("input header has no {0} column")]
    MissingColumn(&'static str),

    /// Every record was rejected during cleaning.
    #[error("no valid records in input ({skipped} skipped)")]
    NoValidRecords { skipped: usize },
}
