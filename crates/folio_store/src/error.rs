//! Store error taxonomy

use thiserror::Error;

/// Failures a preference store can report.
///
/// Every variant is recoverable; callers that can operate without
/// persistence are expected to log and continue.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium cannot be used at all (disabled, missing, full).
    #[error("preference storage is unavailable")]
    Unavailable,

    /// Reading or writing the backing medium failed.
    #[error("preference storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document exists but could not be parsed.
    #[error("preference storage is corrupt: {0}")]
    Corrupt(String),
}
