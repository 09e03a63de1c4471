//! Error taxonomy for URL construction.

use thiserror::Error;

/// Errors surfaced while building a conversion request URL.
///
/// Every variant carries the offending raw value so callers can produce
/// precise diagnostics. None of these are transient and nothing is retried;
/// a failed call leaves the [`crate::PdfBucket`] instance reusable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PdfBucketError {
    /// Source URI did not match the accepted http/https pattern.
    #[error("Invalid URI {0}")]
    InvalidUri(String),
    /// Orientation was not `portrait` or `landscape` (case-insensitive).
    #[error("Invalid orientation {0}")]
    InvalidOrientation(String),
    /// Page size was not `a4` or `letter` (case-insensitive).
    #[error("Invalid page size {0}")]
    InvalidPageSize(String),
    /// Zoom did not parse as a float in `[0.0, 1.0]`.
    #[error("Invalid zoom {0}")]
    InvalidZoom(String),
    /// API secret was not valid base64 or did not decode to a 32-byte key.
    #[error("Encryption failed: {0}")]
    EncryptionError(String),
}
