//! Error types for extracty.
//!
//! Resolvers signal "no credible candidate" through `Option`, never through
//! errors. The error type covers the only fatal condition: input that cannot
//! be turned into a document tree at all.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTML parsing failed.
    #[error("HTML parsing failed: {0}")]
    Parse(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
