//! Error types for the spyglass library.
//!
//! The filter pipeline itself is total: it defines no failure modes for
//! well-formed input, and malformed nodes degrade gracefully (missing
//! collections count as empty). Errors only arise at the boundary, when
//! a project tree is parsed from JSON.

use thiserror::Error;

/// Error type for boundary operations around the filter pipeline.
#[derive(Error, Debug)]
pub enum SpyglassError {
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias for spyglass operations
pub type Result<T> = std::result::Result<T, SpyglassError>;
