//! Store error types.

use std::path::PathBuf;

use savekit_platform::ResolveError;
use thiserror::Error;

/// Store operation error.
///
/// A missing file on load is not an error; [`VersionedStore::load`]
/// reports it as `Ok(None)`.
///
/// [`VersionedStore::load`]: crate::VersionedStore::load
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Payload could not be serialized to JSON.
    #[error("Failed to serialize store payload")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// File content is not valid JSON for the payload type.
    #[error("Failed to deserialize store file: {path}")]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Platform-directory resolution failed.
    #[error("Failed to resolve platform save directory")]
    Resolve(#[from] ResolveError),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
