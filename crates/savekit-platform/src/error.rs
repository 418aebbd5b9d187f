//! Directory-resolution error types.

use std::time::Duration;
use thiserror::Error;

/// Platform-directory resolution error.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No authenticated identity is available right now.
    #[error("no authenticated identity available to resolve the save directory")]
    IdentityUnavailable,

    /// No identity became authenticated before the deadline expired.
    #[error("identity did not authenticate within {waited:?}")]
    IdentityTimeout {
        /// How long the resolver waited before giving up.
        waited: Duration,
    },
}

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
