//! Pluggable directory-resolution policies.

use std::time::Duration;

use tokio::time::Instant;

use crate::directory::PlatformDirectory;
use crate::error::{ResolveError, Result};
use crate::identity::{Identity, IdentityProvider};

/// Directory segment used by development/editor builds.
pub const DEBUG_DIRECTORY: &str = "debug";

/// How often [`SessionResolver::resolve_async`] re-checks the identity.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Default deadline for the asynchronous identity wait.
const DEFAULT_DEADLINE: Duration = Duration::from_secs(30);

/// Strategy for resolving the platform save directory.
///
/// Exactly one implementation is constructed at startup for the build's
/// environment; the store re-resolves through it on every
/// platform-directory operation.
#[allow(async_fn_in_trait)]
pub trait DirectoryResolver {
    /// Resolve the directory, checking the environment once.
    fn resolve(&self) -> Result<PlatformDirectory>;

    /// Resolve the directory, suspending until the environment is ready.
    async fn resolve_async(&self) -> Result<PlatformDirectory>;
}

/// Production policy: saves live in the root directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductionResolver;

impl DirectoryResolver for ProductionResolver {
    fn resolve(&self) -> Result<PlatformDirectory> {
        Ok(PlatformDirectory::root())
    }

    async fn resolve_async(&self) -> Result<PlatformDirectory> {
        Ok(PlatformDirectory::root())
    }
}

/// Development policy: saves live in a fixed directory so debug data
/// never mixes with production saves.
#[derive(Debug, Clone)]
pub struct DebugResolver {
    segment: String,
}

impl Default for DebugResolver {
    fn default() -> Self {
        Self {
            segment: DEBUG_DIRECTORY.to_string(),
        }
    }
}

impl DebugResolver {
    /// Use a directory other than [`DEBUG_DIRECTORY`].
    pub fn with_segment(segment: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
        }
    }
}

impl DirectoryResolver for DebugResolver {
    fn resolve(&self) -> Result<PlatformDirectory> {
        Ok(PlatformDirectory::new(self.segment.clone()))
    }

    async fn resolve_async(&self) -> Result<PlatformDirectory> {
        Ok(PlatformDirectory::new(self.segment.clone()))
    }
}

/// Identity-gated policy: saves live under the logged-in account's id.
///
/// The synchronous form checks the identity once and fails with
/// [`ResolveError::IdentityUnavailable`] if nobody is logged in. The
/// asynchronous form waits for login, re-checking every 100 ms up to a
/// configurable deadline, and fails with [`ResolveError::IdentityTimeout`]
/// when the deadline passes. Both forms fail explicitly rather than
/// falling back to the root directory, so an unauthenticated session can
/// never read or clobber another environment's saves.
#[derive(Debug, Clone)]
pub struct SessionResolver<P> {
    provider: P,
    deadline: Duration,
}

impl<P: IdentityProvider> SessionResolver<P> {
    /// Resolver backed by the given identity provider, with the default
    /// 30 second login deadline.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            deadline: DEFAULT_DEADLINE,
        }
    }

    /// Override the asynchronous login deadline.
    pub fn with_deadline(provider: P, deadline: Duration) -> Self {
        Self { provider, deadline }
    }

    fn authenticated_directory(&self) -> Option<PlatformDirectory> {
        self.provider
            .identity()
            .filter(Identity::is_authenticated)
            .map(|identity| PlatformDirectory::new(identity.account_id()))
    }
}

impl<P: IdentityProvider> DirectoryResolver for SessionResolver<P> {
    fn resolve(&self) -> Result<PlatformDirectory> {
        self.authenticated_directory().ok_or_else(|| {
            tracing::warn!("no authenticated identity, save directory unresolved");
            ResolveError::IdentityUnavailable
        })
    }

    async fn resolve_async(&self) -> Result<PlatformDirectory> {
        let started = Instant::now();
        loop {
            if let Some(directory) = self.authenticated_directory() {
                return Ok(directory);
            }
            if started.elapsed() >= self.deadline {
                tracing::warn!(
                    "identity did not authenticate within {:?}",
                    self.deadline
                );
                return Err(ResolveError::IdentityTimeout {
                    waited: started.elapsed(),
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
