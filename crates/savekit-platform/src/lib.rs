//! Platform-directory resolution for savekit stores.
//!
//! A *platform directory* is the relative path segment under which a game
//! keeps its save files for the current runtime environment: the root
//! directory in production, a fixed `debug` directory in development
//! builds, or a per-account directory when saves are bound to a logged-in
//! identity.
//!
//! The environment choice is made once at startup by constructing the
//! matching [`DirectoryResolver`] implementation and handing it to the
//! store; there is no runtime environment switch inside this crate.
//!
//! # Example
//!
//! ```
//! use savekit_platform::{DebugResolver, DirectoryResolver};
//!
//! let resolver = DebugResolver::default();
//! let dir = resolver.resolve().unwrap();
//! assert_eq!(dir.as_str(), "debug");
//! ```

mod directory;
mod error;
mod identity;
mod resolver;

pub use directory::PlatformDirectory;
pub use error::{ResolveError, Result};
pub use identity::{Identity, IdentityProvider};
pub use resolver::{DebugResolver, DirectoryResolver, ProductionResolver, SessionResolver};
