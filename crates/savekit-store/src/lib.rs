//! Typed JSON save-store for game data.
//!
//! This crate persists one value of an arbitrary payload type to one JSON
//! file, and reloads it later, optionally upgrading its schema version in
//! memory on the way in.
//!
//! # File format
//!
//! One UTF-8 JSON document per file, a direct `serde_json` rendering of
//! the payload with field names preserved. The file name is
//! `<fileName>.<extension>`, where the extension defaults to `json` and
//! can be overridden per store.
//!
//! # Example
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use savekit_store::{Storable, StoreDescriptor, VersionedStore};
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! struct Settings {
//!     music_volume: f32,
//! }
//!
//! impl Storable for Settings {}
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store: VersionedStore<Settings> =
//!     VersionedStore::new(StoreDescriptor::json("settings"));
//!
//! store.save(&Settings { music_volume: 0.8 }, dir.path()).unwrap();
//! let loaded = store.load(dir.path()).unwrap();
//! assert_eq!(loaded, Some(Settings { music_volume: 0.8 }));
//! ```
//!
//! # Versioned payloads
//!
//! Payload types may opt into the [`Versioned`] capability by overriding
//! [`Storable::as_versioned_mut`]. A loaded value whose current version
//! is behind its latest is upgraded in place, exactly once, before it is
//! returned; the file on disk is left untouched (re-save the value if the
//! upgraded form should persist).
//!
//! # Architecture
//!
//! - `descriptor` - store configuration (format, file name, extension)
//! - `fs` - the file-access collaborator seam, sync and async
//! - `store` - the save/load/delete contract
//! - `versioned` - the opt-in schema-version capability
//! - `error` - error types
//!
//! Platform-resolved variants of every operation live on
//! [`VersionedStore`] and delegate directory selection to a
//! [`savekit_platform::DirectoryResolver`].

mod descriptor;
mod error;
mod fs;
mod store;
mod versioned;

pub use descriptor::{StoreDescriptor, StoreFormat};
pub use error::{Result, StoreError};
pub use fs::{FileAccess, StdFileAccess};
pub use store::VersionedStore;
pub use versioned::{Storable, Versioned};
