//! Opt-in schema-version capability for store payloads.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Schema-version reporting and in-place upgrade.
///
/// `upgrade` brings the value to its latest schema in one step and must
/// tolerate being called on an already-current value (the store guards
/// against that case, but implementations should not rely on it).
pub trait Versioned {
    /// Schema version this value currently holds.
    fn current_version(&self) -> u32;

    /// Latest schema version the type knows about.
    fn latest_version(&self) -> u32;

    /// Mutate the value to the latest schema version.
    fn upgrade(&mut self);
}

/// A payload type that can live in a [`VersionedStore`].
///
/// Versioning is opt-in: the default capability query returns `None`, so
/// plain payloads load without any version handling. Types that version
/// their schema override [`Storable::as_versioned_mut`]:
///
/// ```
/// use savekit_store::{Storable, Versioned};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Profile {
///     version: u32,
///     name: String,
/// }
///
/// impl Versioned for Profile {
///     fn current_version(&self) -> u32 {
///         self.version
///     }
///     fn latest_version(&self) -> u32 {
///         2
///     }
///     fn upgrade(&mut self) {
///         self.version = 2;
///     }
/// }
///
/// impl Storable for Profile {
///     fn as_versioned_mut(&mut self) -> Option<&mut dyn Versioned> {
///         Some(self)
///     }
/// }
/// ```
///
/// [`VersionedStore`]: crate::VersionedStore
pub trait Storable: Serialize + DeserializeOwned {
    /// Capability query: the [`Versioned`] view of this value, if the
    /// type versions its schema.
    fn as_versioned_mut(&mut self) -> Option<&mut dyn Versioned> {
        None
    }
}
