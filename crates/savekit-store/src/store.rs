//! The save/load/delete contract.

use std::marker::PhantomData;
use std::path::Path;

use savekit_platform::DirectoryResolver;

use crate::descriptor::StoreDescriptor;
use crate::error::{Result, StoreError};
use crate::fs::{FileAccess, StdFileAccess};
use crate::versioned::Storable;

/// One persisted value of type `T`, stored as one JSON file.
///
/// The store owns a [`StoreDescriptor`] naming the file and a
/// [`FileAccess`] collaborator performing the byte-level I/O. Each
/// operation takes the directory explicitly; the `*_platform` variants
/// resolve it through a [`DirectoryResolver`] instead, re-resolving on
/// every call.
///
/// Concurrent callers against the same path are unguarded; the last
/// writer wins.
pub struct VersionedStore<T, F = StdFileAccess> {
    descriptor: StoreDescriptor,
    fs: F,
    _payload: PhantomData<fn() -> T>,
}

impl<T: Storable> VersionedStore<T> {
    /// Store using [`StdFileAccess`] for I/O.
    pub fn new(descriptor: StoreDescriptor) -> Self {
        Self::with_file_access(descriptor, StdFileAccess)
    }
}

impl<T: Storable, F: FileAccess> VersionedStore<T, F> {
    /// Store delegating I/O to the given collaborator.
    pub fn with_file_access(descriptor: StoreDescriptor, fs: F) -> Self {
        Self {
            descriptor,
            fs,
            _payload: PhantomData,
        }
    }

    /// The descriptor this store was configured with.
    pub fn descriptor(&self) -> &StoreDescriptor {
        &self.descriptor
    }

    /// Load the stored value from `directory`.
    ///
    /// A missing file is the expected first-run condition and returns
    /// `Ok(None)`. An outdated versioned payload is upgraded in place
    /// before it is returned; the file on disk stays as written.
    pub fn load(&self, directory: impl AsRef<Path>) -> Result<Option<T>> {
        let path = self.descriptor.path_in(directory.as_ref());
        if !self.fs.exists(&path) {
            tracing::warn!("No store file at {}", path.display());
            return Ok(None);
        }

        let text = self.fs.read_text(&path).map_err(|e| StoreError::Io {
            operation: "read",
            path: path.clone(),
            source: e,
        })?;

        let value = self.decode(&text, &path)?;
        tracing::info!("Loaded store from {}", path.display());
        Ok(Some(value))
    }

    /// Load the stored value without blocking.
    ///
    /// Same contract as [`VersionedStore::load`]; the existence check
    /// completes before the read begins.
    pub async fn load_async(&self, directory: impl AsRef<Path>) -> Result<Option<T>> {
        let path = self.descriptor.path_in(directory.as_ref());
        if !self.fs.exists_async(&path).await {
            tracing::warn!("No store file at {}", path.display());
            return Ok(None);
        }

        let text = self
            .fs
            .read_text_async(&path)
            .await
            .map_err(|e| StoreError::Io {
                operation: "read",
                path: path.clone(),
                source: e,
            })?;

        let value = self.decode(&text, &path)?;
        tracing::info!("Loaded store from {}", path.display());
        Ok(Some(value))
    }

    /// Serialize `value` and overwrite the store file in `directory`.
    ///
    /// No version check, no existence pre-check, no atomicity: a crash
    /// mid-write can truncate the file.
    pub fn save(&self, value: &T, directory: impl AsRef<Path>) -> Result<()> {
        let path = self.descriptor.path_in(directory.as_ref());
        let text = self.encode(value)?;

        self.fs
            .write_text(&path, &text)
            .map_err(|e| StoreError::Io {
                operation: "write",
                path: path.clone(),
                source: e,
            })?;

        tracing::info!("Saved store to {}", path.display());
        Ok(())
    }

    /// Serialize `value` and overwrite the store file without blocking.
    pub async fn save_async(&self, value: &T, directory: impl AsRef<Path>) -> Result<()> {
        let path = self.descriptor.path_in(directory.as_ref());
        let text = self.encode(value)?;

        self.fs
            .write_text_async(&path, &text)
            .await
            .map_err(|e| StoreError::Io {
                operation: "write",
                path: path.clone(),
                source: e,
            })?;

        tracing::info!("Saved store to {}", path.display());
        Ok(())
    }

    /// Delete the store file in `directory`.
    ///
    /// Deleting a store that does not exist is a no-op, so double
    /// deletion is always safe.
    pub fn delete(&self, directory: impl AsRef<Path>) -> Result<()> {
        let path = self.descriptor.path_in(directory.as_ref());
        if !self.fs.exists(&path) {
            tracing::warn!("No store file to delete at {}", path.display());
            return Ok(());
        }

        self.fs.delete(&path).map_err(|e| StoreError::Io {
            operation: "delete",
            path: path.clone(),
            source: e,
        })?;

        tracing::info!("Deleted store at {}", path.display());
        Ok(())
    }

    /// [`VersionedStore::load`] from the platform-resolved directory.
    pub fn load_from_platform<R: DirectoryResolver>(&self, resolver: &R) -> Result<Option<T>> {
        let directory = resolver.resolve()?;
        self.load(&directory)
    }

    /// [`VersionedStore::load_async`] from the platform-resolved
    /// directory, waiting for the resolver if it needs to suspend.
    pub async fn load_from_platform_async<R: DirectoryResolver>(
        &self,
        resolver: &R,
    ) -> Result<Option<T>> {
        let directory = resolver.resolve_async().await?;
        self.load_async(&directory).await
    }

    /// [`VersionedStore::save`] to the platform-resolved directory.
    pub fn save_to_platform<R: DirectoryResolver>(&self, value: &T, resolver: &R) -> Result<()> {
        let directory = resolver.resolve()?;
        self.save(value, &directory)
    }

    /// [`VersionedStore::save_async`] to the platform-resolved directory.
    pub async fn save_to_platform_async<R: DirectoryResolver>(
        &self,
        value: &T,
        resolver: &R,
    ) -> Result<()> {
        let directory = resolver.resolve_async().await?;
        self.save_async(value, &directory).await
    }

    /// [`VersionedStore::delete`] from the platform-resolved directory.
    pub fn delete_from_platform<R: DirectoryResolver>(&self, resolver: &R) -> Result<()> {
        let directory = resolver.resolve()?;
        self.delete(&directory)
    }

    fn encode(&self, value: &T) -> Result<String> {
        serde_json::to_string(value).map_err(|e| StoreError::Serialization { source: e })
    }

    /// Deserialize `text` and apply the one-shot version upgrade if the
    /// payload opts into the capability and is behind.
    fn decode(&self, text: &str, path: &Path) -> Result<T> {
        let mut value: T =
            serde_json::from_str(text).map_err(|e| StoreError::Deserialization {
                path: path.to_path_buf(),
                source: e,
            })?;

        if let Some(versioned) = value.as_versioned_mut() {
            let current = versioned.current_version();
            let latest = versioned.latest_version();
            if current < latest {
                versioned.upgrade();
                tracing::info!(
                    "Upgraded store payload from version {current} to {latest}"
                );
            }
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::versioned::Versioned;
    use savekit_platform::PlatformDirectory;
    use serde::{Deserialize, Serialize};
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Settings {
        music_volume: f32,
        player_name: String,
    }

    impl Storable for Settings {}

    fn sample_settings() -> Settings {
        Settings {
            music_volume: 0.75,
            player_name: "Avery".to_string(),
        }
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        version: u32,
        coins: u32,
    }

    impl Versioned for Profile {
        fn current_version(&self) -> u32 {
            self.version
        }

        fn latest_version(&self) -> u32 {
            2
        }

        fn upgrade(&mut self) {
            self.version = 2;
        }
    }

    impl Storable for Profile {
        fn as_versioned_mut(&mut self) -> Option<&mut dyn Versioned> {
            Some(self)
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store: VersionedStore<Settings> =
            VersionedStore::new(StoreDescriptor::json("settings"));

        let settings = sample_settings();
        store.save(&settings, dir.path()).unwrap();

        let loaded = store.load(dir.path()).unwrap();
        assert_eq!(loaded, Some(settings));
    }

    #[test]
    fn test_load_missing_file_is_not_an_error() {
        let dir = tempdir().unwrap();
        let store: VersionedStore<Settings> =
            VersionedStore::new(StoreDescriptor::json("settings"));

        let loaded = store.load(dir.path()).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_load_malformed_content() {
        let dir = tempdir().unwrap();
        let store: VersionedStore<Settings> =
            VersionedStore::new(StoreDescriptor::json("settings"));

        std::fs::write(dir.path().join("settings.json"), "not json at all").unwrap();

        let result = store.load(dir.path());
        assert!(matches!(
            result,
            Err(StoreError::Deserialization { .. })
        ));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = tempdir().unwrap();
        let store: VersionedStore<Settings> =
            VersionedStore::new(StoreDescriptor::json("settings"));

        store.save(&sample_settings(), dir.path()).unwrap();
        store.delete(dir.path()).unwrap();
        assert!(!dir.path().join("settings.json").exists());

        // Second delete is a no-op
        store.delete(dir.path()).unwrap();
    }

    #[test]
    fn test_outdated_payload_upgrades_on_load_without_rewrite() {
        let dir = tempdir().unwrap();
        let store: VersionedStore<Profile> =
            VersionedStore::new(StoreDescriptor::json("profile"));

        let path = dir.path().join("profile.json");
        std::fs::write(&path, r#"{"version":1,"coins":300}"#).unwrap();
        let on_disk_before = std::fs::read(&path).unwrap();

        let loaded = store.load(dir.path()).unwrap().unwrap();
        assert_eq!(loaded.current_version(), 2);
        assert_eq!(loaded.coins, 300);

        // The upgrade is in-memory only
        assert_eq!(std::fs::read(&path).unwrap(), on_disk_before);
    }

    #[test]
    fn test_current_payload_is_not_upgraded() {
        let dir = tempdir().unwrap();
        let store: VersionedStore<Profile> =
            VersionedStore::new(StoreDescriptor::json("profile"));

        let profile = Profile {
            version: 2,
            coins: 10,
        };
        store.save(&profile, dir.path()).unwrap();

        let loaded = store.load(dir.path()).unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let store: VersionedStore<Settings> =
            VersionedStore::new(StoreDescriptor::json("settings"));

        let nested = dir.path().join("saves");
        store.save(&sample_settings(), &nested).unwrap();
        assert!(nested.join("settings.json").exists());
    }

    #[tokio::test]
    async fn test_async_round_trip() {
        let dir = tempdir().unwrap();
        let store: VersionedStore<Settings> =
            VersionedStore::new(StoreDescriptor::json("settings"));

        let settings = sample_settings();
        store.save_async(&settings, dir.path()).await.unwrap();

        let loaded = store.load_async(dir.path()).await.unwrap();
        assert_eq!(loaded, Some(settings));
    }

    #[tokio::test]
    async fn test_async_load_missing_file() {
        let dir = tempdir().unwrap();
        let store: VersionedStore<Settings> =
            VersionedStore::new(StoreDescriptor::json("settings"));

        let loaded = store.load_async(dir.path()).await.unwrap();
        assert_eq!(loaded, None);
    }

    /// Records which collaborator calls the store makes, in order.
    struct RecordingFs {
        calls: Mutex<Vec<&'static str>>,
        content: String,
    }

    impl RecordingFs {
        fn with_content(content: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                content: content.to_string(),
            }
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl FileAccess for RecordingFs {
        fn exists(&self, _path: &Path) -> bool {
            self.record("exists");
            true
        }

        fn read_text(&self, _path: &Path) -> std::io::Result<String> {
            self.record("read_text");
            Ok(self.content.clone())
        }

        fn write_text(&self, _path: &Path, _content: &str) -> std::io::Result<()> {
            self.record("write_text");
            Ok(())
        }

        fn delete(&self, _path: &Path) -> std::io::Result<()> {
            self.record("delete");
            Ok(())
        }

        async fn exists_async(&self, _path: &Path) -> bool {
            self.record("exists");
            true
        }

        async fn read_text_async(&self, _path: &Path) -> std::io::Result<String> {
            self.record("read_text");
            Ok(self.content.clone())
        }

        async fn write_text_async(&self, _path: &Path, _content: &str) -> std::io::Result<()> {
            self.record("write_text");
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_async_load_checks_existence_before_reading() {
        let fs = RecordingFs::with_content(r#"{"music_volume":0.5,"player_name":"Sam"}"#);
        let store: VersionedStore<Settings, _> =
            VersionedStore::with_file_access(StoreDescriptor::json("settings"), fs);

        let loaded = store.load_async("saves").await.unwrap();
        assert!(loaded.is_some());
        assert_eq!(store.fs.calls(), vec!["exists", "read_text"]);
    }

    /// Resolver pinned to a fixed directory, standing in for the host's
    /// startup-selected policy.
    struct FixedResolver(PathBuf);

    impl DirectoryResolver for FixedResolver {
        fn resolve(&self) -> savekit_platform::Result<PlatformDirectory> {
            Ok(PlatformDirectory::new(self.0.to_string_lossy()))
        }

        async fn resolve_async(&self) -> savekit_platform::Result<PlatformDirectory> {
            Ok(PlatformDirectory::new(self.0.to_string_lossy()))
        }
    }

    #[test]
    fn test_platform_wrappers_round_trip() {
        let dir = tempdir().unwrap();
        let resolver = FixedResolver(dir.path().to_path_buf());
        let store: VersionedStore<Settings> =
            VersionedStore::new(StoreDescriptor::json("settings"));

        let settings = sample_settings();
        store.save_to_platform(&settings, &resolver).unwrap();
        assert_eq!(
            store.load_from_platform(&resolver).unwrap(),
            Some(settings)
        );

        store.delete_from_platform(&resolver).unwrap();
        assert_eq!(store.load_from_platform(&resolver).unwrap(), None);

        // Deleting again stays a no-op through the wrapper too
        store.delete_from_platform(&resolver).unwrap();
    }

    #[tokio::test]
    async fn test_platform_wrappers_async_round_trip() {
        let dir = tempdir().unwrap();
        let resolver = FixedResolver(dir.path().to_path_buf());
        let store: VersionedStore<Settings> =
            VersionedStore::new(StoreDescriptor::json("settings"));

        let settings = sample_settings();
        store
            .save_to_platform_async(&settings, &resolver)
            .await
            .unwrap();
        assert_eq!(
            store.load_from_platform_async(&resolver).await.unwrap(),
            Some(settings)
        );
    }

    #[test]
    fn test_platform_wrapper_surfaces_resolver_failure() {
        use savekit_platform::{Identity, IdentityProvider, SessionResolver};

        struct NoSession;
        impl IdentityProvider for NoSession {
            fn identity(&self) -> Option<Identity> {
                None
            }
        }

        let resolver = SessionResolver::new(NoSession);
        let store: VersionedStore<Settings> =
            VersionedStore::new(StoreDescriptor::json("settings"));

        let result = store.load_from_platform(&resolver);
        assert!(matches!(result, Err(StoreError::Resolve(_))));
    }
}
