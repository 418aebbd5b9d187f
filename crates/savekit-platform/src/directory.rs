//! Relative directory segment selected per runtime environment.

use std::path::Path;

/// A relative path segment identifying where save files live for the
/// current environment.
///
/// The root directory is the empty segment: joining it against a file
/// name yields the bare file name with no leading separator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PlatformDirectory(String);

impl PlatformDirectory {
    /// The root (production default) directory.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// A directory named by an arbitrary relative segment.
    pub fn new(segment: impl Into<String>) -> Self {
        Self(segment.into())
    }

    /// Check whether this is the root directory.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The segment as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The segment as a path, suitable for joining a file name onto.
    #[inline]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl AsRef<Path> for PlatformDirectory {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
