//! Store configuration: format, file name, extension.

use std::path::{Path, PathBuf};

/// Serialization format of a store file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreFormat {
    /// One UTF-8 JSON document per file.
    #[default]
    JsonText,
}

impl StoreFormat {
    /// File extension used when the descriptor carries no override.
    pub fn default_extension(self) -> &'static str {
        match self {
            Self::JsonText => "json",
        }
    }
}

/// Configuration identifying one store independent of directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDescriptor {
    /// Serialization format.
    pub format: StoreFormat,

    /// Logical file name, without extension.
    pub file_name: String,

    /// Replaces the format's default extension when set.
    pub extension_override: Option<String>,
}

impl Default for StoreDescriptor {
    fn default() -> Self {
        Self {
            format: StoreFormat::JsonText,
            file_name: "Untitled".to_string(),
            extension_override: None,
        }
    }
}

impl StoreDescriptor {
    /// JSON store with the given file name and the default extension.
    pub fn json(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    /// Replace the extension derived from the format.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension_override = Some(extension.into());
        self
    }

    /// Full file name: `<file_name>.<extension>`.
    pub fn file_name_with_extension(&self) -> String {
        let extension = self
            .extension_override
            .as_deref()
            .unwrap_or_else(|| self.format.default_extension());
        format!("{}.{}", self.file_name, extension)
    }

    /// Path of this store inside `directory`.
    ///
    /// An empty directory yields the bare file name, no leading separator.
    pub fn path_in(&self, directory: &Path) -> PathBuf {
        directory.join(self.file_name_with_extension())
    }
}
