//! File-access collaborator seam.

use std::io;
use std::path::Path;

/// Byte-level file operations the store delegates to.
///
/// The default implementation is [`StdFileAccess`]; tests substitute
/// doubles to observe call ordering or inject failures. Async forms are
/// individual suspension points; the store awaits them one at a time, in
/// order.
#[allow(async_fn_in_trait)]
pub trait FileAccess {
    /// Whether a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the entire file as UTF-8 text.
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Overwrite the file with `content`, creating it (and its parent
    /// directory) if needed.
    fn write_text(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Delete the file.
    fn delete(&self, path: &Path) -> io::Result<()>;

    /// Non-blocking form of [`FileAccess::exists`].
    async fn exists_async(&self, path: &Path) -> bool;

    /// Non-blocking form of [`FileAccess::read_text`].
    async fn read_text_async(&self, path: &Path) -> io::Result<String>;

    /// Non-blocking form of [`FileAccess::write_text`].
    async fn write_text_async(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// File access backed by `std::fs` and `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileAccess;

impl FileAccess for StdFileAccess {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
    }

    fn delete(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    async fn exists_async(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }

    async fn read_text_async(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn write_text_async(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await
    }
}
