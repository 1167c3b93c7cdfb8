//! Document storage
//!
//! Whole-document reads and writes behind [`DocumentStore`]. The service
//! only ever hands this trait absolute paths it has already resolved.

use async_trait::async_trait;
use dashmap::DashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Whole-document persistence
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Size in bytes if `path` is an existing regular file
    async fn file_size(&self, path: &Path) -> io::Result<Option<u64>>;

    /// Read the full document as UTF-8
    async fn read(&self, path: &Path) -> io::Result<String>;

    /// Replace the full document, creating parent directories if needed
    ///
    /// On error the previous content is left as it was.
    async fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Filesystem-backed store
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

#[async_trait]
impl DocumentStore for FsStore {
    async fn file_size(&self, path: &Path) -> io::Result<Option<u64>> {
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_file() => Ok(Some(meta.len())),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn read(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // write beside the target, then rename over it
        let temp = temp_path(path);
        if let Err(e) = tokio::fs::write(&temp, content).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e);
        }
        if let Err(e) = tokio::fs::rename(&temp, path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e);
        }
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// In-memory store, for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: DashMap<PathBuf, String>,
}

impl MemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Current content of a document
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.get(path).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn file_size(&self, path: &Path) -> io::Result<Option<u64>> {
        Ok(self.files.get(path).map(|entry| entry.len() as u64))
    }

    async fn read(&self, path: &Path) -> io::Result<String> {
        self.get(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    async fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fs_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/doc.md");
        let store = FsStore;

        assert_eq!(store.file_size(&path).await.unwrap(), None);
        store.write(&path, "hello").await.unwrap();
        assert_eq!(store.file_size(&path).await.unwrap(), Some(5));
        assert_eq!(store.read(&path).await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn fs_store_overwrite_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        FsStore.write(&path, "old").await.unwrap();
        FsStore.write(&path, "new").await.unwrap();

        assert_eq!(FsStore.read(&path).await.unwrap(), "new");
        assert!(!temp_path(&path).exists());
    }

    #[tokio::test]
    async fn fs_store_failed_write_keeps_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        FsStore.write(&path, "original").await.unwrap();

        // a directory in the temp slot makes the staging write fail
        std::fs::create_dir(temp_path(&path)).unwrap();
        assert!(FsStore.write(&path, "replacement").await.is_err());

        assert_eq!(FsStore.read(&path).await.unwrap(), "original");
    }

    #[tokio::test]
    async fn fs_store_directory_is_not_a_document() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(FsStore.file_size(dir.path()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        let path = Path::new("/p/doc.md");
        assert_eq!(store.file_size(path).await.unwrap(), None);
        assert!(store.read(path).await.is_err());

        store.write(path, "abc").await.unwrap();
        assert_eq!(store.file_size(path).await.unwrap(), Some(3));
        assert_eq!(store.get(path).as_deref(), Some("abc"));
    }
}
