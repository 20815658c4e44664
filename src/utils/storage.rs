//! File storage for uploaded documents.
//!
//! A trait-based abstraction so the local filesystem backend can be swapped
//! without touching the document service.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tokio::fs;

use crate::utils::errors::AppError;

/// Storage backend for document bytes. Keys are relative paths under the
/// backend's root.
pub trait FileStore: Send + Sync {
    /// Persist `content` under `key`, creating parent directories as needed.
    /// Returns the absolute path the file was written to.
    fn save<'a>(
        &'a self,
        key: &'a str,
        content: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = Result<PathBuf, AppError>> + Send + 'a>>;

    /// Read the file back. A missing file is a state inconsistency between
    /// the metadata row and the disk, surfaced as a server error.
    fn read<'a>(
        &'a self,
        path: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, AppError>> + Send + 'a>>;

    /// Remove the file. An already-missing file is not an error.
    fn remove<'a>(
        &'a self,
        path: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<(), AppError>> + Send + 'a>>;
}

/// Local filesystem backend rooted at a configured directory.
#[derive(Clone, Debug)]
pub struct LocalFileStore {
    base_dir: PathBuf,
}

impl LocalFileStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Reject empty keys, absolute paths, and traversal attempts.
    fn validate_key(key: &str) -> Result<(), AppError> {
        if key.is_empty() || key.contains("..") || key.starts_with('/') {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Invalid storage key"
            )));
        }
        Ok(())
    }
}

impl FileStore for LocalFileStore {
    fn save<'a>(
        &'a self,
        key: &'a str,
        content: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = Result<PathBuf, AppError>> + Send + 'a>> {
        Box::pin(async move {
            Self::validate_key(key)?;

            let file_path = self.base_dir.join(key);
            if let Some(parent) = file_path.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::internal(anyhow::Error::from(e)))?;
            }
            fs::write(&file_path, content)
                .await
                .map_err(|e| AppError::internal(anyhow::Error::from(e)))?;

            Ok(file_path)
        })
    }

    fn read<'a>(
        &'a self,
        path: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, AppError>> + Send + 'a>> {
        Box::pin(async move {
            fs::read(path).await.map_err(|e| {
                AppError::internal(anyhow::anyhow!(
                    "Stored file missing or unreadable at {}: {}",
                    path.display(),
                    e
                ))
            })
        })
    }

    fn remove<'a>(
        &'a self,
        path: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<(), AppError>> + Send + 'a>> {
        Box::pin(async move {
            match fs::remove_file(path).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(AppError::internal(anyhow::Error::from(e))),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_key_rejects_traversal() {
        assert!(LocalFileStore::validate_key("../../etc/passwd").is_err());
        assert!(LocalFileStore::validate_key("/etc/passwd").is_err());
        assert!(LocalFileStore::validate_key("").is_err());
    }

    #[test]
    fn validate_key_accepts_relative_names() {
        assert!(LocalFileStore::validate_key("abc-123_report.pdf").is_ok());
    }

    #[tokio::test]
    async fn save_read_remove_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalFileStore::new(dir.path().to_path_buf());

        let path = store.save("note.txt", b"hello").await.unwrap();
        assert_eq!(store.read(&path).await.unwrap(), b"hello");

        store.remove(&path).await.unwrap();
        assert!(store.read(&path).await.is_err());
        // Removing again is fine.
        store.remove(&path).await.unwrap();
    }
}
