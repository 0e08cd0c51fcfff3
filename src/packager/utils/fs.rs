//! File system helpers shared across packaging steps.
//!
//! Removal helpers ignore only NotFound-class failures and propagate
//! everything else, so a stale artifact that cannot be deleted (permissions,
//! busy file) stops the pipeline instead of being silently kept.

use crate::bail;
use crate::packager::error::Result;
use std::{io, path::Path};
use tokio::fs;

/// Removes the file at `path` if it exists.
///
/// Missing files are fine (idempotent); any other removal failure is
/// propagated.
pub async fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        bail!("{from:?} does not exist");
    }
    if !from.is_file() {
        bail!("{from:?} is not a file");
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir).await?;
    }
    fs::copy(from, to).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn remove_file_if_exists_tolerates_absence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never-created");
        remove_file_if_exists(&path).await.unwrap();
    }

    #[tokio::test]
    async fn remove_file_if_exists_deletes_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stale");
        std::fs::write(&path, b"old").unwrap();
        remove_file_if_exists(&path).await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn copy_file_rejects_directories() {
        let dir = tempfile::tempdir().unwrap();
        let err = copy_file(dir.path(), &dir.path().join("out")).await;
        assert!(err.is_err());
    }
}
