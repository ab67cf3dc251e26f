//! Single-entry copy primitives
//!
//! Copies exactly one source file to one resolved destination path, honoring
//! the replace policy and creating missing parent directories. The tree
//! walkers use the entry-level variants, which skip directory creation
//! because the traversal has already ensured the parent exists.

use std::path::Path;

use tokio::fs;
use tracing::debug;
use treecp_types::{CopyStats, Error, Result};

use crate::dest::resolve_dest;
use crate::CopyOptions;

/// Copy one source file to a destination path that still needs resolving.
pub(crate) async fn copy_file(
    source: &Path,
    dest: &Path,
    options: &CopyOptions,
) -> Result<CopyStats> {
    let resolved = resolve_dest(source, dest);
    let mut stats = CopyStats::new();

    if !options.replace && fs::try_exists(&resolved.file_path).await.unwrap_or(false) {
        debug!(
            "destination {} exists, skipping",
            resolved.file_path.display()
        );
        stats.files_skipped = 1;
        return Ok(stats);
    }

    if !resolved.dir.as_os_str().is_empty() {
        ensure_dir(&resolved.dir).await?;
    }

    stats.bytes_copied = copy_bytes(source, &resolved.file_path).await?;
    stats.files_copied = 1;
    Ok(stats)
}

/// Copy one directory entry whose destination parent is known to exist.
pub(crate) async fn copy_entry(
    source: &Path,
    dest: &Path,
    options: &CopyOptions,
) -> Result<CopyStats> {
    let mut stats = CopyStats::new();

    if !options.replace && fs::try_exists(dest).await.unwrap_or(false) {
        debug!("destination {} exists, skipping", dest.display());
        stats.files_skipped = 1;
        return Ok(stats);
    }

    stats.bytes_copied = copy_bytes(source, dest).await?;
    stats.files_copied = 1;
    Ok(stats)
}

/// Create a directory chain, tolerating already-existing components.
pub(crate) async fn ensure_dir(dir: &Path) -> Result<()> {
    match fs::create_dir_all(dir).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(Error::destination_unwritable(dir, &e)),
    }
}

async fn copy_bytes(source: &Path, dest: &Path) -> Result<u64> {
    match fs::copy(source, dest).await {
        Ok(bytes) => {
            debug!(
                "copied {} -> {} ({} bytes)",
                source.display(),
                dest.display(),
                bytes
            );
            Ok(bytes)
        }
        Err(e) => Err(classify_copy_error(source, dest, &e).await),
    }
}

// fs::copy does not report which side failed; probing the source settles it.
async fn classify_copy_error(source: &Path, dest: &Path, error: &std::io::Error) -> Error {
    match fs::File::open(source).await {
        Err(probe) => Error::source_stat(source, &probe),
        Ok(_) => Error::destination_unwritable(dest, error),
    }
}

/// Blocking mirror of [`copy_file`].
pub(crate) fn copy_file_sync(
    source: &Path,
    dest: &Path,
    options: &CopyOptions,
) -> Result<CopyStats> {
    let resolved = resolve_dest(source, dest);
    let mut stats = CopyStats::new();

    if !options.replace && resolved.file_path.exists() {
        debug!(
            "destination {} exists, skipping",
            resolved.file_path.display()
        );
        stats.files_skipped = 1;
        return Ok(stats);
    }

    if !resolved.dir.as_os_str().is_empty() {
        ensure_dir_sync(&resolved.dir)?;
    }

    stats.bytes_copied = copy_bytes_sync(source, &resolved.file_path)?;
    stats.files_copied = 1;
    Ok(stats)
}

/// Blocking mirror of [`copy_entry`].
pub(crate) fn copy_entry_sync(
    source: &Path,
    dest: &Path,
    options: &CopyOptions,
) -> Result<CopyStats> {
    let mut stats = CopyStats::new();

    if !options.replace && dest.exists() {
        debug!("destination {} exists, skipping", dest.display());
        stats.files_skipped = 1;
        return Ok(stats);
    }

    stats.bytes_copied = copy_bytes_sync(source, dest)?;
    stats.files_copied = 1;
    Ok(stats)
}

/// Blocking mirror of [`ensure_dir`].
pub(crate) fn ensure_dir_sync(dir: &Path) -> Result<()> {
    match std::fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(Error::destination_unwritable(dir, &e)),
    }
}

fn copy_bytes_sync(source: &Path, dest: &Path) -> Result<u64> {
    match std::fs::copy(source, dest) {
        Ok(bytes) => {
            debug!(
                "copied {} -> {} ({} bytes)",
                source.display(),
                dest.display(),
                bytes
            );
            Ok(bytes)
        }
        Err(e) => match std::fs::File::open(source) {
            Err(probe) => Err(Error::source_stat(source, &probe)),
            Ok(_) => Err(Error::destination_unwritable(dest, &e)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use treecp_types::ErrorKind;

    #[tokio::test]
    async fn test_copy_file_creates_missing_parents() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("src.txt");
        std::fs::write(&source, b"payload").unwrap();

        let dest = tmp.path().join("a/b/c/out.txt");
        let stats = copy_file(&source, &dest, &CopyOptions::default())
            .await
            .unwrap();

        assert_eq!(stats.files_copied, 1);
        assert_eq!(stats.bytes_copied, 7);
        assert_eq!(std::fs::read(&dest).unwrap(), b"payload");
    }

    #[tokio::test]
    async fn test_replace_false_skips_existing() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("src.txt");
        let dest = tmp.path().join("out.txt");
        std::fs::write(&source, b"new").unwrap();
        std::fs::write(&dest, b"old").unwrap();

        let options = CopyOptions::new().with_replace(false);
        let stats = copy_file(&source, &dest, &options).await.unwrap();

        assert_eq!(stats.files_copied, 0);
        assert_eq!(stats.files_skipped, 1);
        assert_eq!(std::fs::read(&dest).unwrap(), b"old");
    }

    #[tokio::test]
    async fn test_missing_source_is_classified() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("absent.txt");
        let dest = tmp.path().join("out.txt");

        let error = copy_entry(&source, &dest, &CopyOptions::default())
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::SourceNotFound);
    }

    #[test]
    fn test_sync_copy_file_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("src.txt");
        std::fs::write(&source, b"sync payload").unwrap();

        let dest = tmp.path().join("nested/out.txt");
        let stats = copy_file_sync(&source, &dest, &CopyOptions::default()).unwrap();

        assert_eq!(stats.files_copied, 1);
        assert_eq!(std::fs::read(&dest).unwrap(), b"sync payload");
    }

    #[test]
    fn test_sync_replace_true_overwrites() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("src.txt");
        let dest = tmp.path().join("out.txt");
        std::fs::write(&source, b"fresh").unwrap();
        std::fs::write(&dest, b"stale").unwrap();

        let stats = copy_entry_sync(&source, &dest, &CopyOptions::default()).unwrap();

        assert_eq!(stats.files_copied, 1);
        assert_eq!(std::fs::read(&dest).unwrap(), b"fresh");
    }
}
