//! Concurrent tree copy engine
//!
//! Recursively enumerates a source directory and dispatches one task per
//! entry onto the runtime, with no ordering guarantee between siblings and,
//! by default, no bound on how many operations are in flight at once.
//! Completion tracking is structural: every directory level drains a
//! [`JoinSet`] holding one result per entry, so the terminal outcome is a
//! single `Result` that can only be produced once. The first error wins;
//! siblings still in flight are detached and run to completion with their
//! outcomes discarded.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::fs;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::info;
use treecp_types::{CopyStats, Error, Result};

use crate::{file, CopyOptions};

/// Copy a file or a directory tree, overlapping I/O across entries.
///
/// Dispatches on the source type: a file goes through destination resolution
/// and a single copy, a directory is walked concurrently. Resolves once with
/// either the aggregated statistics or the first error encountered.
///
/// # Examples
///
/// ```no_run
/// use treecp_engine::{copy_tree, CopyOptions};
///
/// # async fn example() -> treecp_types::Result<()> {
/// let stats = copy_tree("photos", "backup/photos", &CopyOptions::default()).await?;
/// println!("copied {} files", stats.files_copied);
/// # Ok(())
/// # }
/// ```
pub async fn copy_tree<P, Q>(source: P, dest: Q, options: &CopyOptions) -> Result<CopyStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let source = source.as_ref();
    let dest = dest.as_ref();
    validate_paths(source, dest)?;

    let start = Instant::now();
    let metadata = fs::symlink_metadata(source)
        .await
        .map_err(|e| Error::source_stat(source, &e))?;

    let mut stats = if metadata.is_dir() {
        let limiter = options
            .max_concurrency
            .map(|max| Arc::new(Semaphore::new(max.get())));
        copy_dir_tree(
            source.to_path_buf(),
            dest.to_path_buf(),
            Arc::new(options.clone()),
            limiter,
        )
        .await?
    } else {
        file::copy_file(source, dest, options).await?
    };

    stats.duration = start.elapsed();
    info!(
        "copy finished: {} -> {}, {} files, {} bytes in {:?}",
        source.display(),
        dest.display(),
        stats.files_copied,
        stats.bytes_copied,
        stats.duration
    );
    Ok(stats)
}

/// Reject empty paths before any I/O is dispatched.
pub(crate) fn validate_paths(source: &Path, dest: &Path) -> Result<()> {
    if source.as_os_str().is_empty() {
        return Err(Error::invalid_argument("source path must not be empty"));
    }
    if dest.as_os_str().is_empty() {
        return Err(Error::invalid_argument("destination path must not be empty"));
    }
    Ok(())
}

/// Walk one directory level: ensure the destination directory exists, list
/// the source, spawn one task per entry, then drain the join set.
///
/// Boxed because the future recurses through [`copy_tree_entry`].
fn copy_dir_tree(
    source: PathBuf,
    dest: PathBuf,
    options: Arc<CopyOptions>,
    limiter: Option<Arc<Semaphore>>,
) -> BoxFuture<'static, Result<CopyStats>> {
    async move {
        let mut stats = CopyStats::new();

        let existed = fs::try_exists(&dest).await.unwrap_or(false);
        file::ensure_dir(&dest).await?;
        if !existed {
            stats.directories_created += 1;
        }

        let mut entries = fs::read_dir(&source)
            .await
            .map_err(|e| Error::listing_failure(&source, &e))?;

        let mut tasks: JoinSet<Result<CopyStats>> = JoinSet::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    tasks.detach_all();
                    return Err(Error::listing_failure(&source, &e));
                }
            };
            let dest_path = dest.join(entry.file_name());
            tasks.spawn(copy_tree_entry(
                entry.path(),
                dest_path,
                Arc::clone(&options),
                limiter.clone(),
            ));
        }

        // One result per entry, first error wins. An empty listing falls
        // straight through to success.
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(entry_stats)) => stats.merge(&entry_stats),
                Ok(Err(e)) => {
                    tasks.detach_all();
                    return Err(e);
                }
                Err(join_error) => {
                    tasks.detach_all();
                    return Err(Error::other(format!("copy task failed: {join_error}")));
                }
            }
        }

        Ok(stats)
    }
    .boxed()
}

/// Copy one directory entry: recurse into subdirectories, copy files in
/// place. The destination parent is known to exist.
async fn copy_tree_entry(
    source: PathBuf,
    dest: PathBuf,
    options: Arc<CopyOptions>,
    limiter: Option<Arc<Semaphore>>,
) -> Result<CopyStats> {
    let permit = match &limiter {
        Some(semaphore) => Some(
            Arc::clone(semaphore)
                .acquire_owned()
                .await
                .map_err(|e| Error::other(format!("concurrency limiter closed: {e}")))?,
        ),
        None => None,
    };

    let metadata = fs::symlink_metadata(&source)
        .await
        .map_err(|e| Error::source_stat(&source, &e))?;

    if metadata.is_dir() {
        // The permit gates stat and file I/O only; holding it across a
        // recursive subtree would deadlock once the tree is deeper than
        // the bound.
        drop(permit);
        copy_dir_tree(source, dest, options, limiter).await
    } else {
        file::copy_entry(&source, &dest, &options).await
    }
}
