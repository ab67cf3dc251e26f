//! Blocking tree copy engine
//!
//! Mirror of the concurrent engine with identical externally observable
//! outcomes, for callers without a runtime at hand. Executes depth-first in
//! listing order, one operation at a time; the first failure aborts the
//! remaining traversal and propagates, leaving already-copied entries in
//! place.

use std::path::Path;
use std::time::Instant;

use tracing::info;
use treecp_types::{CopyStats, Error, Result};

use crate::tree::validate_paths;
use crate::{file, CopyOptions};

/// Copy a file or a directory tree, blocking until done.
///
/// Same semantics as [`copy_tree`](crate::copy_tree): destination resolution
/// for single files, recursive replication for directories, replace policy
/// per [`CopyOptions`]. `max_concurrency` is ignored in blocking mode.
///
/// # Examples
///
/// ```no_run
/// use treecp_engine::{copy_tree_sync, CopyOptions};
///
/// # fn example() -> treecp_types::Result<()> {
/// let stats = copy_tree_sync("photos", "backup/photos", &CopyOptions::default())?;
/// println!("copied {} files", stats.files_copied);
/// # Ok(())
/// # }
/// ```
pub fn copy_tree_sync<P, Q>(source: P, dest: Q, options: &CopyOptions) -> Result<CopyStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let source = source.as_ref();
    let dest = dest.as_ref();
    validate_paths(source, dest)?;

    let start = Instant::now();
    let metadata =
        std::fs::symlink_metadata(source).map_err(|e| Error::source_stat(source, &e))?;

    let mut stats = if metadata.is_dir() {
        copy_dir_tree_sync(source, dest, options)?
    } else {
        file::copy_file_sync(source, dest, options)?
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

fn copy_dir_tree_sync(source: &Path, dest: &Path, options: &CopyOptions) -> Result<CopyStats> {
    let mut stats = CopyStats::new();

    let existed = dest.exists();
    file::ensure_dir_sync(dest)?;
    if !existed {
        stats.directories_created += 1;
    }

    let entries = std::fs::read_dir(source).map_err(|e| Error::listing_failure(source, &e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::listing_failure(source, &e))?;
        let entry_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        let file_type = entry
            .file_type()
            .map_err(|e| Error::source_stat(&entry_path, &e))?;

        let entry_stats = if file_type.is_dir() {
            copy_dir_tree_sync(&entry_path, &dest_path, options)?
        } else {
            file::copy_entry_sync(&entry_path, &dest_path, options)?
        };
        stats.merge(&entry_stats);
    }

    Ok(stats)
}
