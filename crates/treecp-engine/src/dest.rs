//! Destination path resolution
//!
//! A destination given to a single-file copy is ambiguous: it may name the
//! target file itself, or a directory to place the file under. A trailing
//! path separator marks the directory case, matching common shell tools.

use std::path::{Path, PathBuf};

/// A copy target resolved to its containing directory and final file path
///
/// Computed once per file-copy target and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDestination {
    /// Directory that must exist for the copy to succeed
    pub dir: PathBuf,
    /// Concrete path the file will be written to
    pub file_path: PathBuf,
}

/// Resolve a destination path for copying a single source file
///
/// If `dest` ends with a path separator it is treated as a directory and the
/// source's file name is joined under it; otherwise the last segment of
/// `dest` is the target file name and everything before it is the containing
/// directory. Pure string manipulation, no I/O.
pub fn resolve_dest(source: &Path, dest: &Path) -> ResolvedDestination {
    if ends_with_separator(dest) {
        let file_name = source
            .file_name()
            .map(ToOwned::to_owned)
            .unwrap_or_default();
        ResolvedDestination {
            dir: dest.to_path_buf(),
            file_path: dest.join(file_name),
        }
    } else {
        let dir = dest.parent().map(Path::to_path_buf).unwrap_or_default();
        ResolvedDestination {
            dir,
            file_path: dest.to_path_buf(),
        }
    }
}

fn ends_with_separator(path: &Path) -> bool {
    let raw = path.as_os_str().to_string_lossy();
    raw.ends_with('/') || (cfg!(windows) && raw.ends_with('\\'))
}
