//! Concurrent and blocking file tree copy engine
//!
//! This crate copies a file or a directory tree from a source path to a
//! destination path. It provides:
//!
//! - **Concurrent mode**: [`copy_tree`] overlaps I/O across every entry of a
//!   subtree on the tokio runtime, unbounded by default, with an optional
//!   concurrency cap
//! - **Blocking mode**: [`copy_tree_sync`] walks depth-first in listing
//!   order, one operation at a time
//! - **Destination resolution**: a trailing path separator marks the
//!   destination as a directory for single-file copies
//! - **Replace policy**: existing destination files are overwritten by
//!   default or skipped with [`CopyOptions::with_replace`]
//!
//! Both modes deliver exactly one terminal outcome per invocation: the
//! aggregated [`CopyStats`] on success, or the first error encountered. A
//! failure midway leaves a partially copied destination tree; there is no
//! rollback and no cancellation of operations already in flight.
//!
//! # Examples
//!
//! ```no_run
//! use treecp_engine::{copy_tree, CopyOptions};
//!
//! # async fn example() -> treecp_types::Result<()> {
//! let options = CopyOptions::new().with_replace(false);
//! let stats = copy_tree("assets", "dist/assets", &options).await?;
//! println!("{} copied, {} skipped", stats.files_copied, stats.files_skipped);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod dest;
mod file;
pub mod options;
mod sync;
mod tree;

// Re-export the public surface
pub use dest::{resolve_dest, ResolvedDestination};
pub use options::CopyOptions;
pub use sync::copy_tree_sync;
pub use tree::copy_tree;

// Re-export shared types for convenience
pub use treecp_types::{CopyStats, Error, ErrorKind, Result};
