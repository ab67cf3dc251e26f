//! Copy options for customizing tree copy behavior

use std::num::NonZeroUsize;

/// Options controlling a single tree-copy invocation
///
/// Options are immutable for the lifetime of an invocation and are passed
/// explicitly to every recursive call; the engine never mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyOptions {
    /// Overwrite existing destination files
    ///
    /// When `false`, an existing destination file is left untouched and the
    /// entry is reported as skipped rather than as an error.
    pub replace: bool,
    /// Maximum number of entry operations in flight at once
    ///
    /// `None` preserves the default behavior: every file and directory in a
    /// subtree is dispatched for concurrent I/O with no throttling. Setting a
    /// bound gates entry dispatch through a semaphore, capping simultaneous
    /// open file descriptors on wide trees. Ignored in blocking mode.
    pub max_concurrency: Option<NonZeroUsize>,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            replace: true,
            max_concurrency: None,
        }
    }
}

impl CopyOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether existing destination files are overwritten
    pub fn with_replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    /// Bound the number of concurrently executing entry operations
    pub fn with_max_concurrency(mut self, max: NonZeroUsize) -> Self {
        self.max_concurrency = Some(max);
        self
    }
}
