//! Error types and handling for treecp
//!
//! This module provides the error types produced by tree-copy operations.
//! Errors carry the path they refer to where one is known, and every error
//! maps onto a coarse [`ErrorKind`] for categorization.

use std::path::{Path, PathBuf};

/// Main error type for treecp operations
#[derive(thiserror::Error, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// Invalid input to a top-level entry point, detected before any I/O
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid input
        message: String,
    },

    /// Source path does not exist
    #[error("source not found: {path}")]
    SourceNotFound {
        /// Path to the source that was not found
        path: PathBuf,
    },

    /// Source file exists but cannot be read
    #[error("cannot read source {path}: {message}")]
    SourceUnreadable {
        /// Path to the unreadable source
        path: PathBuf,
        /// Error message from the underlying I/O operation
        message: String,
    },

    /// Source directory cannot be enumerated
    #[error("cannot list directory {path}: {message}")]
    ListingFailure {
        /// Path to the directory that could not be listed
        path: PathBuf,
        /// Error message from the underlying I/O operation
        message: String,
    },

    /// Destination directory creation or file write failed
    #[error("cannot write destination {path}: {message}")]
    DestinationUnwritable {
        /// Path to the destination that could not be written
        path: PathBuf,
        /// Error message from the underlying I/O operation
        message: String,
    },

    /// I/O error without a more specific classification
    #[error("I/O error: {message}")]
    Io {
        /// Error message from the I/O operation
        message: String,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Other {
        /// Custom error message
        message: String,
    },
}

/// Error kind for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid input to an entry point
    InvalidArgument,
    /// Source missing
    SourceNotFound,
    /// Source unreadable
    SourceUnreadable,
    /// Directory listing failure
    Listing,
    /// Destination unwritable
    DestinationUnwritable,
    /// Uncategorized I/O error
    Io,
    /// Other errors
    Other,
}

impl Error {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            Self::SourceUnreadable { .. } => ErrorKind::SourceUnreadable,
            Self::ListingFailure { .. } => ErrorKind::Listing,
            Self::DestinationUnwritable { .. } => ErrorKind::DestinationUnwritable,
            Self::Io { .. } => ErrorKind::Io,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// The path this error refers to, if one is known
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::SourceNotFound { path }
            | Self::SourceUnreadable { path, .. }
            | Self::ListingFailure { path, .. }
            | Self::DestinationUnwritable { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Create a new invalid-argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new source-unreadable error
    pub fn source_unreadable<P: Into<PathBuf>>(path: P, error: &std::io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            message: error.to_string(),
        }
    }

    /// Create a new listing-failure error
    pub fn listing_failure<P: Into<PathBuf>>(path: P, error: &std::io::Error) -> Self {
        Self::ListingFailure {
            path: path.into(),
            message: error.to_string(),
        }
    }

    /// Create a new destination-unwritable error
    pub fn destination_unwritable<P: Into<PathBuf>>(path: P, error: &std::io::Error) -> Self {
        Self::DestinationUnwritable {
            path: path.into(),
            message: error.to_string(),
        }
    }

    /// Classify a stat failure on a source path
    ///
    /// A missing source maps to [`Error::SourceNotFound`]; any other failure
    /// maps to [`Error::SourceUnreadable`].
    pub fn source_stat<P: Into<PathBuf>>(path: P, error: &std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::SourceNotFound { path: path.into() }
        } else {
            Self::source_unreadable(path, error)
        }
    }

    /// Create a new generic error
    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
