//! Core type system and error handling for treecp
//!
//! This crate provides the foundational types shared by the treecp engine:
//!
//! - **Error handling**: Structured error types with path context and
//!   coarse-grained kinds
//! - **Statistics**: Per-invocation copy statistics with merge support for
//!   concurrent subtasks
//!
//! # Features
//!
//! - `serde`: Enable serialization support
//!
//! # Examples
//!
//! ```rust
//! use treecp_types::{CopyStats, Result};
//!
//! fn example_operation() -> Result<CopyStats> {
//!     let mut stats = CopyStats::new();
//!     stats.files_copied = 10;
//!     stats.bytes_copied = 1024 * 1024; // 1MB
//!     Ok(stats)
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod result;
pub mod stats;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
pub use result::Result;
pub use stats::{CopyStats, TransferRate};
