//! treecp integration testing suite
//!
//! This crate holds the cross-crate integration tests for treecp and the
//! shared helpers they use to build and compare file trees.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Unified test utilities
///
/// Common helpers for building scratch file trees and verifying that two
/// trees are isomorphic.
pub mod test_utils;
