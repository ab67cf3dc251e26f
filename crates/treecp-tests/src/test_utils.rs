//! Unified test utilities for treecp integration tests
//!
//! This module provides common helpers used across the test files to ensure
//! consistency and reduce code duplication.

use std::fs;
use std::path::{Path, PathBuf};

/// Install a test subscriber for tracing output, once per process
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Create a file with the given content, creating parent directories
pub fn create_test_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// Generate deterministic pseudo-random content of the given size
pub fn generate_test_data(size: usize) -> Vec<u8> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut data = Vec::with_capacity(size);
    let mut hasher = DefaultHasher::new();
    for i in 0..size {
        i.hash(&mut hasher);
        data.push((hasher.finish() % 256) as u8);
    }
    data
}

/// Create a directory structure with files of different sizes
///
/// Returns the relative paths of every file created.
pub fn create_test_directory_structure(base_path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let sub_dirs = ["subdir1", "subdir2", "subdir1/nested", "empty"];
    for dir in &sub_dirs {
        fs::create_dir_all(base_path.join(dir))?;
    }

    let files = [
        ("small.txt", 1024),
        ("medium.txt", 64 * 1024),
        ("subdir1/file1.txt", 2048),
        ("subdir2/file2.txt", 4096),
        ("subdir1/nested/file3.txt", 8192),
    ];

    let mut created = Vec::new();
    for (file_path, size) in &files {
        let full_path = base_path.join(file_path);
        fs::write(&full_path, generate_test_data(*size))?;
        created.push(PathBuf::from(file_path));
    }
    Ok(created)
}

/// Assert that two directory trees are isomorphic: same relative paths,
/// same file byte content
pub fn assert_trees_identical(expected: &Path, actual: &Path) {
    let mut expected_entries = collect_entries(expected, expected);
    let mut actual_entries = collect_entries(actual, actual);
    expected_entries.sort();
    actual_entries.sort();
    assert_eq!(
        expected_entries, actual_entries,
        "tree shapes differ between {} and {}",
        expected.display(),
        actual.display()
    );

    for relative in &expected_entries {
        let expected_path = expected.join(relative);
        if expected_path.is_file() {
            let expected_bytes = fs::read(&expected_path).unwrap();
            let actual_bytes = fs::read(actual.join(relative)).unwrap();
            assert_eq!(
                expected_bytes,
                actual_bytes,
                "content differs for {}",
                relative.display()
            );
        }
    }
}

fn collect_entries(root: &Path, current: &Path) -> Vec<PathBuf> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(current).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        entries.push(path.strip_prefix(root).unwrap().to_path_buf());
        if path.is_dir() {
            entries.extend(collect_entries(root, &path));
        }
    }
    entries
}
