//! Copy statistics for treecp
//!
//! A successful tree copy reports what it did through [`CopyStats`]. In the
//! concurrent engine each in-flight subtask produces its own instance and the
//! results are merged on completion.

use std::time::Duration;

/// Transfer rate in bytes per second
pub type TransferRate = f64;

/// File copy statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyStats {
    /// Number of files copied
    pub files_copied: u64,
    /// Number of files left untouched because the destination already existed
    pub files_skipped: u64,
    /// Number of destination directories newly created
    pub directories_created: u64,
    /// Total bytes copied
    pub bytes_copied: u64,
    /// Total duration of the operation
    pub duration: Duration,
}

impl CopyStats {
    /// Create a new empty statistics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate the overall transfer rate
    pub fn transfer_rate(&self) -> TransferRate {
        if self.duration.as_secs_f64() > 0.0 {
            self.bytes_copied as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Merge statistics from another instance
    pub fn merge(&mut self, other: &CopyStats) {
        self.files_copied += other.files_copied;
        self.files_skipped += other.files_skipped;
        self.directories_created += other.directories_created;
        self.bytes_copied += other.bytes_copied;
        self.duration += other.duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_stats_creation() {
        let stats = CopyStats::new();
        assert_eq!(stats.files_copied, 0);
        assert_eq!(stats.bytes_copied, 0);
        assert_eq!(stats.transfer_rate(), 0.0);
    }

    #[test]
    fn test_copy_stats_merge() {
        let mut stats1 = CopyStats::new();
        stats1.files_copied = 5;
        stats1.bytes_copied = 1000;
        stats1.directories_created = 2;

        let mut stats2 = CopyStats::new();
        stats2.files_copied = 3;
        stats2.files_skipped = 1;
        stats2.bytes_copied = 500;

        stats1.merge(&stats2);
        assert_eq!(stats1.files_copied, 8);
        assert_eq!(stats1.files_skipped, 1);
        assert_eq!(stats1.directories_created, 2);
        assert_eq!(stats1.bytes_copied, 1500);
    }

    #[test]
    fn test_transfer_rate() {
        let stats = CopyStats {
            bytes_copied: 2048,
            duration: Duration::from_secs(2),
            ..Default::default()
        };
        assert_eq!(stats.transfer_rate(), 1024.0);
    }
}
