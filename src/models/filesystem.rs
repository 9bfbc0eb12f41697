use std::path::PathBuf;

use crate::error::CheckError;

/// Block counts for one mounted filesystem, as reported by statvfs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilesystemStats {
    pub total_blocks: u64,
    pub free_blocks:  u64,
}

impl FilesystemStats {
    pub fn new(total_blocks: u64, free_blocks: u64) -> Self {
        Self { total_blocks, free_blocks }
    }

    /// Percentage of blocks in use, rounded half-up.
    ///
    /// `None` when the filesystem reports zero total blocks. A free count above
    /// the total saturates to 0 instead of wrapping.
    pub fn use_pct(&self) -> Option<u32> {
        if self.total_blocks == 0 { return None; }
        let total = self.total_blocks as f64;
        let used  = total - self.free_blocks as f64;
        Some((used / total * 100.0 + 0.5) as u32)
    }
}

/// One mount point and the outcome of sampling it.
#[derive(Debug)]
pub struct MountUsage {
    pub mount:    PathBuf,
    pub pct_full: Result<u32, CheckError>,
}

impl MountUsage {
    #[cfg(test)]
    pub fn known(mount: impl Into<PathBuf>, pct: u32) -> Self {
        Self { mount: mount.into(), pct_full: Ok(pct) }
    }

    pub fn pct(&self) -> Option<u32> {
        self.pct_full.as_ref().ok().copied()
    }

    pub fn error(&self) -> Option<&CheckError> {
        self.pct_full.as_ref().err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(FilesystemStats::new(100, 50).use_pct(), Some(50));
        assert_eq!(FilesystemStats::new(100, 9).use_pct(), Some(91));
        assert_eq!(FilesystemStats::new(3, 1).use_pct(), Some(67));
        assert_eq!(FilesystemStats::new(200, 1).use_pct(), Some(100));
        // 0.5% used rounds up
        assert_eq!(FilesystemStats::new(200, 199).use_pct(), Some(1));
    }

    #[test]
    fn all_free_is_empty() {
        assert_eq!(FilesystemStats::new(4096, 4096).use_pct(), Some(0));
    }

    #[test]
    fn zero_total_has_no_percentage() {
        assert_eq!(FilesystemStats::new(0, 0).use_pct(), None);
        assert_eq!(FilesystemStats::default().use_pct(), None);
    }

    #[test]
    fn free_above_total_does_not_wrap() {
        assert_eq!(FilesystemStats::new(10, 20).use_pct(), Some(0));
    }
}
