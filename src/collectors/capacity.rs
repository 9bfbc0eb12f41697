use std::path::{Path, PathBuf};

use crate::error::CheckError;
use crate::models::filesystem::{FilesystemStats, MountUsage};

/// Where block counts come from. Production code uses [`Statvfs`].
pub trait StatsSource {
    fn block_stats(&self, mount: &Path) -> nix::Result<FilesystemStats>;
}

/// Queries the kernel via statvfs(2).
#[derive(Debug, Clone, Copy, Default)]
pub struct Statvfs;

impl StatsSource for Statvfs {
    fn block_stats(&self, mount: &Path) -> nix::Result<FilesystemStats> {
        use nix::sys::statvfs::statvfs;
        let stat = statvfs(mount)?;
        Ok(FilesystemStats::new(stat.blocks() as u64, stat.blocks_free() as u64))
    }
}

/// Sample one mount. Failures are carried in the result, never turned into 0%.
pub fn sample(source: &dyn StatsSource, mount: &Path) -> MountUsage {
    let pct_full = match source.block_stats(mount) {
        Ok(stats) => stats.use_pct().ok_or_else(|| CheckError::ZeroBlocks {
            mount: mount.to_path_buf(),
        }),
        Err(errno) => Err(CheckError::Query { mount: mount.to_path_buf(), source: errno }),
    };
    MountUsage { mount: mount.to_path_buf(), pct_full }
}

/// Sample every mount in order, one at a time.
pub fn sample_all(source: &dyn StatsSource, mounts: &[PathBuf]) -> Vec<MountUsage> {
    mounts.iter().map(|m| sample(source, m)).collect()
}


#[cfg(test)]
mod tests {
    use super::fake::FixedStats;
    use super::*;
    use crate::collectors::mounts::paths;
    use nix::errno::Errno;

    #[test]
    fn samples_known_mount() {
        let src = FixedStats::default().with("/", 1000, 50);
        let usage = sample(&src, Path::new("/"));
        assert_eq!(usage.mount, Path::new("/"));
        assert_eq!(usage.pct(), Some(95));
    }

    #[test]
    fn query_failure_is_not_zero_percent() {
        let src = FixedStats::default().failing("/mnt/gone", Errno::EACCES);
        let usage = sample(&src, Path::new("/mnt/gone"));
        assert_eq!(usage.pct(), None);
        assert!(matches!(
            usage.error(),
            Some(CheckError::Query { mount, source: Errno::EACCES }) if mount == Path::new("/mnt/gone")
        ));
    }

    #[test]
    fn zero_blocks_is_reported() {
        let src = FixedStats::default().with("/empty", 0, 0);
        let usage = sample(&src, Path::new("/empty"));
        assert!(matches!(usage.error(), Some(CheckError::ZeroBlocks { .. })));
    }

    #[test]
    fn sample_all_keeps_order() {
        let src = FixedStats::default()
            .with("/home", 1000, 500)
            .with("/", 1000, 50);
        let mounts = paths(&["/", "/home"]);
        let out = sample_all(&src, &mounts);
        let names: Vec<PathBuf> = out.iter().map(|u| u.mount.clone()).collect();
        assert_eq!(names, mounts);
    }

    #[test]
    fn statvfs_on_root_succeeds() {
        let stats = Statvfs.block_stats(Path::new("/")).expect("statvfs /");
        assert!(stats.free_blocks <= stats.total_blocks);
    }
}
