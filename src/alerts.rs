use crate::models::filesystem::MountUsage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Critical,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Ok       => "OK",
            Status::Critical => "CRITICAL",
        }
    }

    /// Nagios plugin convention: 0 = OK, 2 = CRITICAL.
    pub fn exit_code(&self) -> i32 {
        match self {
            Status::Ok       => 0,
            Status::Critical => 2,
        }
    }
}

/// Exit code for a run that could not produce a report at all.
pub const EXIT_UNKNOWN: i32 = 3;

/// Result of one check run, in mount-table order.
#[derive(Debug)]
pub struct Report {
    pub mounts:        Vec<MountUsage>,
    pub threshold_pct: u32,
    pub status:        Status,
}

impl Report {
    /// True when at least one mount could not be sampled.
    pub fn is_degraded(&self) -> bool {
        self.mounts.iter().any(|m| m.pct_full.is_err())
    }
}

/// Critical when any sampled mount is at or above the threshold.
/// Mounts without a percentage never raise the alert on their own.
pub fn evaluate(mounts: Vec<MountUsage>, threshold_pct: u32) -> Report {
    let alert = mounts.iter()
        .filter_map(MountUsage::pct)
        .any(|pct| pct >= threshold_pct);
    let status = if alert { Status::Critical } else { Status::Ok };
    Report { mounts, threshold_pct, status }
}
