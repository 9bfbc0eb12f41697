use crate::alerts::{self, Report};
use crate::collectors::capacity::{self, StatsSource};
use crate::collectors::mounts;
use crate::config::CheckConfig;
use crate::error::CheckError;

/// A complete report plus the mount-table lines that had to be skipped.
/// Per-mount sampling failures stay on the report itself.
#[derive(Debug)]
pub struct CheckRun {
    pub report:   Report,
    pub warnings: Vec<CheckError>,
}

/// Enumerate, sample and evaluate. `Err` only when no report can be built.
pub fn run_check(cfg: &CheckConfig, source: &dyn StatsSource) -> Result<CheckRun, CheckError> {
    let list   = mounts::read_mounts(&cfg.mtab_path, &cfg.exclude)?;
    let usage  = capacity::sample_all(source, &list.mounts);
    let report = alerts::evaluate(usage, cfg.threshold_pct);
    Ok(CheckRun { report, warnings: list.warnings })
}
