use std::borrow::Cow;

use serde::Serialize;

use crate::alerts::Report;
use crate::error::CheckError;

/// Render the plain-text report:
///
/// ```text
/// DISK(S) OK
/// /: 42% full
/// /home: 17% full
/// ```
pub fn generate(report: &Report) -> String {
    let mut out = format!("DISK(S) {}\n", report.status.label());
    for m in &report.mounts {
        match m.pct() {
            Some(pct) => out.push_str(&format!("{}: {}% full\n", m.mount.display(), pct)),
            None      => out.push_str(&format!("{}: unknown\n", m.mount.display())),
        }
    }
    out
}

#[derive(Debug, Serialize)]
struct JsonProblem {
    kind:    &'static str,
    message: String,
}

impl From<&CheckError> for JsonProblem {
    fn from(e: &CheckError) -> Self {
        Self { kind: e.code(), message: e.to_string() }
    }
}

#[derive(Debug, Serialize)]
struct JsonMount<'a> {
    mount:    Cow<'a, str>,
    pct_full: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error:    Option<JsonProblem>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    status:        &'static str,
    threshold_pct: u32,
    degraded:      bool,
    timestamp:     String,
    mounts:        Vec<JsonMount<'a>>,
    warnings:      Vec<JsonProblem>,
}

/// Render the report as pretty-printed JSON. `warnings` are the non-fatal
/// problems seen while reading the mount table.
pub fn generate_json(report: &Report, warnings: &[CheckError]) -> serde_json::Result<String> {
    let doc = JsonReport {
        status:        report.status.label(),
        threshold_pct: report.threshold_pct,
        degraded:      report.is_degraded(),
        timestamp:     chrono::Local::now().to_rfc3339(),
        mounts: report.mounts.iter().map(|m| JsonMount {
            mount:    m.mount.to_string_lossy(),
            pct_full: m.pct(),
            error:    m.error().map(JsonProblem::from),
        }).collect(),
        warnings: warnings.iter().map(JsonProblem::from).collect(),
    };
    serde_json::to_string_pretty(&doc)
}
