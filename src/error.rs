use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

/// Everything that can go wrong during one check run.
///
/// `SourceUnavailable` and `Config` are fatal: no report can be built.
/// The remaining kinds are collected as warnings next to a complete report.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("cannot read mount table {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("mount table line {line_no} has no mount point field: {line:?}")]
    LineParse { line_no: usize, line: String },

    #[error("statvfs {mount}: {source}")]
    Query {
        mount: PathBuf,
        #[source]
        source: Errno,
    },

    #[error("{mount} reports zero total blocks")]
    ZeroBlocks { mount: PathBuf },

    #[error("invalid configuration {path}: {details}")]
    Config { path: PathBuf, details: String },
}

impl CheckError {
    /// Short machine-parseable kind, used in JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            CheckError::SourceUnavailable { .. } => "source_unavailable",
            CheckError::LineParse { .. }         => "line_parse",
            CheckError::Query { .. }             => "query",
            CheckError::ZeroBlocks { .. }        => "zero_blocks",
            CheckError::Config { .. }            => "config",
        }
    }
}
