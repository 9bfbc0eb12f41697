use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::CheckError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// A filesystem at or above this percentage full makes the check critical.
    pub threshold_pct: u32,
    /// Mount points containing any of these substrings are skipped.
    pub exclude: Vec<String>,
    /// mtab-format file listing mounted filesystems.
    pub mtab_path: PathBuf,
}

// ── Defaults ─────────────────────────────────────────────────────────

pub const DEFAULT_THRESHOLD_PCT: u32 = 90;
pub const DEFAULT_MTAB: &str = "/etc/mtab";
pub const DEFAULT_EXCLUDE: &[&str] = &["/proc", "/sys", "/dev/pts", "nfs"];

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            threshold_pct: DEFAULT_THRESHOLD_PCT,
            exclude:       DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            mtab_path:     PathBuf::from(DEFAULT_MTAB),
        }
    }
}

// ── Load ──────────────────────────────────────────────────────────────

impl Config {
    /// Load from `explicit` if given, else from the per-user config file.
    ///
    /// Only a missing *default* file falls back to built-in defaults; an
    /// explicit path that does not exist, or any file that fails to parse or
    /// validate, is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CheckError> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => match Config::config_path() {
                Some(p) => (p, false),
                None    => return Ok(Config::default()),
            },
        };

        let text = match fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) if e.kind() == ErrorKind::NotFound && !required => return Ok(Config::default()),
            Err(e) => return Err(CheckError::Config { path, details: e.to_string() }),
        };
        Config::from_toml(&text, &path)
    }

    pub fn from_toml(text: &str, path: &Path) -> Result<Self, CheckError> {
        let cfg: Config = toml::from_str(text).map_err(|e| CheckError::Config {
            path:    path.to_path_buf(),
            details: e.message().to_string(),
        })?;
        cfg.check.validate(path)?;
        Ok(cfg)
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("diskcheck").join("diskcheck.toml"))
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl CheckConfig {
    pub fn validate(&self, origin: &Path) -> Result<(), CheckError> {
        if !(1..=100).contains(&self.threshold_pct) {
            return Err(CheckError::Config {
                path:    origin.to_path_buf(),
                details: format!("threshold_pct must be between 1 and 100, got {}", self.threshold_pct),
            });
        }
        Ok(())
    }
}
