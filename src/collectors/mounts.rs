use std::ffi::OsString;
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::{Path, PathBuf};

use memchr::memmem;

use crate::error::CheckError;

/// Mount points kept after filtering, plus the lines that could not be read.
#[derive(Debug, Default)]
pub struct MountList {
    pub mounts:   Vec<PathBuf>,
    pub warnings: Vec<CheckError>,
}

/// Read and filter the mount table at `path`.
///
/// Failing to read the table at all is fatal; bad lines are skipped and
/// returned as warnings. Mount paths are raw bytes, not necessarily UTF-8.
pub fn read_mounts(path: &Path, exclude: &[String]) -> Result<MountList, CheckError> {
    let content = std::fs::read(path).map_err(|source| CheckError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_mount_table(&content, exclude))
}

/// Parse mtab-format bytes, keeping table order.
pub fn parse_mount_table(content: &[u8], exclude: &[String]) -> MountList {
    let mut list = MountList::default();

    for (idx, line) in content.split(|&b| b == b'\n').enumerate() {
        let mut fields = line
            .split(|b| b.is_ascii_whitespace())
            .filter(|f| !f.is_empty());
        if fields.next().is_none() { continue; }
        let Some(field) = fields.next() else {
            list.warnings.push(CheckError::LineParse {
                line_no: idx + 1,
                line:    String::from_utf8_lossy(line).into_owned(),
            });
            continue;
        };
        let mount = unescape_mount_field(field);
        if is_excluded(&mount, exclude) { continue; }
        list.mounts.push(mount);
    }
    list
}

/// Substring match anywhere in the path: "nfs" also drops "/data/nfs-backup".
pub fn is_excluded(mount: &Path, exclude: &[String]) -> bool {
    let hay = mount.as_os_str().as_bytes();
    exclude.iter().any(|pat| memmem::find(hay, pat.as_bytes()).is_some())
}

/// Decode the kernel's `\NNN` octal escapes (`\040` is a space).
fn unescape_mount_field(raw: &[u8]) -> PathBuf {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'\\' && i + 4 <= raw.len() {
            let digits = &raw[i + 1..i + 4];
            if digits.iter().all(|d| (b'0'..=b'7').contains(d)) {
                let val = u32::from(digits[0] - b'0') * 64
                        + u32::from(digits[1] - b'0') * 8
                        + u32::from(digits[2] - b'0');
                if let Ok(byte) = u8::try_from(val) {
                    out.push(byte);
                    i += 4;
                    continue;
                }
            }
        }
        out.push(raw[i]);
        i += 1;
    }
    PathBuf::from(OsString::from_vec(out))
}

#[cfg(test)]
pub(crate) fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}
