//! Local file export with overwrite protection.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::errors::{CirError, Result};

/// What a download call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The payload was written to `path`.
    Written { path: PathBuf, bytes: usize },

    /// The service had no answer; nothing was written.
    NoResult,
}

impl DownloadOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

/// Fail early when `path` exists and may not be replaced.
pub(crate) fn ensure_writable(path: &Path, overwrite: bool) -> Result<()> {
    if !overwrite && path.exists() {
        return Err(CirError::FileExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Write text so that it ends with exactly one newline.
pub(crate) fn write_text(path: &Path, text: &str, overwrite: bool) -> Result<DownloadOutcome> {
    let content = with_single_trailing_newline(text);
    write_bytes(path, content.as_bytes(), overwrite)
}

/// Write raw bytes. Without `overwrite` the file must not exist yet, even if
/// it appeared after [`ensure_writable`] ran.
pub(crate) fn write_bytes(path: &Path, bytes: &[u8], overwrite: bool) -> Result<DownloadOutcome> {
    let mut file = if overwrite {
        File::create(path)?
    } else {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => CirError::FileExists {
                    path: path.to_path_buf(),
                },
                _ => CirError::Io(e),
            })?
    };
    file.write_all(bytes)?;

    Ok(DownloadOutcome::Written {
        path: path.to_path_buf(),
        bytes: bytes.len(),
    })
}

fn with_single_trailing_newline(text: &str) -> String {
    let mut content = text
        .trim_end_matches(|c| c == '\n' || c == '\r')
        .to_string();
    content.push('\n');
    content
}
