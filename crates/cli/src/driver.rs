//! External archiver invocation.
//!
//! The engine never touches the archive byte format; it hands the computed
//! file list to an external archiver (tar by default) and streams the
//! result to stdout. The archiver's exit code becomes this process's exit
//! code, with no retries.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Execute `<archiver> -c -f - <files...>` with stdout inherited so the
/// archive stream reaches the caller's stdout. Returns the subprocess exit
/// code (or 1 if it was killed by a signal).
pub fn run_archiver(archiver: &Path, files: &[PathBuf]) -> io::Result<i32> {
    debug!(
        "invoking {} on {} files",
        archiver.display(),
        files.len()
    );
    let status = Command::new(archiver)
        .arg("-c")
        .arg("-f")
        .arg("-")
        .args(files)
        .stdin(Stdio::null())
        .status()?;
    Ok(status.code().unwrap_or(1))
}
