//! Directory scanning.
//!
//! Lists a metadata directory and keeps the entries whose names start with
//! the literal prefix for the file kind being scanned. No recursion, no
//! special symlink handling, no stat calls; ordering is left entirely to
//! the orderer.

use crate::error::{ArchiveError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Check that a directory can be listed before any scanning proceeds.
pub fn verify_dir(dir: &Path) -> Result<()> {
    fs::read_dir(dir)
        .map(|_| ())
        .map_err(|source| ArchiveError::DirectoryAccess {
            path: dir.to_path_buf(),
            source,
        })
}

/// List `dir` and return the paths whose filename starts with `prefix`.
pub fn scan(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| ArchiveError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ArchiveError::DirectoryAccess {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with(prefix) {
            matches.push(entry.path());
        }
    }

    debug!(
        "scanned {}: {} entries match prefix {:?}",
        dir.display(),
        matches.len(),
        prefix
    );
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn keeps_only_prefixed_entries() {
        let dir = TempDir::new().unwrap();
        for name in ["chkpt.0.0.1", "chkpt.0.0.2", "latest", "lost+found", "chk"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let mut names: Vec<String> = scan(dir.path(), "chkpt")
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        names.sort();
        assert_eq!(names, ["chkpt.0.0.1", "chkpt.0.0.2"]);
    }

    #[test]
    fn log_prefix_does_not_match_the_last_pointer() {
        let dir = TempDir::new().unwrap();
        for name in ["log.0.0.1.1", "last"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let names = scan(dir.path(), "log").unwrap();
        assert_eq!(names.len(), 1);
        assert!(names[0].ends_with("log.0.0.1.1"));
    }

    #[test]
    fn missing_directory_is_a_directory_access_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            scan(&missing, "chkpt"),
            Err(ArchiveError::DirectoryAccess { .. })
        ));
        assert!(matches!(
            verify_dir(&missing),
            Err(ArchiveError::DirectoryAccess { .. })
        ));
    }

    #[test]
    fn verify_dir_accepts_a_listable_directory() {
        let dir = TempDir::new().unwrap();
        assert!(verify_dir(dir.path()).is_ok());
    }
}
