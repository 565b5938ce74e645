//! Minimal consistent file-set selection.
//!
//! Given the ordered checkpoint and log lists and a retention count, the
//! selector keeps the newest `retention` checkpoints and every transaction
//! log at or above the oldest retained checkpoint's referenced log. That
//! set is the minimum a recovery process needs to reconstruct state up to
//! any retained checkpoint.

use crate::error::{ArchiveError, Result};
use crate::files::{CheckpointFile, LogFile, Sequenced};
use crate::order::OrderedFileList;
use crate::sequence::SequenceKey;
use std::num::NonZeroUsize;
use tracing::debug;

/// The computed archive set. Immutable once built.
#[derive(Debug)]
pub struct ArchiveSelection {
    retained_checkpoints: Vec<CheckpointFile>,
    required_logs: Vec<LogFile>,
    floor: SequenceKey,
}

impl ArchiveSelection {
    /// Retained checkpoints, newest first. Never empty.
    pub fn retained_checkpoints(&self) -> &[CheckpointFile] {
        &self.retained_checkpoints
    }

    /// The oldest checkpoint kept; recovery starts here.
    pub fn oldest_retained(&self) -> &CheckpointFile {
        &self.retained_checkpoints[self.retained_checkpoints.len() - 1]
    }

    /// Transaction logs required from the oldest retained checkpoint
    /// forward, oldest first (replay order).
    pub fn required_logs(&self) -> &[LogFile] {
        &self.required_logs
    }

    /// Sequence key of the oldest retained checkpoint's referenced log.
    pub fn floor(&self) -> SequenceKey {
        self.floor
    }
}

/// Select the archive set for the given retention count.
///
/// Fails with [`ArchiveError::NoCheckpoints`] when there is nothing to
/// archive, and with [`ArchiveError::NoLogReference`] when the oldest
/// retained checkpoint does not name its oldest required log.
pub fn select(
    checkpoints: &OrderedFileList<CheckpointFile>,
    logs: &OrderedFileList<LogFile>,
    retention: NonZeroUsize,
) -> Result<ArchiveSelection> {
    if checkpoints.is_empty() {
        return Err(ArchiveError::NoCheckpoints);
    }

    let keep = retention.get().min(checkpoints.len());
    let retained_checkpoints: Vec<CheckpointFile> = checkpoints.as_slice()[..keep].to_vec();
    let oldest = &retained_checkpoints[keep - 1];

    let floor = oldest.referenced_log_key()?;
    debug!(
        "retaining {} of {} checkpoints, oldest {} floors logs at {}",
        keep,
        checkpoints.len(),
        oldest.file_name(),
        floor
    );

    // The ordered list is newest-first; reverse the qualifying logs into
    // replay order.
    let mut required_logs: Vec<LogFile> = logs
        .iter()
        .filter(|log| log.sequence_key() >= floor)
        .cloned()
        .collect();
    required_logs.reverse();

    Ok(ArchiveSelection {
        retained_checkpoints,
        required_logs,
        floor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{ordered_checkpoints, ordered_logs};
    use std::fs::File;
    use std::io::Write;
    use std::num::NonZeroUsize;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn retention(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    /// Checkpoints chkpt.0.0.1..=N on disk, each referencing log.0.0.<s>.<s>.
    fn checkpoint_dir(count: u64) -> (TempDir, OrderedFileList<CheckpointFile>) {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();
        for s in 1..=count {
            let path = dir.path().join(format!("chkpt.0.0.{s}"));
            let mut f = File::create(&path).unwrap();
            writeln!(f, "committed/0.0.{s}").unwrap();
            writeln!(f, "log/log.0.0.{s}.{s}").unwrap();
            paths.push(path);
        }
        let list = ordered_checkpoints(paths);
        (dir, list)
    }

    fn log_list(seqs: &[u64]) -> OrderedFileList<LogFile> {
        ordered_logs(
            seqs.iter()
                .map(|s| PathBuf::from(format!("/meta/log.0.0.{s}.{s}")))
                .collect(),
        )
    }

    #[test]
    fn empty_checkpoint_list_fails() {
        let logs = log_list(&[1, 2]);
        let checkpoints = ordered_checkpoints(Vec::new());
        assert!(matches!(
            select(&checkpoints, &logs, retention(1)),
            Err(ArchiveError::NoCheckpoints)
        ));
    }

    #[test]
    fn retention_beyond_available_keeps_everything() {
        let (_dir, checkpoints) = checkpoint_dir(3);
        let logs = log_list(&[1, 2, 3, 4, 5]);

        let selection = select(&checkpoints, &logs, retention(10)).unwrap();
        assert_eq!(selection.retained_checkpoints().len(), 3);
        assert_eq!(selection.oldest_retained().file_name(), "chkpt.0.0.1");
    }

    #[test]
    fn retention_slices_newest_first() {
        let (_dir, checkpoints) = checkpoint_dir(5);
        let logs = log_list(&[1, 2, 3, 4, 5]);

        let selection = select(&checkpoints, &logs, retention(2)).unwrap();
        let names: Vec<&str> = selection
            .retained_checkpoints()
            .iter()
            .map(|c| c.file_name())
            .collect();
        assert_eq!(names, ["chkpt.0.0.5", "chkpt.0.0.4"]);
        assert_eq!(selection.oldest_retained().file_name(), "chkpt.0.0.4");
    }

    #[test]
    fn required_logs_honor_the_floor() {
        let (_dir, checkpoints) = checkpoint_dir(3);
        let logs = log_list(&[1, 2, 3, 4, 5]);

        // Oldest retained is chkpt.0.0.3, which references log 0.0.3.
        let selection = select(&checkpoints, &logs, retention(1)).unwrap();
        assert_eq!(selection.floor(), SequenceKey::new(0, 0, 3));
        let names: Vec<&str> = selection.required_logs().iter().map(|l| l.file_name()).collect();
        assert_eq!(names, ["log.0.0.3.3", "log.0.0.4.4", "log.0.0.5.5"]);
    }

    #[test]
    fn required_logs_come_back_in_replay_order() {
        let (_dir, checkpoints) = checkpoint_dir(2);
        let logs = log_list(&[4, 1, 3, 2]);

        let selection = select(&checkpoints, &logs, retention(2)).unwrap();
        let keys: Vec<SequenceKey> =
            selection.required_logs().iter().map(|l| l.sequence_key()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn checkpoint_without_reference_fails_selection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chkpt.0.0.1");
        File::create(&path)
            .unwrap()
            .write_all(b"committed/0.0.1\n")
            .unwrap();
        let checkpoints = ordered_checkpoints(vec![path]);
        let logs = log_list(&[1]);

        assert!(matches!(
            select(&checkpoints, &logs, retention(1)),
            Err(ArchiveError::NoLogReference(_))
        ));
    }
}
