//! Newest-first ordering of scanned files.
//!
//! An [`OrderedFileList`] is sorted descending by sequence key exactly once,
//! at construction, and immutable afterwards. Paths whose names fail to
//! parse are dropped here, silently: the scan prefix already restricted the
//! candidates, and unparsable stragglers (partial writes, editor droppings)
//! must not abort the run.

use crate::files::{CheckpointFile, LogFile, Sequenced};
use std::path::PathBuf;

/// An immutable file list sorted descending (newest first) by sequence key.
///
/// The sort is stable so that ties, while not expected operationally, keep
/// a reproducible order in tests.
#[derive(Debug)]
pub struct OrderedFileList<T> {
    files: Vec<T>,
}

impl<T: Sequenced> OrderedFileList<T> {
    /// Sort `files` newest-first and freeze the result.
    pub fn new(mut files: Vec<T>) -> Self {
        files.sort_by(|a, b| b.sequence_key().cmp(&a.sequence_key()));
        OrderedFileList { files }
    }

    /// Number of files in the list.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate newest-first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.files.iter()
    }

    /// The full newest-first slice.
    pub fn as_slice(&self) -> &[T] {
        &self.files
    }
}

/// Parse and order checkpoint candidates. Unparsable names are excluded
/// from candidacy.
pub fn ordered_checkpoints(paths: Vec<PathBuf>) -> OrderedFileList<CheckpointFile> {
    OrderedFileList::new(paths.into_iter().filter_map(CheckpointFile::from_path).collect())
}

/// Parse and order transaction logs. Unparsable names are excluded from
/// ordering.
pub fn ordered_logs(paths: Vec<PathBuf>) -> OrderedFileList<LogFile> {
    OrderedFileList::new(paths.into_iter().filter_map(LogFile::from_path).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SequenceKey;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|n| PathBuf::from(format!("/meta/{n}"))).collect()
    }

    #[test]
    fn checkpoints_sort_descending() {
        let list = ordered_checkpoints(paths(&[
            "chkpt.0.0.2",
            "chkpt.1.0.1",
            "chkpt.0.0.10",
            "chkpt.0.0.9",
        ]));
        let keys: Vec<SequenceKey> = list.iter().map(|c| c.sequence_key()).collect();
        assert_eq!(
            keys,
            vec![
                SequenceKey::new(1, 0, 1),
                SequenceKey::new(0, 0, 10),
                SequenceKey::new(0, 0, 9),
                SequenceKey::new(0, 0, 2),
            ]
        );
    }

    #[test]
    fn ordering_is_a_permutation_of_parsable_input() {
        let list = ordered_logs(paths(&["log.0.0.3.3", "log.0.0.1.1", "log.0.0.2.2"]));
        assert_eq!(list.len(), 3);
        for pair in list.as_slice().windows(2) {
            assert!(pair[0].sequence_key() > pair[1].sequence_key());
        }
    }

    #[test]
    fn unparsable_names_are_dropped_silently() {
        let list = ordered_checkpoints(paths(&["chkpt.0.0.1", "chkpt.tmp", "chkpt.0.0"]));
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice()[0].file_name(), "chkpt.0.0.1");
    }

    #[test]
    fn empty_input_orders_to_empty_list() {
        let list = ordered_logs(Vec::new());
        assert!(list.is_empty());
    }
}
