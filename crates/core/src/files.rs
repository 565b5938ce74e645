//! Checkpoint and transaction-log file records.
//!
//! Both records are built once during scanning and never mutated. The only
//! content read in the whole pipeline is the lazy lookup of a checkpoint's
//! oldest-log reference, performed by the selector for exactly one file.

use crate::error::{ArchiveError, Result};
use crate::sequence::{parse_segment_number, FileKind, SequenceKey};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Anything carrying a parsed [`SequenceKey`]; the seam the orderer sorts
/// through.
pub trait Sequenced {
    /// The key this file sorts by.
    fn sequence_key(&self) -> SequenceKey;
}

/// A checkpoint file (`chkpt.<epoch>.<view>.<seq>`).
#[derive(Debug, Clone)]
pub struct CheckpointFile {
    path: PathBuf,
    key: SequenceKey,
}

impl CheckpointFile {
    /// Build a record from a scanned path.
    ///
    /// Returns `None` when the filename has no sequence key; such files are
    /// not checkpoint candidates at all.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let key = SequenceKey::parse(name, FileKind::Checkpoint)?;
        Some(CheckpointFile { path, key })
    }

    /// Path of the checkpoint file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Filename, for operator-facing messages.
    pub fn file_name(&self) -> &str {
        name_of(&self.path)
    }

    /// Read the checkpoint's content and return the sequence key of the
    /// oldest transaction log it still requires.
    ///
    /// A checkpoint is line-oriented text with exactly one line of the form
    /// `log/<filename>`; the filename after the 4-character prefix names
    /// the oldest log the checkpoint depends on. A checkpoint without a
    /// parsable reference has ambiguous recovery semantics, so this is a
    /// fatal [`ArchiveError::NoLogReference`] rather than a guessed
    /// include-all or include-none policy.
    pub fn referenced_log_key(&self) -> Result<SequenceKey> {
        let file = File::open(&self.path)?;
        for line in BufReader::new(file).lines() {
            let line = line?;
            if let Some(referenced) = line.strip_prefix("log/") {
                return SequenceKey::parse(referenced.trim(), FileKind::TransactionLog)
                    .ok_or_else(|| ArchiveError::NoLogReference(self.path.clone()));
            }
        }
        Err(ArchiveError::NoLogReference(self.path.clone()))
    }
}

impl Sequenced for CheckpointFile {
    fn sequence_key(&self) -> SequenceKey {
        self.key
    }
}

/// A transaction-log file (`log.<epoch>.<view>.<seq>.<segment>`).
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
    key: SequenceKey,
    segment: Option<u64>,
}

impl LogFile {
    /// Build a record from a scanned path, or `None` if the filename has
    /// no sequence key. The segment number is extracted independently and
    /// its absence is tolerated; it only feeds gap diagnostics.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let key = SequenceKey::parse(name, FileKind::TransactionLog)?;
        let segment = parse_segment_number(name);
        Some(LogFile { path, key, segment })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Filename, for operator-facing messages.
    pub fn file_name(&self) -> &str {
        name_of(&self.path)
    }

    /// Trailing segment number, if the filename carried one.
    pub fn segment(&self) -> Option<u64> {
        self.segment
    }
}

impl Sequenced for LogFile {
    fn sequence_key(&self) -> SequenceKey {
        self.key
    }
}

#[cfg(test)]
impl LogFile {
    pub(crate) fn fixture(path: PathBuf, key: SequenceKey, segment: Option<u64>) -> Self {
        LogFile { path, key, segment }
    }
}

fn name_of(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}
