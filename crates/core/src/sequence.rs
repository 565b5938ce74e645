//! Sequence keys parsed from checkpoint and transaction-log filenames.
//!
//! Checkpoints are named `chkpt.<epoch>.<view>.<seq>` and transaction logs
//! `log.<epoch>.<view>.<seq>.<segment>`. The three-integer triple is the
//! log-sequence number (LSN) that establishes the total recovery order; the
//! trailing segment number on log files is a separate, coarser counter used
//! only for gap diagnostics.
//!
//! Parsing is deliberately forgiving: a name that does not match the pattern
//! has no key and is simply excluded from ordering. Directories routinely
//! contain pointer files and unrelated or partially-written entries, and
//! those must never abort an archive run.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static CHECKPOINT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^chkpt\.(\d+)\.(\d+)\.(\d+)$").expect("valid pattern"));

static LOG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^log\.(\d+)\.(\d+)\.(\d+)\.(\d+)$").expect("valid pattern"));

/// A log-sequence number embedded in a filename.
///
/// Ordering is lexicographic over `(epoch, view, seq)` with numeric (not
/// string) comparison at each position, so `1.2.9` sorts before `1.2.10`
/// regardless of how many digits each field was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SequenceKey {
    /// Leadership epoch.
    pub epoch: u64,
    /// View within the epoch.
    pub view: u64,
    /// Sequence number within the view.
    pub seq: u64,
}

impl SequenceKey {
    /// Construct a key directly from its three components.
    pub fn new(epoch: u64, view: u64, seq: u64) -> Self {
        SequenceKey { epoch, view, seq }
    }

    /// Parse a key out of a filename of the given kind.
    ///
    /// Returns `None` when the name does not match the kind's pattern.
    /// Absence is not an error: callers exclude such names from ordering
    /// and, for checkpoints, from candidacy altogether.
    pub fn parse(name: &str, kind: FileKind) -> Option<Self> {
        let caps = kind.pattern().captures(name)?;
        let field = |i: usize| caps.get(i)?.as_str().parse::<u64>().ok();
        Some(SequenceKey {
            epoch: field(1)?,
            view: field(2)?,
            seq: field(3)?,
        })
    }
}

impl fmt::Display for SequenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.epoch, self.view, self.seq)
    }
}

/// The two kinds of sequence-bearing files in the metadata directories.
///
/// Each kind carries its own scan prefix and filename pattern, so the key
/// extraction strategy is selected explicitly rather than by trying
/// patterns in fallback order at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Point-in-time snapshot of the engine's metadata state.
    Checkpoint,
    /// Append-only transaction-log segment.
    TransactionLog,
}

impl FileKind {
    /// Literal filename prefix used by the directory scanner.
    pub fn scan_prefix(self) -> &'static str {
        match self {
            FileKind::Checkpoint => "chkpt",
            FileKind::TransactionLog => "log",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            FileKind::Checkpoint => &CHECKPOINT_NAME,
            FileKind::TransactionLog => &LOG_NAME,
        }
    }
}

/// Extract the trailing segment number from a transaction-log filename.
///
/// Independent of [`SequenceKey::parse`]; used only by the consistency
/// checker. Returns `None` for names without a parsable segment.
pub fn parse_segment_number(name: &str) -> Option<u64> {
    let caps = LOG_NAME.captures(name)?;
    caps.get(4)?.as_str().parse::<u64>().ok()
}
