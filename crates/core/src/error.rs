//! Error types for the selection engine.
//!
//! Only structural failures are errors. Individual filenames that fail to
//! parse are excluded silently, and gap warnings from the consistency
//! checker are diagnostics, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// All selection-engine errors.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// A required directory is missing, not a directory, or unreadable.
    /// Fatal before any scanning proceeds.
    #[error("cannot access directory {}: {source}", path.display())]
    DirectoryAccess {
        /// The directory that could not be listed.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The checkpoint directory yielded zero parsable checkpoints.
    #[error("no checkpoints to archive")]
    NoCheckpoints,

    /// The selected checkpoint's content has no parsable `log/` reference
    /// line, so the oldest required transaction log cannot be determined.
    #[error("checkpoint {} does not reference an oldest transaction log", .0.display())]
    NoLogReference(PathBuf),

    /// I/O failure while reading a checkpoint's content.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for selection-engine operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;
