//! # Metalog core
//!
//! The log-sequence selection engine behind `metalog-archive`.
//!
//! Given a checkpoint directory and a transaction-log directory maintained
//! by a storage engine, this crate computes the minimal consistent file set
//! needed to reconstruct state up to one of the newest checkpoints:
//!
//! 1. [`scan`] lists candidate files by literal name prefix.
//! 2. [`order`] parses a [`SequenceKey`] out of every candidate name and
//!    sorts newest-first; unparsable names are excluded, never an error.
//! 3. [`check`] flags apparent log-segment gaps (diagnostic only).
//! 4. [`select`] keeps the newest `retention` checkpoints and every log at
//!    or above the oldest retained checkpoint's referenced log.
//! 5. [`plan`] assembles the exact file list the archive driver consumes.
//!
//! The pipeline is single-threaded, synchronous, and strictly read-only
//! with respect to the scanned directories.

#![warn(missing_docs)]

pub mod check;
pub mod error;
pub mod files;
pub mod order;
pub mod plan;
pub mod scan;
pub mod select;
pub mod sequence;

pub use check::check_gaps;
pub use error::{ArchiveError, Result};
pub use files::{CheckpointFile, LogFile, Sequenced};
pub use order::{ordered_checkpoints, ordered_logs, OrderedFileList};
pub use plan::{build_plan, ArchiveConfig, ArchivePlan, LAST_POINTER, LATEST_POINTER};
pub use select::{select, ArchiveSelection};
pub use sequence::{parse_segment_number, FileKind, SequenceKey};
