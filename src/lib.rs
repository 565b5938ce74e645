//! # Metalog
//!
//! Consistent, minimal checkpoint/transaction-log archive selection for a
//! storage engine's on-disk metadata directories.
//!
//! The engine scans a checkpoint directory (`chkpt.<epoch>.<view>.<seq>`
//! files plus a `latest` pointer) and a transaction-log directory
//! (`log.<epoch>.<view>.<seq>.<segment>` files plus a `last` pointer),
//! orders both by their embedded log-sequence numbers, and computes the
//! smallest file set a recovery process needs to reconstruct state up to
//! one of the newest checkpoints.
//!
//! ## Quick start
//!
//! ```ignore
//! use metalog::prelude::*;
//!
//! let config = ArchiveConfig {
//!     checkpoint_dir: "/data/meta/checkpoint".into(),
//!     log_dir: "/data/meta/transactions".into(),
//!     retention: std::num::NonZeroUsize::new(2).unwrap(),
//!     archiver: "tar".into(),
//!     dry_run: true,
//!     legacy_prune: false,
//!     legacy_keep_logs: None,
//! };
//!
//! let plan = build_plan(&config)?;
//! for file in &plan.files {
//!     println!("{}", file.display());
//! }
//! ```
//!
//! The `metalog-archive` binary wraps this engine with option parsing and
//! the external-archiver subprocess; see the `metalog-cli` crate.

#![warn(missing_docs)]

pub mod prelude;

pub use metalog_core::{
    build_plan, check_gaps, ordered_checkpoints, ordered_logs, parse_segment_number, select,
    ArchiveConfig, ArchiveError, ArchivePlan, ArchiveSelection, CheckpointFile, FileKind, LogFile,
    OrderedFileList, Result, SequenceKey, Sequenced, LAST_POINTER, LATEST_POINTER,
};
