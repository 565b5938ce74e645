//! Convenient imports for the selection engine.
//!
//! ```ignore
//! use metalog::prelude::*;
//!
//! let plan = build_plan(&config)?;
//! ```

// Pipeline entry point
pub use metalog_core::{build_plan, ArchiveConfig, ArchivePlan};

// Error handling
pub use metalog_core::{ArchiveError, Result};

// File records and ordering
pub use metalog_core::{
    ordered_checkpoints, ordered_logs, CheckpointFile, LogFile, OrderedFileList, Sequenced,
};

// Sequence keys
pub use metalog_core::{FileKind, SequenceKey};
