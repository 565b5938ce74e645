//! Pipeline orchestration and output assembly.
//!
//! `build_plan` runs the whole selection pipeline: verify both directories,
//! scan, order, gap-check, select, and assemble the final file list handed
//! to the archive driver.
//!
//! The pipeline only ever reads the metadata directories. If the storage
//! engine writes new checkpoints or logs while a scan is in flight, the
//! plan may be stale by the time the archiver runs; that race is accepted
//! and carries no locking.

use crate::check::check_gaps;
use crate::error::Result;
use crate::order::{ordered_checkpoints, ordered_logs};
use crate::scan::{scan, verify_dir};
use crate::select::select;
use crate::sequence::{FileKind, SequenceKey};
use serde::Serialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Pointer file kept by the engine in the checkpoint directory, naming the
/// most recent checkpoint. Included in the archive verbatim, never parsed.
pub const LATEST_POINTER: &str = "latest";

/// Pointer file kept by the engine in the transaction-log directory,
/// naming the log currently being written. Included verbatim, never parsed.
pub const LAST_POINTER: &str = "last";

/// Everything the selection engine needs for one invocation.
///
/// Owned by the CLI layer; the engine treats it as read-only.
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Directory holding `chkpt.*` files and the `latest` pointer.
    pub checkpoint_dir: PathBuf,
    /// Directory holding `log.*` files and the `last` pointer.
    pub log_dir: PathBuf,
    /// Number of most-recent checkpoints to archive.
    pub retention: NonZeroUsize,
    /// External archiver binary.
    pub archiver: PathBuf,
    /// When set, compute and report the file list without invoking the
    /// archiver.
    pub dry_run: bool,
    /// Deprecated pruning flag. Accepted for command-line compatibility;
    /// nothing reads it.
    pub legacy_prune: bool,
    /// Deprecated pruning limit. Accepted for command-line compatibility;
    /// nothing reads it.
    pub legacy_keep_logs: Option<u64>,
}

/// The computed archive plan, consumed by the archive driver (or reported
/// as-is under `--dry-run`).
#[derive(Debug, Serialize)]
pub struct ArchivePlan {
    /// Files to archive, in the exact order the driver must receive them:
    /// the `last` pointer, the required logs, the `latest` pointer, then
    /// the retained checkpoints newest-first.
    pub files: Vec<PathBuf>,
    /// Number of checkpoints retained.
    pub retained_checkpoints: usize,
    /// Number of transaction logs required.
    pub required_logs: usize,
    /// Sequence key below which logs are not needed.
    pub floor: SequenceKey,
    /// Gap diagnostics from the consistency checker.
    pub gap_warnings: Vec<String>,
}

impl ArchivePlan {
    /// Human-readable one-line summary for operator logs.
    pub fn summary(&self) -> String {
        format!(
            "{} files: {} checkpoints, {} logs (floor {}), {} gap warning(s)",
            self.files.len(),
            self.retained_checkpoints,
            self.required_logs,
            self.floor,
            self.gap_warnings.len()
        )
    }
}

/// Run the selection pipeline and assemble the driver-facing file list.
pub fn build_plan(config: &ArchiveConfig) -> Result<ArchivePlan> {
    // Both directories must be listable before any scanning proceeds.
    verify_dir(&config.checkpoint_dir)?;
    verify_dir(&config.log_dir)?;

    let checkpoint_paths = scan(&config.checkpoint_dir, FileKind::Checkpoint.scan_prefix())?;
    let log_paths = scan(&config.log_dir, FileKind::TransactionLog.scan_prefix())?;

    let checkpoints = ordered_checkpoints(checkpoint_paths);
    let logs = ordered_logs(log_paths);

    // Diagnostic pass, independent of selection.
    let gap_warnings = check_gaps(&logs);
    for warning in &gap_warnings {
        warn!("{warning}");
    }

    let selection = select(&checkpoints, &logs, config.retention)?;

    let mut files =
        Vec::with_capacity(selection.required_logs().len() + selection.retained_checkpoints().len() + 2);
    files.push(config.log_dir.join(LAST_POINTER));
    files.extend(selection.required_logs().iter().map(|l| l.path().to_path_buf()));
    files.push(config.checkpoint_dir.join(LATEST_POINTER));
    files.extend(
        selection
            .retained_checkpoints()
            .iter()
            .map(|c| c.path().to_path_buf()),
    );

    let plan = ArchivePlan {
        files,
        retained_checkpoints: selection.retained_checkpoints().len(),
        required_logs: selection.required_logs().len(),
        floor: selection.floor(),
        gap_warnings,
    };
    info!("archive plan ready: {}", plan.summary());
    Ok(plan)
}
