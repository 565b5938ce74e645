//! Log-segment gap detection.
//!
//! Diagnostic only. A gap in the segment numbering usually means a log file
//! was lost or moved; recovery may still succeed from a newer checkpoint,
//! so the pipeline reports the gap to the operator and carries on.

use crate::files::LogFile;
use crate::order::OrderedFileList;

/// Walk the newest-first log list and report apparent segment gaps.
///
/// Adjacent entries whose segment numbers differ by more than one produce
/// one warning naming both files. Entries without a segment number are
/// skipped for this comparison; their neighbors are still compared to each
/// other. Never fails and never halts the pipeline.
pub fn check_gaps(logs: &OrderedFileList<LogFile>) -> Vec<String> {
    let segmented: Vec<&LogFile> = logs.iter().filter(|l| l.segment().is_some()).collect();

    let mut warnings = Vec::new();
    for pair in segmented.windows(2) {
        let (newer, older) = (pair[0], pair[1]);
        if let (Some(a), Some(b)) = (newer.segment(), older.segment()) {
            if a > b && a - b > 1 {
                warnings.push(format!(
                    "log segment gap: {} (segment {}) is not adjacent to {} (segment {})",
                    older.file_name(),
                    b,
                    newer.file_name(),
                    a
                ));
            }
        }
    }
    warnings
}
