//! Per-segment outcomes and the run summary.

use std::path::{Path, PathBuf};

use vidsplit_media::Segment;

/// What happened to one segment.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentStatus {
    /// Dry run: the command was printed, nothing ran.
    Planned { command: String },
    /// The runner wrote the file.
    Succeeded,
    /// The runner failed; later segments were still attempted.
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentOutcome {
    pub segment: Segment,
    pub file_name: String,
    pub status: SegmentStatus,
}

impl SegmentOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, SegmentStatus::Failed { .. })
    }
}

/// Result of driving a whole plan.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitReport {
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub outcomes: Vec<SegmentOutcome>,
}

impl SplitReport {
    pub fn new(output_dir: &Path, dry_run: bool) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            dry_run,
            outcomes: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == SegmentStatus::Succeeded)
            .count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &SegmentOutcome> {
        self.outcomes.iter().filter(|o| o.is_failed())
    }

    /// 1-based indices of failed segments, in order.
    pub fn failed_indices(&self) -> Vec<usize> {
        self.failed().map(|o| o.segment.index).collect()
    }

    /// True when no segment failed. A dry run is always successful.
    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }
}
