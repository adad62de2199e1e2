use std::fs;

use vidsplit_media::{OutputTarget, Segment, SegmentPlan};

use super::report::{SegmentOutcome, SegmentStatus, SplitReport};
use super::runner::{SegmentJob, SegmentRunner};
use crate::input::MediaFile;
use crate::{Error, Result};

/// Something worth telling the user about while a plan runs.
#[derive(Debug)]
pub enum SplitEvent<'a> {
    /// Dry run: this is what would be executed.
    Planned {
        segment: &'a Segment,
        total: usize,
        file_name: &'a str,
        command: &'a str,
    },
    Started {
        segment: &'a Segment,
        total: usize,
        file_name: &'a str,
    },
    Completed {
        segment: &'a Segment,
        total: usize,
        file_name: &'a str,
    },
    Failed {
        segment: &'a Segment,
        total: usize,
        file_name: &'a str,
        error: &'a Error,
    },
}

/// Progress callback type
pub type ProgressCallback = Box<dyn Fn(&SplitEvent<'_>) + Send + Sync>;

/// Drives a [`SegmentPlan`] through a [`SegmentRunner`], one segment at a
/// time.
///
/// A failed segment is recorded and the next one is attempted; only a fatal
/// error (missing tool, unwritable output directory) stops the run early.
pub struct SegmentExecutor<R> {
    runner: R,
    dry_run: bool,
    progress_callback: Option<ProgressCallback>,
}

impl<R: SegmentRunner> SegmentExecutor<R> {
    pub fn new(runner: R, dry_run: bool) -> Self {
        Self {
            runner,
            dry_run,
            progress_callback: None,
        }
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn report_progress(&self, event: &SplitEvent<'_>) {
        if let Some(ref cb) = self.progress_callback {
            cb(event);
        }
    }

    /// Run every segment of `plan` in order.
    ///
    /// In dry-run mode nothing is created; each segment's command is only
    /// described. Otherwise the output directory is created first.
    pub fn execute(
        &self,
        input: &MediaFile,
        plan: &SegmentPlan,
        target: &OutputTarget,
    ) -> Result<SplitReport> {
        let total = plan.len();
        let mut report = SplitReport::new(target.dir(), self.dry_run);

        if self.dry_run {
            tracing::info!("[DRY RUN] Would write {} segments to {:?}", total, target.dir());
        } else {
            fs::create_dir_all(target.dir()).map_err(|source| Error::OutputDir {
                path: target.dir().to_path_buf(),
                source,
            })?;
        }

        for segment in plan {
            let output = target.path(segment.index);
            let file_name = target.file_name(segment.index);
            let job = SegmentJob {
                input: input.path(),
                segment,
                output: &output,
            };

            if self.dry_run {
                let command = self.runner.describe(&job);
                self.report_progress(&SplitEvent::Planned {
                    segment,
                    total,
                    file_name: &file_name,
                    command: &command,
                });
                report.outcomes.push(SegmentOutcome {
                    segment: *segment,
                    file_name,
                    status: SegmentStatus::Planned { command },
                });
                continue;
            }

            tracing::info!(
                "[{}/{}] {} via {}",
                segment.index,
                total,
                file_name,
                self.runner.name()
            );
            self.report_progress(&SplitEvent::Started {
                segment,
                total,
                file_name: &file_name,
            });

            let status = match self.runner.run(&job) {
                Ok(()) => {
                    self.report_progress(&SplitEvent::Completed {
                        segment,
                        total,
                        file_name: &file_name,
                    });
                    SegmentStatus::Succeeded
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::warn!("Segment {} failed, continuing: {}", segment.index, e);
                    self.report_progress(&SplitEvent::Failed {
                        segment,
                        total,
                        file_name: &file_name,
                        error: &e,
                    });
                    SegmentStatus::Failed {
                        message: e.to_string(),
                    }
                }
            };

            report.outcomes.push(SegmentOutcome {
                segment: *segment,
                file_name,
                status,
            });
        }

        Ok(report)
    }
}
