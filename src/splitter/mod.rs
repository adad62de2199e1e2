//! Split driver: probe, plan, name, then run each segment in order.
//!
//! [`prepare`] does everything up to the first segment and fails fast on any
//! fatal error. [`SegmentExecutor`] then walks the plan, recording per-segment
//! failures without stopping.

mod executor;
mod report;
mod runner;

pub use executor::{ProgressCallback, SegmentExecutor, SplitEvent};
pub use report::{SegmentOutcome, SegmentStatus, SplitReport};
pub use runner::{FfmpegRunner, SegmentJob, SegmentRunner};

use std::path::Path;

use vidsplit_av::FfprobeProber;
use vidsplit_media::{OutputTarget, SegmentPlan};

use crate::input::MediaFile;
use crate::{Error, Result};

/// Source of a media file's total duration.
pub trait DurationProbe {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Total duration in seconds.
    fn duration(&self, input: &Path) -> Result<f64>;
}

impl DurationProbe for FfprobeProber {
    fn name(&self) -> &'static str {
        "ffprobe"
    }

    fn duration(&self, input: &Path) -> Result<f64> {
        FfprobeProber::duration(self, input).map_err(Error::from_probe)
    }
}

/// Check a requested segment length from the command line.
///
/// # Errors
///
/// [`Error::Config`] unless `seconds > 0`.
pub fn validate_segment_duration(seconds: i64) -> Result<f64> {
    if seconds <= 0 {
        return Err(Error::Config(format!(
            "Duration must be positive, got {seconds}"
        )));
    }
    Ok(seconds as f64)
}

/// Everything needed to start cutting.
#[derive(Debug, Clone)]
pub struct PreparedSplit {
    pub input: MediaFile,
    pub plan: SegmentPlan,
    pub target: OutputTarget,
}

impl PreparedSplit {
    /// Probed source duration in seconds.
    pub fn total_seconds(&self) -> f64 {
        self.plan.total_seconds()
    }
}

/// Probe `input`, plan segments of `segment_seconds`, and derive names.
pub fn prepare(
    input: MediaFile,
    segment_seconds: f64,
    probe: &dyn DurationProbe,
) -> Result<PreparedSplit> {
    tracing::info!("Probing {:?} with {}", input.path(), probe.name());
    let total_seconds = probe.duration(input.path())?;

    let plan = SegmentPlan::new(total_seconds, segment_seconds)?;
    let target = OutputTarget::for_input(input.path(), plan.len())?;

    tracing::debug!(
        "Planned {} segments of {}s over {:.3}s into {:?}",
        plan.len(),
        segment_seconds,
        total_seconds,
        target.dir()
    );

    Ok(PreparedSplit {
        input,
        plan,
        target,
    })
}
