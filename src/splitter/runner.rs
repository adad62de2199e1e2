//! The seam between the driver and whatever actually cuts a segment.

use std::path::{Path, PathBuf};

use vidsplit_av::actions::{extract_segment, segment_command, ExtractOptions};
use vidsplit_media::Segment;

use crate::{Error, Result};

/// Everything a runner needs to produce one segment file.
#[derive(Debug, Clone, Copy)]
pub struct SegmentJob<'a> {
    pub input: &'a Path,
    pub segment: &'a Segment,
    pub output: &'a Path,
}

/// Produces one output file per call, synchronously.
///
/// Implementations return `Ok(())` once the file is written. Failures come
/// back as [`Error::SegmentFailure`]; an [`Error::ToolUnavailable`] tells the
/// driver there is no point continuing.
pub trait SegmentRunner {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// The command line that [`run`](Self::run) would execute, for dry runs.
    fn describe(&self, job: &SegmentJob<'_>) -> String;

    /// Write `job.output`, blocking until done.
    fn run(&self, job: &SegmentJob<'_>) -> Result<()>;
}

/// Stream-copy extraction with the ffmpeg CLI.
#[derive(Debug, Clone)]
pub struct FfmpegRunner {
    ffmpeg: PathBuf,
    options: ExtractOptions,
}

impl FfmpegRunner {
    pub fn new(ffmpeg: PathBuf, options: ExtractOptions) -> Self {
        Self { ffmpeg, options }
    }
}

impl SegmentRunner for FfmpegRunner {
    fn name(&self) -> &'static str {
        "ffmpeg"
    }

    fn describe(&self, job: &SegmentJob<'_>) -> String {
        segment_command(
            &self.ffmpeg,
            job.input,
            job.segment.start_seconds,
            job.segment.length_seconds,
            job.output,
            &self.options,
        )
        .to_string()
    }

    fn run(&self, job: &SegmentJob<'_>) -> Result<()> {
        extract_segment(
            &self.ffmpeg,
            job.input,
            job.segment.start_seconds,
            job.segment.length_seconds,
            job.output,
            &self.options,
        )
        .map_err(|e| Error::from_segment(job.segment.index, e))
    }
}
