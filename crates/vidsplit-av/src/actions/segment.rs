//! Stream-copy extraction of a single time range with ffmpeg.

use std::path::Path;

use crate::command::ToolCommand;
use crate::{Error, Result};

/// Knobs for the ffmpeg extraction command.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Pass `-y` (overwrite existing outputs) instead of `-n`.
    pub overwrite: bool,
    /// Extra arguments inserted just before the output path.
    pub extra_args: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            overwrite: true,
            extra_args: Vec::new(),
        }
    }
}

/// Shortest length that still renders as non-zero at microsecond precision.
pub const MIN_SEGMENT_SECS: f64 = 0.5e-6;

fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.6}")
}

/// Build the ffmpeg command copying `[start, start + length)` of `input`
/// into `output` without re-encoding.
///
/// Timestamps are passed in seconds with microsecond precision, the
/// resolution ffprobe reports durations in.
pub fn segment_command(
    ffmpeg: &Path,
    input: &Path,
    start_seconds: f64,
    length_seconds: f64,
    output: &Path,
    options: &ExtractOptions,
) -> ToolCommand {
    let mut cmd = ToolCommand::new(ffmpeg.to_path_buf());
    cmd.args(["-hide_banner", "-loglevel", "error"]);
    cmd.arg(if options.overwrite { "-y" } else { "-n" });
    cmd.arg("-i").path_arg(input);
    cmd.args(["-ss", &format_seconds(start_seconds)]);
    cmd.args(["-t", &format_seconds(length_seconds)]);
    cmd.args(["-map", "0", "-c", "copy", "-avoid_negative_ts", "make_zero"]);
    cmd.args(options.extra_args.iter().cloned());
    cmd.path_arg(output);
    cmd
}

/// Run ffmpeg to extract one segment, blocking until it exits.
///
/// # Errors
///
/// - [`Error::InvalidInput`] for a negative start, or a length too short to
///   render as non-zero (see [`MIN_SEGMENT_SECS`]).
/// - [`Error::ToolNotFound`] if ffmpeg cannot be spawned.
/// - [`Error::ToolFailed`] if ffmpeg exits non-zero.
pub fn extract_segment(
    ffmpeg: &Path,
    input: &Path,
    start_seconds: f64,
    length_seconds: f64,
    output: &Path,
    options: &ExtractOptions,
) -> Result<()> {
    if start_seconds.is_nan() || start_seconds < 0.0 {
        return Err(Error::InvalidInput(format!(
            "segment start must be >= 0, got {start_seconds}"
        )));
    }
    if length_seconds.is_nan() || length_seconds <= MIN_SEGMENT_SECS {
        return Err(Error::InvalidInput(format!(
            "segment length must be > {MIN_SEGMENT_SECS}s, got {length_seconds}"
        )));
    }

    tracing::info!(
        "Extracting {:.3}s+{:.3}s of {:?} -> {:?}",
        start_seconds,
        length_seconds,
        input,
        output
    );

    segment_command(ffmpeg, input, start_seconds, length_seconds, output, options).execute()?;
    Ok(())
}
