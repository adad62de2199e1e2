//! FFprobe-based duration probing.
//!
//! Shells out to `ffprobe -v quiet -print_format json -show_format` and reads
//! `format.duration` from the JSON document.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::command::ToolCommand;
use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: Option<FfprobeFormat>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
}

/// A prober backed by the `ffprobe` CLI.
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    ffprobe_path: PathBuf,
}

impl FfprobeProber {
    /// Create a new prober using the given ffprobe path.
    pub fn new(ffprobe_path: PathBuf) -> Self {
        Self { ffprobe_path }
    }

    /// The ffprobe invocation used to read the container duration.
    pub fn command(&self, input: &Path) -> ToolCommand {
        let mut cmd = ToolCommand::new(self.ffprobe_path.clone());
        cmd.args(["-v", "quiet", "-print_format", "json", "-show_format"]);
        cmd.path_arg(input);
        cmd
    }

    /// Total duration of `input` in seconds.
    ///
    /// # Errors
    ///
    /// - [`Error::FileNotFound`] if `input` does not exist.
    /// - [`Error::ToolNotFound`] if ffprobe cannot be spawned.
    /// - [`Error::ToolFailed`] if ffprobe exits non-zero (unreadable or
    ///   unsupported file).
    /// - [`Error::Json`] / [`Error::ParseError`] if the output carries no
    ///   usable duration.
    pub fn duration(&self, input: &Path) -> Result<f64> {
        if !input.exists() {
            return Err(Error::file_not_found(input));
        }

        let output = self.command(input).execute()?;
        let seconds = parse_duration(&output.stdout)?;

        tracing::debug!("ffprobe: {:?} is {:.3}s", input, seconds);
        Ok(seconds)
    }
}

/// Extract `format.duration` from ffprobe's JSON output.
fn parse_duration(json: &str) -> Result<f64> {
    let parsed: FfprobeOutput = serde_json::from_str(json)?;

    let raw = parsed
        .format
        .and_then(|f| f.duration)
        .ok_or_else(|| Error::parse_error("ffprobe", "no duration in format section"))?;

    let seconds: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::parse_error("ffprobe", format!("invalid duration {raw:?}")))?;

    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(Error::parse_error(
            "ffprobe",
            format!("duration must be positive, got {raw}"),
        ));
    }

    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_duration() {
        let json = r#"{
            "format": {
                "filename": "video.mp4",
                "nb_streams": 2,
                "format_name": "mov,mp4,m4a,3gp,3g2,mj2",
                "duration": "46800.021333",
                "size": "1048576"
            }
        }"#;
        let secs = parse_duration(json).unwrap();
        assert!((secs - 46800.021333).abs() < 1e-9);
    }

    #[test]
    fn missing_duration_is_parse_error() {
        let json = r#"{"format": {"filename": "stream.ts"}}"#;
        assert!(matches!(
            parse_duration(json),
            Err(Error::ParseError { .. })
        ));
    }

    #[test]
    fn missing_format_is_parse_error() {
        assert!(matches!(parse_duration("{}"), Err(Error::ParseError { .. })));
    }

    #[test]
    fn non_numeric_duration_is_parse_error() {
        let json = r#"{"format": {"duration": "N/A"}}"#;
        let err = parse_duration(json).unwrap_err();
        assert!(err.to_string().contains("N/A"));
    }

    #[test]
    fn zero_duration_rejected() {
        let json = r#"{"format": {"duration": "0.000000"}}"#;
        assert!(parse_duration(json).is_err());
    }

    #[test]
    fn garbage_output_is_json_error() {
        assert!(matches!(parse_duration("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn command_shape() {
        let prober = FfprobeProber::new(PathBuf::from("ffprobe"));
        let cmd = prober.command(Path::new("/media/video.mp4"));
        assert_eq!(
            cmd.to_string(),
            "ffprobe -v quiet -print_format json -show_format /media/video.mp4"
        );
    }

    #[test]
    fn missing_input_is_file_not_found() {
        let prober = FfprobeProber::new(PathBuf::from("ffprobe"));
        let err = prober.duration(Path::new("/nonexistent/video.mp4")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
