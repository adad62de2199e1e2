//! Error kinds for a split run.
//!
//! Everything except [`Error::SegmentFailure`] is fatal and stops the run
//! before any segment is attempted. A segment failure is recorded against
//! that segment and the run moves on.

use std::path::PathBuf;

/// Unified error type for the vidsplit binary and library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file does not exist or is not a regular file.
    #[error("Input file not found: {}", path.display())]
    InputNotFound {
        /// Path as given on the command line.
        path: PathBuf,
    },

    /// Invalid request or configuration (e.g. non-positive duration).
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The source duration could not be determined.
    #[error("Failed to get video duration: {0}")]
    Probe(String),

    /// An external binary is missing.
    #[error("{tool} not found; is it installed and in PATH?")]
    ToolUnavailable {
        /// Tool name (ffmpeg, ffprobe).
        tool: String,
    },

    /// One segment's tool invocation failed.
    #[error("Segment {index} failed: {message}")]
    SegmentFailure {
        /// 1-based segment index.
        index: usize,
        /// Human-readable error description.
        message: String,
    },

    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDir {
        /// Directory that was being created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Any other I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error aborts the whole run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::SegmentFailure { .. })
    }

    /// Map a probing failure onto the run's error kinds.
    pub fn from_probe(err: vidsplit_av::Error) -> Self {
        match err {
            vidsplit_av::Error::ToolNotFound { tool } => Error::ToolUnavailable { tool },
            vidsplit_av::Error::FileNotFound { path } => Error::InputNotFound { path },
            other => Error::Probe(other.to_string()),
        }
    }

    /// Map an extraction failure for segment `index`.
    pub fn from_segment(index: usize, err: vidsplit_av::Error) -> Self {
        match err {
            vidsplit_av::Error::ToolNotFound { tool } => Error::ToolUnavailable { tool },
            other => Error::SegmentFailure {
                index,
                message: other.to_string(),
            },
        }
    }
}

impl From<vidsplit_media::Error> for Error {
    fn from(err: vidsplit_media::Error) -> Self {
        match err {
            vidsplit_media::Error::InvalidTotalDuration(_) => Error::Probe(err.to_string()),
            vidsplit_media::Error::NoFileName(path) => Error::InputNotFound { path: path.into() },
            other => Error::Config(other.to_string()),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn input_not_found_display() {
        let err = Error::InputNotFound {
            path: PathBuf::from("/media/missing.mp4"),
        };
        assert_eq!(err.to_string(), "Input file not found: /media/missing.mp4");
        assert!(err.is_fatal());
    }

    #[test]
    fn segment_failure_is_local() {
        let err = Error::SegmentFailure {
            index: 3,
            message: "exit status 1".into(),
        };
        assert_eq!(err.to_string(), "Segment 3 failed: exit status 1");
        assert!(!err.is_fatal());
    }

    #[test]
    fn tool_unavailable_display() {
        let err = Error::ToolUnavailable {
            tool: "ffprobe".into(),
        };
        assert_eq!(
            err.to_string(),
            "ffprobe not found; is it installed and in PATH?"
        );
    }

    #[test]
    fn probe_errors_map() {
        assert_matches!(
            Error::from_probe(vidsplit_av::Error::tool_not_found("ffprobe")),
            Error::ToolUnavailable { tool } if tool == "ffprobe"
        );
        assert_matches!(
            Error::from_probe(vidsplit_av::Error::file_not_found("/x.mp4")),
            Error::InputNotFound { .. }
        );
        assert_matches!(
            Error::from_probe(vidsplit_av::Error::parse_error("ffprobe", "no duration")),
            Error::Probe(msg) if msg.contains("no duration")
        );
    }

    #[test]
    fn segment_errors_map() {
        assert_matches!(
            Error::from_segment(2, vidsplit_av::Error::tool_failed("ffmpeg", "boom")),
            Error::SegmentFailure { index: 2, .. }
        );
        assert_matches!(
            Error::from_segment(2, vidsplit_av::Error::tool_not_found("ffmpeg")),
            Error::ToolUnavailable { .. }
        );
    }

    #[test]
    fn plan_errors_map() {
        assert_matches!(
            Error::from(vidsplit_media::Error::InvalidSegmentDuration(0.0)),
            Error::Config(_)
        );
        assert_matches!(
            Error::from(vidsplit_media::Error::InvalidTotalDuration(0.0)),
            Error::Probe(_)
        );
    }
}
