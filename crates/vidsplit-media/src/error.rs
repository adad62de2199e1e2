//! Error types for vidsplit-media.

use thiserror::Error;

/// Result type for vidsplit-media operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for vidsplit-media operations.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Requested segment length is zero, negative or not a number.
    #[error("Invalid segment duration: {0} (must be a positive number of seconds)")]
    InvalidSegmentDuration(f64),

    /// Source duration is zero, negative or not a number.
    #[error("Invalid total duration: {0} (must be a positive number of seconds)")]
    InvalidTotalDuration(f64),

    /// Segment index outside `1..=count`.
    #[error("Invalid segment index: {index} (max: {max})")]
    InvalidSegmentIndex { index: usize, max: usize },

    /// Input path has no usable file name.
    #[error("Input path has no file name: {0}")]
    NoFileName(String),
}
