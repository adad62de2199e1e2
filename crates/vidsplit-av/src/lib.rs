//! # vidsplit-av
//!
//! Thin, synchronous wrappers around the external media tools a split run
//! depends on.
//!
//! This crate provides:
//! - Tool discovery ([`get_tool_path`], [`check_tool_at`]) for ffmpeg and ffprobe
//! - Command building and execution ([`ToolCommand`]), with shell-quoted
//!   rendering for dry runs
//! - Duration probing via ffprobe ([`FfprobeProber`])
//! - Stream-copy extraction of one time range via ffmpeg
//!   ([`actions::extract_segment`])
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use vidsplit_av::{get_tool_path, FfprobeProber};
//!
//! let ffprobe = get_tool_path("ffprobe", None)?;
//! let seconds = FfprobeProber::new(ffprobe).duration(Path::new("/path/to/video.mkv"))?;
//! println!("{seconds:.3}s");
//! # Ok::<(), vidsplit_av::Error>(())
//! ```

mod error;
pub mod actions;
pub mod command;
pub mod probe;
pub mod shell;
pub mod tools;

// Re-exports
pub use command::{ToolCommand, ToolOutput};
pub use error::{Error, Result};
pub use probe::FfprobeProber;
pub use tools::{check_tool_at, get_tool_path, require_tool, ToolInfo};
