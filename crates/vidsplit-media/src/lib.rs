//! vidsplit-media: planning and naming for fixed-length video splits.
//!
//! Pure functions only; nothing here touches the filesystem or spawns
//! processes.
//!
//! # Modules
//!
//! - `plan` - cut a known duration into contiguous fixed-length segments
//! - `naming` - output directory and zero-padded segment file names
//! - `timecode` - `HH:MM:SS` rendering for reports
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use vidsplit_media::{OutputTarget, SegmentPlan};
//!
//! let plan = SegmentPlan::new(46800.0, 7200.0)?;
//! let target = OutputTarget::for_input(Path::new("/media/video.mp4"), plan.len())?;
//!
//! assert_eq!(plan.len(), 7);
//! assert_eq!(plan.segments()[6].length_seconds, 3600.0);
//! assert_eq!(target.file_name(7), "video_segment_007.mp4");
//! # Ok::<(), vidsplit_media::Error>(())
//! ```

pub mod error;
pub mod naming;
pub mod plan;
pub mod timecode;

pub use error::{Error, Result};
pub use naming::{pad_width, segment_file_name, OutputTarget};
pub use plan::{plan_segments, Segment, SegmentPlan, SLIVER_SECS};
pub use timecode::format_hms;
