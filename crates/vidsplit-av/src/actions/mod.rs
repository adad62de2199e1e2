//! Media processing actions.

mod segment;

pub use segment::{extract_segment, segment_command, ExtractOptions, MIN_SEGMENT_SECS};
