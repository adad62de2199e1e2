//! Segment planning.
//!
//! A [`SegmentPlan`] cuts a source of known duration into contiguous
//! fixed-length segments. Every segment has the requested length except the
//! last, which takes whatever remains and is never empty.

use crate::{Error, Result};

/// Remainders at or below this many seconds are folded into the previous
/// segment. ffprobe reports microseconds, so anything this small is float
/// noise and would render as a zero-length cut.
pub const SLIVER_SECS: f64 = 0.5e-6;

/// One contiguous time range of the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// 1-based position in the plan.
    pub index: usize,
    /// Offset into the source, in seconds.
    pub start_seconds: f64,
    /// Length of the range, in seconds. Always > 0.
    pub length_seconds: f64,
}

impl Segment {
    /// Offset one past the end of this segment, in seconds.
    pub fn end_seconds(&self) -> f64 {
        self.start_seconds + self.length_seconds
    }
}

/// Ordered, gap-free list of segments covering a source exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPlan {
    total_seconds: f64,
    segments: Vec<Segment>,
}

impl SegmentPlan {
    /// Plan `total_seconds` of media in chunks of `segment_seconds`.
    ///
    /// Produces `ceil(total / segment)` segments. An exact multiple yields a
    /// full-length final segment rather than a trailing empty one, and a
    /// remainder of at most [`SLIVER_SECS`] is absorbed by the last segment.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSegmentDuration`] if `segment_seconds` is not a
    ///   finite positive number.
    /// - [`Error::InvalidTotalDuration`] if `total_seconds` is not a finite
    ///   positive number.
    pub fn new(total_seconds: f64, segment_seconds: f64) -> Result<Self> {
        if !segment_seconds.is_finite() || segment_seconds <= 0.0 {
            return Err(Error::InvalidSegmentDuration(segment_seconds));
        }
        if !total_seconds.is_finite() || total_seconds <= 0.0 {
            return Err(Error::InvalidTotalDuration(total_seconds));
        }

        let mut count = (total_seconds / segment_seconds).ceil() as usize;
        // Division can land a hair above an integer.
        while count > 1 && total_seconds - (count - 1) as f64 * segment_seconds <= SLIVER_SECS {
            count -= 1;
        }
        let count = count.max(1);

        let segments = (0..count)
            .map(|i| {
                let start_seconds = i as f64 * segment_seconds;
                let length_seconds = if i + 1 == count {
                    total_seconds - start_seconds
                } else {
                    segment_seconds
                };
                Segment {
                    index: i + 1,
                    start_seconds,
                    length_seconds,
                }
            })
            .collect();

        Ok(Self {
            total_seconds,
            segments,
        })
    }

    /// Source duration the plan was built from.
    pub fn total_seconds(&self) -> f64 {
        self.total_seconds
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a successfully built plan.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// All segments, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterate segments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a SegmentPlan {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Shorthand for [`SegmentPlan::new`].
pub fn plan_segments(total_seconds: f64, segment_seconds: f64) -> Result<SegmentPlan> {
    SegmentPlan::new(total_seconds, segment_seconds)
}
