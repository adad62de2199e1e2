//! Output directory and segment file naming.
//!
//! Segments of `/media/video.mp4` land in `/media/video_segments/` as
//! `video_segment_001.mp4`, `video_segment_002.mp4`, ... The index is padded
//! to at least three digits, and wider when the plan has 1000+ segments so
//! names still sort lexically.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Minimum zero-pad width for segment indices.
const MIN_INDEX_WIDTH: usize = 3;

/// Where the segments of one input go, and what they are called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    dir: PathBuf,
    stem: String,
    extension: Option<String>,
    width: usize,
}

impl OutputTarget {
    /// Derive the target for `input` split into `segment_count` pieces.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFileName`] if `input` has no file stem (e.g. `/`
    /// or `..`).
    pub fn for_input(input: &Path, segment_count: usize) -> Result<Self> {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::NoFileName(input.display().to_string()))?;

        let extension = input
            .extension()
            .map(|e| e.to_string_lossy().into_owned());

        let parent = input.parent().unwrap_or_else(|| Path::new(""));
        let dir = parent.join(format!("{stem}_segments"));

        Ok(Self {
            dir,
            stem,
            extension,
            width: pad_width(segment_count),
        })
    }

    /// Directory holding all segments: a sibling of the input.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for the segment at 1-based `index`.
    pub fn file_name(&self, index: usize) -> String {
        let mut name = format!("{}_segment_{:0width$}", self.stem, index, width = self.width);
        if let Some(ref ext) = self.extension {
            name.push('.');
            name.push_str(ext);
        }
        name
    }

    /// Full path for the segment at 1-based `index`.
    pub fn path(&self, index: usize) -> PathBuf {
        self.dir.join(self.file_name(index))
    }
}

/// Index width for a plan of `segment_count` segments.
pub fn pad_width(segment_count: usize) -> usize {
    let digits = segment_count.max(1).to_string().len();
    digits.max(MIN_INDEX_WIDTH)
}

/// File name of segment `index` out of `segment_count` for `input`.
///
/// # Errors
///
/// [`Error::InvalidSegmentIndex`] if `index` is outside `1..=segment_count`.
pub fn segment_file_name(input: &Path, index: usize, segment_count: usize) -> Result<String> {
    if index == 0 || index > segment_count {
        return Err(Error::InvalidSegmentIndex {
            index,
            max: segment_count,
        });
    }
    Ok(OutputTarget::for_input(input, segment_count)?.file_name(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_segment_names() {
        let target = OutputTarget::for_input(Path::new("/media/video.mp4"), 4).unwrap();
        let names: Vec<String> = (1..=4).map(|i| target.file_name(i)).collect();
        assert_eq!(
            names,
            vec![
                "video_segment_001.mp4",
                "video_segment_002.mp4",
                "video_segment_003.mp4",
                "video_segment_004.mp4",
            ]
        );
    }

    #[test]
    fn directory_is_sibling_of_input() {
        let target = OutputTarget::for_input(Path::new("/media/movies/video.mkv"), 7).unwrap();
        assert_eq!(target.dir(), Path::new("/media/movies/video_segments"));
        assert_eq!(
            target.path(7),
            PathBuf::from("/media/movies/video_segments/video_segment_007.mkv")
        );
    }

    #[test]
    fn relative_input_without_parent() {
        assert_eq!(
            OutputTarget::for_input(Path::new("clip.webm"), 1).unwrap().dir(),
            Path::new("clip_segments")
        );
    }

    #[test]
    fn extension_preserved() {
        for ext in ["mp4", "mkv", "MOV", "ts", "webm"] {
            let input = PathBuf::from(format!("/in/talk.{ext}"));
            let name = segment_file_name(&input, 2, 10).unwrap();
            assert!(name.ends_with(&format!(".{ext}")), "{name}");
            assert_eq!(Path::new(&name).extension().unwrap(), ext);
        }
    }

    #[test]
    fn no_extension() {
        let name = segment_file_name(Path::new("/in/capture"), 1, 1).unwrap();
        assert_eq!(name, "capture_segment_001");
    }

    #[test]
    fn dotted_stem() {
        let name = segment_file_name(Path::new("/in/show.s01e01.mkv"), 12, 20).unwrap();
        assert_eq!(name, "show.s01e01_segment_012.mkv");
    }

    #[test]
    fn width_grows_past_999() {
        assert_eq!(pad_width(1), 3);
        assert_eq!(pad_width(999), 3);
        assert_eq!(pad_width(1000), 4);
        assert_eq!(pad_width(12345), 5);

        let name = segment_file_name(Path::new("v.mp4"), 7, 1000).unwrap();
        assert_eq!(name, "v_segment_0007.mp4");
    }

    #[test]
    fn names_are_unique_and_sorted() {
        let target = OutputTarget::for_input(Path::new("v.mp4"), 1500).unwrap();
        let names: Vec<String> = (1..=1500).map(|i| target.file_name(i)).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn index_out_of_range() {
        assert_eq!(
            segment_file_name(Path::new("v.mp4"), 0, 3),
            Err(Error::InvalidSegmentIndex { index: 0, max: 3 })
        );
        assert!(segment_file_name(Path::new("v.mp4"), 4, 3).is_err());
    }

    #[test]
    fn no_file_name() {
        assert!(matches!(
            OutputTarget::for_input(Path::new("/"), 1),
            Err(Error::NoFileName(_))
        ));
    }
}
