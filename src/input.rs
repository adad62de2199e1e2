//! Validated input media file.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A path that pointed at an existing, readable regular file when opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    path: PathBuf,
}

impl MediaFile {
    /// Validate `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::InputNotFound`] if nothing exists at `path` or it is not a
    ///   regular file.
    /// - [`Error::Io`] if the file exists but cannot be opened for reading.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(Error::InputNotFound { path });
        }
        std::fs::File::open(&path)?;
        Ok(Self { path })
    }

    /// The validated path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for MediaFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
