//! vidsplit - split large video files into fixed-length segments
//!
//! This library crate exposes the split pipeline for the binary and for
//! integration testing.

pub mod config;
pub mod error;
pub mod input;
pub mod splitter;
pub mod tools;

pub use error::{Error, Result};
pub use input::MediaFile;
