//! Resolve the ffmpeg and ffprobe binaries for a run.

use std::path::PathBuf;

use vidsplit_av::{check_tool_at, get_tool_path};

use crate::config::ToolsConfig;
use crate::{Error, Result};

/// Executables a split run will invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTools {
    pub ffprobe: PathBuf,
    pub ffmpeg: PathBuf,
}

impl ResolvedTools {
    /// Locate both tools, preferring configured paths over `PATH`.
    ///
    /// ffprobe is always required. ffmpeg is only required when segments
    /// will actually be written; a dry run falls back to the configured path
    /// or the bare name so the printed commands still read naturally.
    ///
    /// # Errors
    ///
    /// [`Error::ToolUnavailable`] naming the first missing tool.
    pub fn resolve(config: &ToolsConfig, require_ffmpeg: bool) -> Result<Self> {
        let ffprobe = get_tool_path("ffprobe", config.ffprobe_path.as_deref())
            .map_err(|_| Error::ToolUnavailable {
                tool: "ffprobe".to_string(),
            })?;

        let ffmpeg = match get_tool_path("ffmpeg", config.ffmpeg_path.as_deref()) {
            Ok(path) => path,
            Err(_) if !require_ffmpeg => {
                tracing::warn!("ffmpeg not found; dry run will show the bare command name");
                config
                    .ffmpeg_path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("ffmpeg"))
            }
            Err(_) => {
                return Err(Error::ToolUnavailable {
                    tool: "ffmpeg".to_string(),
                })
            }
        };

        tracing::debug!("Using ffprobe at {:?}, ffmpeg at {:?}", ffprobe, ffmpeg);
        Ok(Self { ffprobe, ffmpeg })
    }

    /// Log the version line of each resolved tool.
    pub fn log_versions(&self) {
        for (name, path) in [("ffprobe", &self.ffprobe), ("ffmpeg", &self.ffmpeg)] {
            let info = check_tool_at(name, path);
            match info.version {
                Some(version) => tracing::debug!("{}: {}", name, version),
                None => tracing::debug!("{}: version unknown ({:?})", name, path),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn configured_paths_are_used() {
        let ffprobe = tempfile::NamedTempFile::new().unwrap();
        let ffmpeg = tempfile::NamedTempFile::new().unwrap();
        let config = ToolsConfig {
            ffmpeg_path: Some(ffmpeg.path().to_path_buf()),
            ffprobe_path: Some(ffprobe.path().to_path_buf()),
        };

        let tools = ResolvedTools::resolve(&config, true).unwrap();
        assert_eq!(tools.ffprobe, ffprobe.path());
        assert_eq!(tools.ffmpeg, ffmpeg.path());
    }

    #[test]
    fn dry_run_tolerates_missing_ffmpeg() {
        if vidsplit_av::require_tool("ffmpeg").is_ok() {
            // A real ffmpeg on PATH would be picked up as the fallback.
            return;
        }
        let ffprobe = tempfile::NamedTempFile::new().unwrap();
        let config = ToolsConfig {
            ffmpeg_path: Some(PathBuf::from("/nonexistent/bin/ffmpeg_12345")),
            ffprobe_path: Some(ffprobe.path().to_path_buf()),
        };

        let tools = ResolvedTools::resolve(&config, false).unwrap();
        assert_eq!(tools.ffmpeg, PathBuf::from("/nonexistent/bin/ffmpeg_12345"));

        assert_matches!(
            ResolvedTools::resolve(&config, true),
            Err(Error::ToolUnavailable { tool }) if tool == "ffmpeg"
        );
    }
}
