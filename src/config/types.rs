use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vidsplit_av::actions::ExtractOptions;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub split: SplitConfig,
}

/// Explicit tool locations. Unset or missing paths fall back to `PATH`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,

    #[serde(default)]
    pub ffprobe_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SplitConfig {
    /// Replace existing segment files (`-y`) rather than skip them (`-n`)
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,

    /// Extra ffmpeg arguments placed right before the output path
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_overwrite() -> bool {
    true
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            overwrite: default_overwrite(),
            extra_args: Vec::new(),
        }
    }
}

impl SplitConfig {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            overwrite: self.overwrite,
            extra_args: self.extra_args.clone(),
        }
    }
}
