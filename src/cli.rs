use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  # Split into 30-minute segments
  vidsplit video.mp4 --duration 1800

  # Split into 1-hour segments
  vidsplit video.mp4 --duration 3600

  # Dry run to see what would be created
  vidsplit video.mp4 --duration 1800 --dry-run";

#[derive(Parser)]
#[command(name = "vidsplit")]
#[command(author, version, about = "Split large video files into manageable segments")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Input video file path
    pub input_file: PathBuf,

    /// Duration of each segment in seconds (e.g., 1800 for 30 minutes)
    #[arg(short, long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub duration: i64,

    /// Show what would be done without actually processing the video
    #[arg(long)]
    pub dry_run: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["vidsplit", "video.mp4", "-d", "1800", "--dry-run"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("video.mp4"));
        assert_eq!(cli.duration, 1800);
        assert!(cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn negative_duration_reaches_validation() {
        let cli = Cli::try_parse_from(["vidsplit", "video.mp4", "--duration", "-5"]).unwrap();
        assert_eq!(cli.duration, -5);
    }

    #[test]
    fn duration_is_required() {
        assert!(Cli::try_parse_from(["vidsplit", "video.mp4"]).is_err());
    }

    #[test]
    fn duration_must_be_integer() {
        assert!(Cli::try_parse_from(["vidsplit", "video.mp4", "-d", "1.5"]).is_err());
    }
}
