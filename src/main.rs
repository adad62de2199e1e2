mod cli;

use vidsplit::{
    config,
    splitter::{self, FfmpegRunner, SegmentExecutor, SplitEvent, SplitReport},
    tools::ResolvedTools,
    MediaFile,
};
use vidsplit_av::FfprobeProber;
use vidsplit_media::format_hms;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "vidsplit=debug,vidsplit_av=debug,vidsplit_media=debug".to_string()
        } else {
            // stdout carries the report; keep stderr quiet unless something is off
            "vidsplit=warn,vidsplit_av=warn,vidsplit_media=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    split_file(&cli)
}

fn split_file(cli: &Cli) -> Result<()> {
    let config = config::load_config_or_default(cli.config.as_deref())?;

    // Everything up to the first segment is fatal on error.
    let segment_seconds = splitter::validate_segment_duration(cli.duration)?;
    let media = MediaFile::open(&cli.input_file)?;
    let tools = ResolvedTools::resolve(&config.tools, !cli.dry_run)?;
    if cli.verbose {
        tools.log_versions();
    }

    let prober = FfprobeProber::new(tools.ffprobe.clone());
    let prepared = splitter::prepare(media, segment_seconds, &prober)?;

    println!("Input file: {}", prepared.input.path().display());
    println!("Output directory: {}", prepared.target.dir().display());
    println!(
        "Total video duration: {}",
        format_hms(prepared.total_seconds())
    );
    println!("Will create {} segments", prepared.plan.len());

    if cli.dry_run {
        println!("\n=== DRY RUN - No files will be created ===");
    } else {
        println!("\nStarting video processing...");
    }

    let runner = FfmpegRunner::new(tools.ffmpeg, config.split.extract_options());
    let executor =
        SegmentExecutor::new(runner, cli.dry_run).with_progress_callback(Box::new(print_event));
    let report = executor.execute(&prepared.input, &prepared.plan, &prepared.target)?;

    print_summary(&report)
}

fn print_event(event: &SplitEvent<'_>) {
    match event {
        SplitEvent::Planned {
            segment,
            total,
            file_name,
            command,
        } => {
            println!(
                "Segment {}/{}: {} - {} -> {}",
                segment.index,
                total,
                format_hms(segment.start_seconds),
                format_hms(segment.end_seconds()),
                file_name
            );
            println!("  {}", command);
        }
        SplitEvent::Started { segment, total, .. } => {
            println!(
                "Processing segment {}/{}: {} - {}",
                segment.index,
                total,
                format_hms(segment.start_seconds),
                format_hms(segment.end_seconds())
            );
        }
        SplitEvent::Completed {
            segment, file_name, ..
        } => {
            println!("✓ Segment {} completed: {}", segment.index, file_name);
        }
        SplitEvent::Failed { segment, error, .. } => {
            println!("✗ Error processing segment {}: {}", segment.index, error);
        }
    }
}

fn print_summary(report: &SplitReport) -> Result<()> {
    if report.dry_run {
        println!("\n[DRY RUN] Would create {} segments", report.total());
        return Ok(());
    }

    if report.is_success() {
        println!(
            "\n✓ All segments created successfully in: {}",
            report.output_dir.display()
        );
        return Ok(());
    }

    let failed: Vec<String> = report
        .failed_indices()
        .iter()
        .map(|i| i.to_string())
        .collect();
    println!(
        "\n✗ {} of {} segments created in: {}",
        report.succeeded(),
        report.total(),
        report.output_dir.display()
    );
    println!("Failed segments: {}", failed.join(", "));

    anyhow::bail!(
        "{} of {} segments failed",
        failed.len(),
        report.total()
    )
}
