mod core;
mod decoder;
mod utils;
mod writer;

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::core::extractor;
use crate::core::ranker::DEFAULT_SHARPNESS_WEIGHT;

/// Extract the sharpest, most distinct frames from a video file.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input video file (default: first video in the current directory)
    #[arg(short, long)]
    video: Option<PathBuf>,

    /// Directory to save the output frames
    #[arg(short, long, default_value = "images")]
    output: String,

    /// Number of frames to select
    #[arg(short, long = "select_top", default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    select_top: u32,

    /// Weight applied to the normalized sharpness score when ranking
    #[arg(short = 'w', long = "sharpness_weight", default_value_t = DEFAULT_SHARPNESS_WEIGHT)]
    sharpness_weight: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let video_path = match cli.video {
        Some(path) => path,
        None => utils::file_utils::discover_default_video(Path::new("."))?,
    };
    println!("Using video file: {}", video_path.display());

    let selected = extractor::extract_best_frames(
        &video_path,
        cli.select_top as usize,
        cli.sharpness_weight,
    )?;

    writer::save_frames(selected, &cli.output)?;

    Ok(())
}
