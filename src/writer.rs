use anyhow::{Result, anyhow};
use opencv::{core, imgcodecs};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::extractor::SelectedFrame;

/// Output file name for the i'th frame in chronological order.
/// Three-digit padding keeps directory listings sorted below 1000 files.
pub fn file_name(index: usize) -> String {
    format!("image{:03}.png", index)
}

/// Persist the selection as PNG files, renumbered in original frame
/// order so the output reads chronologically regardless of score rank.
pub fn save_frames(mut frames: Vec<SelectedFrame>, output_dir: &str) -> Result<()> {
    frames.sort_by_key(|f| f.frame_index);

    let dir = Path::new(output_dir);
    fs::create_dir_all(dir)?;

    for (i, frame) in frames.iter().enumerate() {
        let output_path: PathBuf = dir.join(file_name(i));
        let path_str = output_path.to_string_lossy();

        let written = imgcodecs::imwrite(&path_str, &frame.image, &core::Vector::new())?;
        if !written {
            return Err(anyhow!("Failed to write image: {}", path_str));
        }
        println!("Saved {}", path_str);
    }

    Ok(())
}
