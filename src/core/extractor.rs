use anyhow::Result;
use opencv::prelude::*;
use std::cmp::Ordering;
use std::path::Path;

use crate::core::ranker;
use crate::core::sampler::SamplePlan;
use crate::core::scorer;
use crate::decoder::VideoDecoder;

/// A frame that survived ranking, still holding its decoded raster so
/// the writer can persist the original pixels.
pub struct SelectedFrame {
    pub frame_index: usize,
    pub score: f64,
    pub image: Mat,
}

struct FrameSample {
    frame_index: usize,
    image: Mat,
    sharpness: f64,
    diff: f64,
}

/// Single pass over the video: sample evenly spaced frames, score each
/// for sharpness and for difference from the previous sampled frame,
/// then rank and keep the best `requested` frames.
pub fn extract_best_frames(
    video_path: &Path,
    requested: usize,
    sharpness_weight: f64,
) -> Result<Vec<SelectedFrame>> {
    let mut decoder = VideoDecoder::new(&video_path.to_string_lossy())?;

    let total_frames = decoder.total_frames();
    println!("Video has {} frames at {} FPS", total_frames, decoder.fps());

    if total_frames > 0 && total_frames <= requested {
        println!(
            "Video has fewer frames ({}) than requested ({})",
            total_frames, requested
        );
    }

    let plan = SamplePlan::new(total_frames, requested);

    // Score every step'th frame, keeping its raster for output
    let mut samples: Vec<FrameSample> = Vec::new();
    let mut frame_scorer = scorer::FrameScorer::new();
    let mut frame_index = 0usize;

    while let Some(image) = decoder.read_frame()? {
        if plan.is_sampled(frame_index) {
            let gray = VideoDecoder::to_gray(&image)?;
            let (sharpness, diff) = frame_scorer.score(gray);

            samples.push(FrameSample {
                frame_index,
                image,
                sharpness,
                diff,
            });
        }
        frame_index += 1;
    }

    if samples.is_empty() {
        return Ok(Vec::new());
    }

    let sharpness_scores: Vec<f64> = samples.iter().map(|s| s.sharpness).collect();
    let diff_scores: Vec<f64> = samples.iter().map(|s| s.diff).collect();
    let scores = ranker::combined_scores(&sharpness_scores, &diff_scores, sharpness_weight);

    for (sample, score) in samples.iter().zip(scores.iter()) {
        println!("Frame {}: Score: {:.2}", sample.frame_index, score);
    }

    // The metadata frame count behind plan.target_count can lie for some
    // containers; the decode loop is ground truth, so cap by what was
    // actually sampled
    let count = requested.min(samples.len());
    let ranked = ranker::select_top(&scores, count);

    // Pull the winners out of the sample set; walk positions descending
    // so swap_remove leaves earlier positions intact
    let mut selected: Vec<SelectedFrame> = Vec::with_capacity(ranked.len());
    let mut winners = ranked;
    winners.sort_by(|a, b| b.position.cmp(&a.position));
    for win in winners {
        let sample = samples.swap_remove(win.position);
        selected.push(SelectedFrame {
            frame_index: sample.frame_index,
            score: win.score,
            image: sample.image,
        });
    }

    // Best score first; the writer re-sorts chronologically on its own
    selected.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    Ok(selected)
}
