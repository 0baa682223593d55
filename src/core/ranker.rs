use std::cmp::Ordering;

/// Default weight applied to the normalized sharpness score when combining
/// it with the difference score. Sharpness dominates on purpose: a blurry
/// frame is worth less than a frame that merely resembles its neighbor.
pub const DEFAULT_SHARPNESS_WEIGHT: f64 = 5.0;

/// A candidate's rank result: its position in the sampled batch and its
/// combined score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked {
    pub position: usize,
    pub score: f64,
}

/// Min-max normalize a batch of scores to [0, 1].
///
/// When every value is equal the denominator is zero; the whole batch
/// maps to 0.0 so a degenerate metric simply stops discriminating
/// instead of poisoning the combined score with NaN.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };

    let (min, max) = values.iter().fold((first, first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });
    let range = max - min;

    if range == 0.0 {
        return vec![0.0; values.len()];
    }

    values.iter().map(|v| (v - min) / range).collect()
}

/// Combine normalized sharpness and difference scores into one ranking
/// score per candidate.
pub fn combined_scores(sharpness: &[f64], diffs: &[f64], sharpness_weight: f64) -> Vec<f64> {
    let norm_sharpness = normalize(sharpness);
    let norm_diffs = normalize(diffs);

    norm_sharpness
        .iter()
        .zip(norm_diffs.iter())
        .map(|(s, d)| sharpness_weight * s + d)
        .collect()
}

/// Pick the `count` highest-scoring candidates, best first.
/// Ties keep sample order (stable sort), so the earlier frame wins.
pub fn select_top(scores: &[f64], count: usize) -> Vec<Ranked> {
    let mut ranked: Vec<Ranked> = scores
        .iter()
        .enumerate()
        .map(|(position, &score)| Ranked { position, score })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked.truncate(count);
    ranked
}
