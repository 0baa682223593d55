use crate::decoder::GrayFrame;

/// Sharpness of a luminance frame, measured as the variance of its
/// discrete Laplacian response. Blurred frames have weak second
/// derivatives everywhere, so their response barely varies; sharp
/// frames spike at edges. Higher is sharper.
///
/// Uses the 3x3 four-neighbor kernel (0,1,0 / 1,-4,1 / 0,1,0) with
/// reflected borders, the same operator OpenCV applies for ksize=1.
pub fn sharpness(frame: &GrayFrame) -> f64 {
    let n = frame.pixel_count();
    if n == 0 {
        return 0.0;
    }

    let mut response = Vec::with_capacity(n);
    for y in 0..frame.height {
        for x in 0..frame.width {
            let center = luma_at(frame, x as isize, y as isize);
            let lap = luma_at(frame, x as isize, y as isize - 1)
                + luma_at(frame, x as isize, y as isize + 1)
                + luma_at(frame, x as isize - 1, y as isize)
                + luma_at(frame, x as isize + 1, y as isize)
                - 4.0 * center;
            response.push(lap);
        }
    }

    let mean = response.iter().sum::<f64>() / n as f64;
    response.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n as f64
}

/// Average per-pixel absolute luminance difference between two frames.
/// Dividing by the pixel count makes the score resolution independent.
/// Higher means the frames are more visually distinct.
pub fn frame_difference(current: &GrayFrame, previous: &GrayFrame) -> f64 {
    let n = current.pixel_count();
    if n == 0 || n != previous.pixel_count() {
        return 0.0;
    }

    let sum: u64 = current
        .data
        .iter()
        .zip(previous.data.iter())
        .map(|(&a, &b)| (a as i16 - b as i16).unsigned_abs() as u64)
        .sum();

    sum as f64 / n as f64
}

/// Streaming scorer over the sampled frame sequence. Remembers the
/// previously sampled frame so the difference metric compares against
/// the last frame that was actually scored, not the last decoded one.
pub struct FrameScorer {
    prev: Option<GrayFrame>,
}

impl FrameScorer {
    pub fn new() -> Self {
        Self { prev: None }
    }

    /// Returns (sharpness, difference) for one sampled frame, taking
    /// ownership of the luminance buffer as the next comparison baseline.
    /// The first frame has no predecessor and scores 0.0 difference.
    pub fn score(&mut self, frame: GrayFrame) -> (f64, f64) {
        let sharp = sharpness(&frame);
        let diff = match &self.prev {
            Some(prev) => frame_difference(&frame, prev),
            None => 0.0,
        };
        self.prev = Some(frame);
        (sharp, diff)
    }
}

// Reflect-101 border: pixel -1 maps to 1, pixel w maps to w-2
fn luma_at(frame: &GrayFrame, x: isize, y: isize) -> f64 {
    let x = reflect(x, frame.width);
    let y = reflect(y, frame.height);
    frame.data[y * frame.width + x] as f64
}

fn reflect(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    if i < 0 {
        (-i) as usize
    } else if i as usize >= len {
        2 * (len - 1) - i as usize
    } else {
        i as usize
    }
}
