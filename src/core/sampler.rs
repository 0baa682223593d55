/// How many candidate frames to score per requested output frame.
/// Scoring 3x more than needed gives the ranker room to reject
/// blurry or repetitive candidates while keeping the pass cheap.
pub const OVERSAMPLE_FACTOR: usize = 3;

/// Systematic sampling plan over a video's frame sequence.
///
/// Frames are visited in decode order; a frame at position `i` is scored
/// iff `i % step == 0`. This biases toward even temporal coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePlan {
    pub step: usize,
    pub target_count: usize,
}

impl SamplePlan {
    pub fn new(total_frames: usize, requested: usize) -> Self {
        // A video shorter than the request just yields every frame
        let target_count = total_frames.min(requested);
        if target_count == 0 {
            return Self { step: 1, target_count: 0 };
        }

        let step = (total_frames / (requested * OVERSAMPLE_FACTOR)).max(1);
        Self { step, target_count }
    }

    pub fn is_sampled(&self, frame_index: usize) -> bool {
        frame_index % self.step == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_for_long_video() {
        // 300 frames, 20 requested: analyze 60 candidates, every 5th frame
        let plan = SamplePlan::new(300, 20);
        assert_eq!(plan.step, 5);
        assert_eq!(plan.target_count, 20);
    }

    #[test]
    fn test_short_video_clamps_request() {
        let plan = SamplePlan::new(10, 20);
        assert_eq!(plan.step, 1);
        assert_eq!(plan.target_count, 10);
    }

    #[test]
    fn test_step_never_below_one() {
        let plan = SamplePlan::new(50, 100);
        assert_eq!(plan.step, 1);

        let plan = SamplePlan::new(1, 1);
        assert_eq!(plan.step, 1);
    }

    #[test]
    fn test_empty_video() {
        let plan = SamplePlan::new(0, 20);
        assert_eq!(plan.target_count, 0);
        assert_eq!(plan.step, 1);
    }

    #[test]
    fn test_sampled_indices_are_multiples_of_step() {
        let plan = SamplePlan::new(300, 20);
        let sampled: Vec<usize> = (0..300).filter(|&i| plan.is_sampled(i)).collect();
        assert_eq!(sampled.len(), 60);
        assert_eq!(sampled[0], 0);
        assert_eq!(sampled[1], 5);
        assert_eq!(*sampled.last().unwrap(), 295);
    }

    #[test]
    fn test_first_frame_always_sampled() {
        for total in [1, 7, 100, 5000] {
            let plan = SamplePlan::new(total, 20);
            assert!(plan.is_sampled(0));
        }
    }
}
