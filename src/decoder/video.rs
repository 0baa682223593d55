use anyhow::{Result, anyhow};
use opencv::{
    prelude::*,
    videoio,
    imgproc,
};
use super::frame_data::GrayFrame;

/// Sequential frame source over an open video file.
pub struct VideoDecoder {
    capture: videoio::VideoCapture,
    total_frames: usize,
    fps: f64,
}

impl VideoDecoder {
    pub fn new(path: &str) -> Result<Self> {
        // CAP_ANY allows OpenCV to choose the best backend
        // macOS: AVFoundation (VideoToolbox GPU decode)
        // Windows: Media Foundation (GPU decode)
        // Linux: V4L2/GStreamer
        let mut capture = videoio::VideoCapture::from_file(path, videoio::CAP_ANY)?;

        // Try to enforce HW acceleration
        // Note: This might not work on all backends/platforms, but it's worth setting
        let _ = capture.set(videoio::CAP_PROP_HW_ACCELERATION, videoio::VIDEO_ACCELERATION_ANY as f64);

        if !capture.is_opened()? {
            return Err(anyhow!("Failed to open video file: {}", path));
        }

        let fps = capture.get(videoio::CAP_PROP_FPS)?;
        // Some containers report 0 or a negative count; clamp so callers
        // can treat the value as a plain upper-bound estimate
        let total_frames = capture.get(videoio::CAP_PROP_FRAME_COUNT)?.max(0.0) as usize;

        Ok(Self {
            capture,
            total_frames,
            fps,
        })
    }

    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Read the next frame in decode order. Returns None at EOF.
    pub fn read_frame(&mut self) -> Result<Option<Mat>> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? {
            return Ok(None); // EOF
        }
        if frame.empty() {
            return Ok(None);
        }
        Ok(Some(frame))
    }

    /// Convert a decoded BGR frame to a luminance buffer.
    pub fn to_gray(frame: &Mat) -> Result<GrayFrame> {
        let mut gray = Mat::default();
        imgproc::cvt_color(frame, &mut gray, imgproc::COLOR_BGR2GRAY, 0)?;

        if !gray.is_continuous() {
            return Err(anyhow!("Frame data is not continuous"));
        }

        let width = gray.cols() as usize;
        let height = gray.rows() as usize;
        let data = gray.data_bytes()?.to_vec();

        Ok(GrayFrame::new(data, width, height))
    }
}
