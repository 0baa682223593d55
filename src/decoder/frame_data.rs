/// Single-channel luminance frame, row-major, one byte per pixel.
#[derive(Clone)]
pub struct GrayFrame {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl GrayFrame {
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> Self {
        Self { data, width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
