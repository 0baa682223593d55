pub mod frame_data;
pub mod video;

pub use frame_data::GrayFrame;
pub use video::VideoDecoder;
