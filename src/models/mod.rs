pub mod bitmap;
pub mod frame;
pub mod result;

pub use bitmap::{BitmapHeader, BitmapImage, Pixel};
pub use frame::{BAND_WIDTH, BITS_PER_FRAME, BitFrame, FRAMES_PER_ROW, FrameGrid, ValidityTable};
pub use result::DecodeResult;
