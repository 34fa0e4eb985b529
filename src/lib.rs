//! barscan - parity-checked 1-D barcode decoding from 24-bit bitmaps
//!
//! A barcode symbol is twelve 8-bit frames laid out as black/white pixel
//! runs along every row of a Windows bitmap. Each row is a repeated scan
//! of the same symbol; a column decodes as long as at least one row holds
//! a frame that passes parity.
//!
//! # Example
//! ```
//! use barscan::tools::BarcodeBitmap;
//! use barscan::DecodeResult;
//!
//! let bytes = BarcodeBitmap::new()
//!     .row_digits([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1])
//!     .to_bytes();
//! let result = barscan::decode_bytes(&bytes).unwrap();
//! assert_eq!(result, DecodeResult::Digits([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1]));
//! ```

#![forbid(unsafe_code)]

/// Bitmap container decode / encode
pub mod codec;
pub mod config;
/// Parity validation and cross-row digit decoding
pub mod decoder;
pub mod error;
/// Core data structures (BitmapImage, BitFrame, FrameGrid, DecodeResult)
pub mod models;
/// Orientation probe and frame extraction
pub mod scanner;
/// Synthetic barcode bitmap generation
pub mod tools;

pub use config::DecodeConfig;
pub use decoder::BarcodeDecoder;
pub use error::{Error, FormatError, Result};
pub use models::{BitFrame, BitmapImage, DecodeResult, FrameGrid, Pixel};
pub use scanner::Orientation;

use std::path::Path;

/// Decode the barcode of an already parsed bitmap
pub fn decode(image: &BitmapImage) -> Result<DecodeResult> {
    Ok(BarcodeDecoder::new().decode(image)?)
}

/// Parse a bitmap byte stream and decode its barcode
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodeResult> {
    let image = codec::decode(bytes)?;
    decode(&image)
}

/// Read a bitmap file and decode its barcode
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<DecodeResult> {
    decode(&read_bitmap(path)?)
}

/// Read and parse a bitmap file
pub fn read_bitmap<P: AsRef<Path>>(path: P) -> Result<BitmapImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(codec::decode(&bytes)?)
}

/// Serialize `image` and write it to `path`
pub fn write_bitmap<P: AsRef<Path>>(path: P, image: &BitmapImage) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, codec::encode(image)).map_err(|e| Error::io(path, e))
}
