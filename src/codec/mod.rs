//! Bitmap container codec
//!
//! - Header field extraction at fixed little-endian offsets
//! - Pixel array decode into a row-major grid and lossless re-encode

/// 24-bit bitmap decode / encode
pub mod bmp;
/// Standard header layout and validation
pub mod header;

pub use bmp::{decode, encode};
