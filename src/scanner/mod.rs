//! Barcode band scanning
//!
//! - Scan direction detection from a fixed sentinel pixel
//! - Thresholding the band of every row into 12 eight-bit frames

/// Row band extraction into the frame grid
pub mod frames;
/// Sentinel-based scan direction
pub mod orientation;

pub use frames::{BAND_START, MIN_WIDTH, band_bits, extract, extract_with_config};
pub use orientation::{Orientation, orientation};
