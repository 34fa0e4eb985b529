/// Band slicing of every row into bit frames
use log::debug;
use rayon::prelude::*;

use super::orientation::{Orientation, orientation};
use crate::config::DecodeConfig;
use crate::error::FormatError;
use crate::models::{
    BAND_WIDTH, BITS_PER_FRAME, BitFrame, BitmapImage, FRAMES_PER_ROW, FrameGrid, Pixel,
};

/// First column of the scanned band
pub const BAND_START: usize = 3;
/// Narrowest image whose rows contain the whole band
pub const MIN_WIDTH: usize = BAND_START + BAND_WIDTH;

/// Threshold the band of one row into bits (black = 1), in reading order.
///
/// `row` must be at least [`MIN_WIDTH`] pixels long.
pub fn band_bits(row: &[Pixel], orientation: Orientation) -> [u8; BAND_WIDTH] {
    let mut bits = [0u8; BAND_WIDTH];
    for (bit, px) in bits.iter_mut().zip(&row[BAND_START..MIN_WIDTH]) {
        *bit = u8::from(px.is_black());
    }
    if orientation == Orientation::Reversed {
        bits.reverse();
    }
    bits
}

fn fill_row(row: &[Pixel], orientation: Orientation, frames: &mut [BitFrame]) {
    let bits = band_bits(row, orientation);
    for (frame, chunk) in frames.iter_mut().zip(bits.chunks_exact(BITS_PER_FRAME)) {
        *frame = BitFrame::from_slice(chunk);
    }
}

/// Reject images whose rows cannot hold the band
pub fn check_width(image: &BitmapImage) -> Result<(), FormatError> {
    if image.width() < MIN_WIDTH {
        return Err(FormatError::ImageTooNarrow {
            width: image.header().width,
            required: MIN_WIDTH as u32,
        });
    }
    Ok(())
}

/// Extract the frame grid with the default configuration
pub fn extract(image: &BitmapImage) -> Result<FrameGrid, FormatError> {
    extract_with_config(image, &DecodeConfig::default())
}

/// Extract [`FRAMES_PER_ROW`] frames from every row.
///
/// The orientation is probed once and applied to all rows.
pub fn extract_with_config(
    image: &BitmapImage,
    config: &DecodeConfig,
) -> Result<FrameGrid, FormatError> {
    check_width(image)?;
    let orientation = orientation(image);
    let rows = image.height();
    debug!("extracting {} rows, orientation {:?}", rows, orientation);

    let mut grid = FrameGrid::new(rows);
    if config.use_parallel(rows) {
        grid.as_mut_slice()
            .par_chunks_mut(FRAMES_PER_ROW)
            .enumerate()
            .for_each(|(y, frames)| fill_row(image.row(y), orientation, frames));
    } else {
        for (y, frames) in grid.rows_mut().enumerate() {
            fill_row(image.row(y), orientation, frames);
        }
    }
    Ok(grid)
}
