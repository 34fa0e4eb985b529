//! Synthetic barcode bitmaps
//!
//! Used by tests and benchmarks to produce well-formed 24-bit bitmaps with
//! a known barcode in every row.

use crate::codec;
use crate::codec::header::{HEADER_SIZE, row_stride};
use crate::error::FormatError;
use crate::models::{BAND_WIDTH, BITS_PER_FRAME, BitFrame, BitmapImage, FRAMES_PER_ROW, Pixel};
use crate::scanner::{BAND_START, Orientation};

const INFO_HEADER_SIZE: u32 = 40;
/// 72 dpi
const PIXELS_PER_METER: u32 = 2835;

/// Parity-valid frame carrying `digit % 10`.
///
/// Guard bits are fixed to `bit0 = 0` and `bit7 = 1`, which makes the first
/// band pixel white for a normal layout and black for a reversed one.
pub fn encode_digit(digit: u8) -> BitFrame {
    let v = digit % 10;
    let (b1, b2, b4, b5) = ((v >> 3) & 1, (v >> 2) & 1, (v >> 1) & 1, v & 1);
    BitFrame::new([0, b1, b2, b1 ^ b2, b4, b5, b4 ^ b5, 1])
}

/// Physical left-to-right band for a row of frames
pub fn layout_band(frames: &[BitFrame; FRAMES_PER_ROW], orientation: Orientation) -> [u8; BAND_WIDTH] {
    let mut band = [0u8; BAND_WIDTH];
    for (chunk, frame) in band.chunks_exact_mut(BITS_PER_FRAME).zip(frames) {
        chunk.copy_from_slice(frame.bits());
    }
    if orientation == Orientation::Reversed {
        band.reverse();
    }
    band
}

/// Builder for a barcode bitmap, one stored row per pushed frame row
#[derive(Debug, Clone)]
pub struct BarcodeBitmap {
    width: usize,
    orientation: Orientation,
    rows: Vec<[BitFrame; FRAMES_PER_ROW]>,
}

impl Default for BarcodeBitmap {
    fn default() -> Self {
        Self::new()
    }
}

impl BarcodeBitmap {
    pub const DEFAULT_WIDTH: usize = 102;

    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            orientation: Orientation::Normal,
            rows: Vec::new(),
        }
    }

    /// Image width in pixels; columns past the width are dropped
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Append a row holding these frames
    pub fn row(mut self, frames: [BitFrame; FRAMES_PER_ROW]) -> Self {
        self.rows.push(frames);
        self
    }

    /// Append a row encoding these digits
    pub fn row_digits(self, digits: [u8; FRAMES_PER_ROW]) -> Self {
        self.row(digits.map(encode_digit))
    }

    /// Serialize as a bottom-up 24-bit BI_RGB bitmap
    pub fn to_bytes(&self) -> Vec<u8> {
        let width = self.width as u32;
        let height = self.rows.len() as u32;
        let stride = row_stride(24, width) as usize;
        let data_size = (stride * self.rows.len()) as u32;

        let mut out = Vec::with_capacity(HEADER_SIZE + data_size as usize);
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&(HEADER_SIZE as u32 + data_size).to_le_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&(HEADER_SIZE as u32).to_le_bytes());
        out.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&24u16.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&data_size.to_le_bytes());
        out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
        out.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
        out.extend_from_slice(&[0; 8]);
        debug_assert_eq!(out.len(), HEADER_SIZE);

        for frames in &self.rows {
            let band = layout_band(frames, self.orientation);
            let row_start = out.len();
            for x in 0..self.width {
                let black = x
                    .checked_sub(BAND_START)
                    .and_then(|i| band.get(i))
                    .is_some_and(|&bit| bit == 1);
                let px = if black { Pixel::BLACK } else { Pixel::WHITE };
                out.extend_from_slice(&[px.blue, px.green, px.red]);
            }
            out.resize(row_start + stride, 0);
        }
        out
    }

    /// Serialize and decode through the codec
    pub fn build(&self) -> Result<BitmapImage, FormatError> {
        codec::decode(&self.to_bytes())
    }
}
