/// Scan direction detection
use crate::models::BitmapImage;

/// Row and column of the pixel that encodes the scan direction
pub const SENTINEL_ROW: usize = 0;
pub const SENTINEL_COL: usize = 3;

/// Direction in which the band of a row must be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Bits are read left to right
    Normal,
    /// Bits are stored right to left and must be reversed
    Reversed,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Self::Normal => Self::Reversed,
            Self::Reversed => Self::Normal,
        }
    }
}

/// Probe the sentinel pixel: black means the barcode runs reversed.
///
/// An image too small to contain the sentinel reads as `Normal`.
pub fn orientation(image: &BitmapImage) -> Orientation {
    match image.pixel(SENTINEL_ROW, SENTINEL_COL) {
        Some(px) if px.is_black() => Orientation::Reversed,
        _ => Orientation::Normal,
    }
}
