//! Error taxonomy
//!
//! Structural problems with the bitmap container are [`FormatError`]s; the
//! only other failure is the OS refusing to read or write a file. An
//! unreadable barcode is not an error at all, see
//! [`DecodeResult`](crate::DecodeResult).

use std::path::PathBuf;

/// Structural violations of the 24-bit bitmap container or of the
/// minimum geometry needed to scan a barcode.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("header truncated: need {required} bytes, got {actual}")]
    TruncatedHeader { required: usize, actual: usize },
    #[error("bad magic {found:?}, expected \"BM\"")]
    BadMagic { found: [u8; 2] },
    #[error("unsupported bit depth {bits_per_pixel}, only 24 is supported")]
    UnsupportedBitDepth { bits_per_pixel: u16 },
    #[error("pixel array offset {offset} lies beyond the end of the {len}-byte stream")]
    PixelArrayOffsetOutOfBounds { offset: u32, len: usize },
    #[error("pixel data truncated: header declares {declared} bytes, only {actual} present")]
    TruncatedPixelData { declared: u32, actual: usize },
    #[error("{height} rows of {row_stride} bytes do not fit in {data_size} bytes of pixel data")]
    PixelDataTooSmall {
        height: u32,
        row_stride: u32,
        data_size: u32,
    },
    #[error(
        "size fields disagree: data size {data_size} + pixel offset {pixel_array_offset} != file size {file_size}"
    )]
    SizeMismatch {
        data_size: u32,
        pixel_array_offset: u32,
        file_size: u32,
    },
    #[error("image is {width} px wide, scanning needs at least {required}")]
    ImageTooNarrow { width: u32, required: u32 },
}

/// Crate-level error.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("file format error: {0}")]
    Format(#[from] FormatError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
