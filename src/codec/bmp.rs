//! 24-bit bitmap decode / encode
//!
//! Rows are kept in the order they are stored (bottom-up for a positive
//! height) and pixels keep their stored B, G, R channel order, so a
//! decode followed by an encode reproduces the input byte for byte.

use log::debug;

use super::header;
use crate::error::FormatError;
use crate::models::{BitmapImage, Pixel};

const BYTES_PER_PIXEL: usize = 3;

/// Parse a complete bitmap byte stream.
pub fn decode(bytes: &[u8]) -> Result<BitmapImage, FormatError> {
    let header = header::parse(bytes)?;
    debug!(
        "bitmap header: {}x{} bpp={} stride={} offset={} data_size={} file_size={}",
        header.width,
        header.height,
        header.bits_per_pixel,
        header.row_stride,
        header.pixel_array_offset,
        header.data_size,
        header.file_size
    );

    let offset = header.pixel_array_offset as usize;
    if offset > bytes.len() {
        return Err(FormatError::PixelArrayOffsetOutOfBounds {
            offset: header.pixel_array_offset,
            len: bytes.len(),
        });
    }
    let raw_header = bytes[..offset].to_vec();

    let available = bytes.len() - offset;
    if available < header.data_size as usize {
        return Err(FormatError::TruncatedPixelData {
            declared: header.data_size,
            actual: available,
        });
    }
    let data = &bytes[offset..offset + header.data_size as usize];

    let width = header.width as usize;
    let height = header.height as usize;
    let stride = header.row_stride as usize;

    // The last row only has to reach its final pixel, not its padding.
    let required = if height == 0 || width == 0 {
        0
    } else {
        (height as u64 - 1) * stride as u64 + (BYTES_PER_PIXEL * width) as u64
    };
    if required > data.len() as u64 {
        return Err(FormatError::PixelDataTooSmall {
            height: header.height,
            row_stride: header.row_stride,
            data_size: header.data_size,
        });
    }

    let mut pixels = Vec::with_capacity(width * height);
    if width > 0 {
        for row in data.chunks(stride).take(height) {
            pixels.extend(
                row[..BYTES_PER_PIXEL * width]
                    .chunks_exact(BYTES_PER_PIXEL)
                    .map(|bgr| Pixel::new(bgr[0], bgr[1], bgr[2])),
            );
        }
    }

    if header.data_size as u64 + header.pixel_array_offset as u64 != header.file_size as u64 {
        return Err(FormatError::SizeMismatch {
            data_size: header.data_size,
            pixel_array_offset: header.pixel_array_offset,
            file_size: header.file_size,
        });
    }

    Ok(BitmapImage::from_parts(header, raw_header, pixels))
}

/// Serialize an image: the preserved header prefix, then every row as
/// B, G, R bytes zero-padded to the row stride.
///
/// Header fields are not recomputed, so this is only meaningful for
/// images produced by [`decode`] or copies of them.
pub fn encode(image: &BitmapImage) -> Vec<u8> {
    let stride = image.header().row_stride as usize;
    let padding = stride.saturating_sub(BYTES_PER_PIXEL * image.width());

    let mut out = Vec::with_capacity(image.raw_header().len() + stride * image.height());
    out.extend_from_slice(image.raw_header());
    for y in 0..image.height() {
        for px in image.row(y) {
            out.extend_from_slice(&[px.blue, px.green, px.red]);
        }
        out.resize(out.len() + padding, 0);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::header::{DATA_SIZE_OFFSET, FILE_SIZE_OFFSET, HEADER_SIZE};

    /// 2x2 bitmap: stride 8, two bytes of padding per row
    fn two_by_two() -> Vec<u8> {
        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes[0..2].copy_from_slice(b"BM");
        bytes[2..6].copy_from_slice(&70u32.to_le_bytes());
        bytes[10..14].copy_from_slice(&54u32.to_le_bytes());
        bytes[14..18].copy_from_slice(&40u32.to_le_bytes());
        bytes[18..22].copy_from_slice(&2u32.to_le_bytes());
        bytes[22..26].copy_from_slice(&2u32.to_le_bytes());
        bytes[26..28].copy_from_slice(&1u16.to_le_bytes());
        bytes[28..30].copy_from_slice(&24u16.to_le_bytes());
        bytes[34..38].copy_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&[1, 2, 3, 4, 5, 6, 0, 0]);
        bytes.extend_from_slice(&[7, 8, 9, 10, 11, 12, 0, 0]);
        bytes
    }

    #[test]
    fn test_decode_pixels_in_stored_order() {
        let img = decode(&two_by_two()).unwrap();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.pixel(0, 0), Some(Pixel::new(1, 2, 3)));
        assert_eq!(img.pixel(0, 1), Some(Pixel::new(4, 5, 6)));
        assert_eq!(img.pixel(1, 0), Some(Pixel::new(7, 8, 9)));
        assert_eq!(img.pixel(1, 1).unwrap().red, 12);
        assert_eq!(img.raw_header().len(), 54);
    }

    #[test]
    fn test_encode_round_trip() {
        let bytes = two_by_two();
        assert_eq!(encode(&decode(&bytes).unwrap()), bytes);
    }

    #[test]
    fn test_decode_keeps_extended_header() {
        // 4 extra bytes between the standard header and the pixel array
        let mut bytes = two_by_two();
        bytes.splice(54..54, [0xAA, 0xBB, 0xCC, 0xDD]);
        bytes[2..6].copy_from_slice(&74u32.to_le_bytes());
        bytes[10..14].copy_from_slice(&58u32.to_le_bytes());

        let img = decode(&bytes).unwrap();
        assert_eq!(&img.raw_header()[54..], &[0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(img.pixel(0, 0), Some(Pixel::new(1, 2, 3)));
        assert_eq!(encode(&img), bytes);
    }

    #[test]
    fn test_decode_truncated_pixel_data() {
        let bytes = two_by_two();
        assert_eq!(
            decode(&bytes[..bytes.len() - 1]),
            Err(FormatError::TruncatedPixelData {
                declared: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn test_decode_size_mismatch() {
        let mut bytes = two_by_two();
        bytes[FILE_SIZE_OFFSET..FILE_SIZE_OFFSET + 4].copy_from_slice(&71u32.to_le_bytes());
        assert_eq!(
            decode(&bytes),
            Err(FormatError::SizeMismatch {
                data_size: 16,
                pixel_array_offset: 54,
                file_size: 71
            })
        );
    }

    #[test]
    fn test_decode_rows_do_not_fit() {
        // Declared data size too small for two 8-byte rows
        let mut bytes = two_by_two();
        bytes[DATA_SIZE_OFFSET..DATA_SIZE_OFFSET + 4].copy_from_slice(&10u32.to_le_bytes());
        bytes[FILE_SIZE_OFFSET..FILE_SIZE_OFFSET + 4].copy_from_slice(&64u32.to_le_bytes());
        assert!(matches!(
            decode(&bytes),
            Err(FormatError::PixelDataTooSmall { .. })
        ));
    }

    #[test]
    fn test_decode_offset_out_of_bounds() {
        let mut bytes = two_by_two();
        bytes[10..14].copy_from_slice(&500u32.to_le_bytes());
        assert_eq!(
            decode(&bytes),
            Err(FormatError::PixelArrayOffsetOutOfBounds {
                offset: 500,
                len: 70
            })
        );
    }

    #[test]
    fn test_decode_is_deterministic() {
        let bytes = two_by_two();
        assert_eq!(decode(&bytes).unwrap(), decode(&bytes).unwrap());
    }
}
