/// Fixed-offset header fields of the Windows bitmap variant
use crate::error::FormatError;
use crate::models::BitmapHeader;

/// Size of the file header plus BITMAPINFOHEADER
pub const HEADER_SIZE: usize = 0x36;
pub const MAGIC: [u8; 2] = *b"BM";
pub const SUPPORTED_BITS_PER_PIXEL: u16 = 24;

pub const MAGIC_OFFSET: usize = 0x00;
pub const FILE_SIZE_OFFSET: usize = 0x02;
pub const PIXEL_ARRAY_OFFSET: usize = 0x0A;
pub const WIDTH_OFFSET: usize = 0x12;
pub const HEIGHT_OFFSET: usize = 0x16;
pub const BITS_PER_PIXEL_OFFSET: usize = 0x1C;
pub const DATA_SIZE_OFFSET: usize = 0x22;

/// Bytes per stored row: `bits_per_pixel * width` rounded up to whole 32-bit words
pub fn row_stride(bits_per_pixel: u16, width: u32) -> u64 {
    (bits_per_pixel as u64 * width as u64).div_ceil(32) * 4
}

fn read_u16_le(bytes: &[u8], offset: usize) -> Result<u16, FormatError> {
    let field = bytes
        .get(offset..offset + 2)
        .ok_or(FormatError::TruncatedHeader {
            required: offset + 2,
            actual: bytes.len(),
        })?;
    Ok(u16::from_le_bytes([field[0], field[1]]))
}

fn read_u32_le(bytes: &[u8], offset: usize) -> Result<u32, FormatError> {
    let field = bytes
        .get(offset..offset + 4)
        .ok_or(FormatError::TruncatedHeader {
            required: offset + 4,
            actual: bytes.len(),
        })?;
    Ok(u32::from_le_bytes([field[0], field[1], field[2], field[3]]))
}

/// Parse and validate the standard header at the start of `bytes`.
///
/// Checks length, magic and bit depth; the size fields are cross-checked by
/// the codec once the pixel data has been read.
pub fn parse(bytes: &[u8]) -> Result<BitmapHeader, FormatError> {
    if bytes.len() < HEADER_SIZE {
        return Err(FormatError::TruncatedHeader {
            required: HEADER_SIZE,
            actual: bytes.len(),
        });
    }

    let magic = [bytes[MAGIC_OFFSET], bytes[MAGIC_OFFSET + 1]];
    if magic != MAGIC {
        return Err(FormatError::BadMagic { found: magic });
    }

    let bits_per_pixel = read_u16_le(bytes, BITS_PER_PIXEL_OFFSET)?;
    if bits_per_pixel != SUPPORTED_BITS_PER_PIXEL {
        return Err(FormatError::UnsupportedBitDepth { bits_per_pixel });
    }

    let width = read_u32_le(bytes, WIDTH_OFFSET)?;
    let data_size = read_u32_le(bytes, DATA_SIZE_OFFSET)?;
    let height = read_u32_le(bytes, HEIGHT_OFFSET)?;

    // A stride wider than u32 can never fit in the 32-bit data size field.
    let stride = row_stride(bits_per_pixel, width);
    let row_stride = u32::try_from(stride).map_err(|_| FormatError::PixelDataTooSmall {
        height,
        row_stride: u32::MAX,
        data_size,
    })?;

    Ok(BitmapHeader {
        file_size: read_u32_le(bytes, FILE_SIZE_OFFSET)?,
        pixel_array_offset: read_u32_le(bytes, PIXEL_ARRAY_OFFSET)?,
        width,
        height,
        bits_per_pixel,
        data_size,
        row_stride,
    })
}
