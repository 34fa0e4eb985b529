/// One 24-bit pixel, channels in the order they are stored on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    /// Create a pixel from its stored channel order (B, G, R)
    pub const fn new(blue: u8, green: u8, red: u8) -> Self {
        Self { blue, green, red }
    }

    /// First stored channel, the one the barcode scanner thresholds on
    pub fn first_channel(&self) -> u8 {
        self.blue
    }

    /// Black for scanning purposes: first channel is exactly zero
    pub fn is_black(&self) -> bool {
        self.first_channel() == 0
    }
}

/// Header fields the codec interprets, decoded from their fixed offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    pub file_size: u32,
    pub pixel_array_offset: u32,
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    pub data_size: u32,
    /// Bytes per stored row, including padding to a 4-byte boundary
    pub row_stride: u32,
}

/// Decoded 24-bit bitmap.
///
/// Row 0 is the first row stored in the file, which for bottom-up bitmaps
/// is the visual bottom. The header prefix is kept verbatim so that
/// [`encode`](crate::codec::bmp::encode) reproduces the file byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapImage {
    header: BitmapHeader,
    raw_header: Vec<u8>,
    pixels: Vec<Pixel>,
}

impl BitmapImage {
    /// Assemble an image; `pixels.len()` must equal `width * height`.
    pub(crate) fn from_parts(header: BitmapHeader, raw_header: Vec<u8>, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(
            pixels.len() as u64,
            header.width as u64 * header.height as u64
        );
        Self {
            header,
            raw_header,
            pixels,
        }
    }

    /// Get image width in pixels
    pub fn width(&self) -> usize {
        self.header.width as usize
    }

    /// Get image height in pixels
    pub fn height(&self) -> usize {
        self.header.height as usize
    }

    pub fn header(&self) -> &BitmapHeader {
        &self.header
    }

    /// Everything before the pixel array, exactly as read
    pub fn raw_header(&self) -> &[u8] {
        &self.raw_header
    }

    /// Pixel at (row, col), `None` outside the image
    pub fn pixel(&self, row: usize, col: usize) -> Option<Pixel> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.pixels[row * self.width() + col])
    }

    /// All pixels of one stored row
    pub fn row(&self, row: usize) -> &[Pixel] {
        let start = row * self.width();
        &self.pixels[start..start + self.width()]
    }

    /// Iterate over stored rows in file order
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // chunks() rejects a zero chunk size
        self.pixels.chunks(self.width().max(1))
    }

    /// Overwrite the pixel at (row, col). Out-of-range writes are ignored.
    pub fn set_pixel(&mut self, row: usize, col: usize, pixel: Pixel) {
        if row >= self.height() || col >= self.width() {
            return;
        }
        let width = self.width();
        self.pixels[row * width + col] = pixel;
    }

    /// Fully independent copy, own header blob and own pixel buffer
    pub fn copy(&self) -> Self {
        self.clone()
    }
}
