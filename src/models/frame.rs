/// Number of frames (digits) in one barcode symbol
pub const FRAMES_PER_ROW: usize = 12;
/// Number of bits in one frame
pub const BITS_PER_FRAME: usize = 8;
/// Width in pixels of the scanned band, one pixel per bit
pub const BAND_WIDTH: usize = FRAMES_PER_ROW * BITS_PER_FRAME;

/// Eight scanned bits, each 0 (white) or 1 (black), positions 0..=7.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BitFrame([u8; BITS_PER_FRAME]);

impl BitFrame {
    /// Create a frame; any non-zero input bit is stored as 1
    pub fn new(bits: [u8; BITS_PER_FRAME]) -> Self {
        Self(bits.map(|b| u8::from(b != 0)))
    }

    /// Build a frame from the first eight entries of a bit slice
    pub(crate) fn from_slice(bits: &[u8]) -> Self {
        let mut out = [0u8; BITS_PER_FRAME];
        out.copy_from_slice(&bits[..BITS_PER_FRAME]);
        Self::new(out)
    }

    /// Get bit at position `i` (0..=7)
    pub fn bit(&self, i: usize) -> u8 {
        self.0[i]
    }

    pub fn bits(&self) -> &[u8; BITS_PER_FRAME] {
        &self.0
    }

    /// Copy of this frame with bit `i` inverted
    pub fn flipped(&self, i: usize) -> Self {
        let mut bits = self.0;
        bits[i] ^= 1;
        Self(bits)
    }
}

/// Frames of every scanned row, `rows x FRAMES_PER_ROW`, row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameGrid {
    rows: usize,
    frames: Vec<BitFrame>,
}

impl FrameGrid {
    /// Grid of `rows` rows, every frame zeroed
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            frames: vec![BitFrame::default(); rows * FRAMES_PER_ROW],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Frame at (row, column); `None` outside the grid
    pub fn get(&self, row: usize, column: usize) -> Option<&BitFrame> {
        if row >= self.rows || column >= FRAMES_PER_ROW {
            return None;
        }
        self.frames.get(row * FRAMES_PER_ROW + column)
    }

    /// The twelve frames of one row
    pub fn row(&self, row: usize) -> &[BitFrame] {
        let start = row * FRAMES_PER_ROW;
        &self.frames[start..start + FRAMES_PER_ROW]
    }

    /// Per-row mutable slices, used to fill rows independently
    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, BitFrame> {
        self.frames.chunks_mut(FRAMES_PER_ROW)
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [BitFrame] {
        &mut self.frames
    }
}

/// Parity-valid flag per (row, column), same shape as [`FrameGrid`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidityTable {
    rows: usize,
    valid: Vec<bool>,
}

impl ValidityTable {
    pub(crate) fn from_flags(rows: usize, valid: Vec<bool>) -> Self {
        debug_assert_eq!(valid.len(), rows * FRAMES_PER_ROW);
        Self { rows, valid }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Whether the frame at (row, column) passed parity; false outside the table
    pub fn is_valid(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < FRAMES_PER_ROW && self.valid[row * FRAMES_PER_ROW + column]
    }

    /// First row, in ascending order, holding a valid frame for `column`
    pub fn first_valid_row(&self, column: usize) -> Option<usize> {
        (0..self.rows).find(|&row| self.is_valid(row, column))
    }
}
