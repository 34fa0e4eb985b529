use log::{debug, trace};
use rayon::prelude::*;

use super::parity;
use crate::config::DecodeConfig;
use crate::error::FormatError;
use crate::models::{BitmapImage, DecodeResult, FRAMES_PER_ROW, FrameGrid, ValidityTable};
use crate::scanner;

/// Parity flag of every frame in the grid
pub fn validity_table(grid: &FrameGrid, config: &DecodeConfig) -> ValidityTable {
    let rows = grid.rows();
    let mut flags = vec![false; rows * FRAMES_PER_ROW];
    let check_row = |(y, out): (usize, &mut [bool])| {
        for (flag, frame) in out.iter_mut().zip(grid.row(y)) {
            *flag = parity::is_valid(frame);
        }
    };
    if config.use_parallel(rows) {
        flags
            .par_chunks_mut(FRAMES_PER_ROW)
            .enumerate()
            .for_each(check_row);
    } else {
        flags.chunks_mut(FRAMES_PER_ROW).enumerate().for_each(check_row);
    }
    ValidityTable::from_flags(rows, flags)
}

/// Pick a digit per column from the first row whose frame passes parity.
///
/// Rows are repeated scans of the same symbol, so a column is only
/// unreadable when no row at all holds a valid frame for it.
pub fn resolve(grid: &FrameGrid, validity: &ValidityTable) -> DecodeResult {
    if log::log_enabled!(log::Level::Trace) {
        for y in 0..validity.rows() {
            let flags: String = (0..FRAMES_PER_ROW)
                .map(|c| if validity.is_valid(y, c) { '1' } else { '0' })
                .collect();
            trace!("row {:>5}: {}", y, flags);
        }
    }

    let chosen: Vec<Option<usize>> = (0..FRAMES_PER_ROW)
        .map(|c| validity.first_valid_row(c))
        .collect();

    let unreadable: Vec<usize> = chosen
        .iter()
        .enumerate()
        .filter_map(|(c, row)| row.is_none().then_some(c))
        .collect();
    if !unreadable.is_empty() {
        debug!("unreadable columns: {:?}", unreadable);
        return DecodeResult::UnreadableColumns(unreadable);
    }

    let mut digits = [0u8; FRAMES_PER_ROW];
    for (c, (digit, row)) in digits.iter_mut().zip(chosen).enumerate() {
        if let Some(frame) = row.and_then(|y| grid.get(y, c)) {
            *digit = parity::decode_digit(frame);
            debug!("column {:>2}: row {:?} -> {}", c, row, digit);
        }
    }
    DecodeResult::Digits(digits)
}

/// Multi-row barcode decoder
#[derive(Debug, Clone, Default)]
pub struct BarcodeDecoder {
    config: DecodeConfig,
}

impl BarcodeDecoder {
    /// Create a decoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Decode the barcode in `image`.
    ///
    /// Fails only when the image is too narrow to scan; a damaged barcode
    /// comes back as [`DecodeResult::UnreadableColumns`].
    pub fn decode(&self, image: &BitmapImage) -> Result<DecodeResult, FormatError> {
        let grid = scanner::extract_with_config(image, &self.config)?;
        let validity = validity_table(&grid, &self.config);
        Ok(resolve(&grid, &validity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BitFrame;
    use crate::tools::{BarcodeBitmap, encode_digit};

    const DIGITS: [u8; 12] = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 4, 2];

    fn frames(digits: [u8; 12]) -> [BitFrame; 12] {
        digits.map(encode_digit)
    }

    #[test]
    fn test_first_valid_row_wins() {
        let mut second = DIGITS;
        second[7] = 0;
        let img = BarcodeBitmap::new()
            .row_digits(DIGITS)
            .row_digits(second)
            .build()
            .unwrap();
        assert_eq!(
            BarcodeDecoder::new().decode(&img).unwrap(),
            DecodeResult::Digits(DIGITS)
        );
    }

    #[test]
    fn test_frames_are_accepted_individually() {
        // Neither row is valid as a whole, yet every column is readable
        let mut a = frames(DIGITS);
        let mut b = frames(DIGITS);
        a[2] = a[2].flipped(3);
        b[9] = b[9].flipped(6);
        let img = BarcodeBitmap::new().row(a).row(b).build().unwrap();
        assert_eq!(
            BarcodeDecoder::new().decode(&img).unwrap(),
            DecodeResult::Digits(DIGITS)
        );
    }

    #[test]
    fn test_column_bad_in_every_row() {
        let mut a = frames(DIGITS);
        let mut b = frames(DIGITS);
        a[4] = a[4].flipped(1);
        b[4] = b[4].flipped(5);
        b[11] = b[11].flipped(2);
        let img = BarcodeBitmap::new().row(a).row(b).build().unwrap();
        assert_eq!(
            BarcodeDecoder::new().decode(&img).unwrap(),
            DecodeResult::UnreadableColumns(vec![4])
        );
    }

    #[test]
    fn test_zero_rows() {
        let img = BarcodeBitmap::new().build().unwrap();
        assert_eq!(
            BarcodeDecoder::new().decode(&img).unwrap(),
            DecodeResult::UnreadableColumns((0..12).collect())
        );
    }

    #[test]
    fn test_parallel_config_agrees() {
        let mut builder = BarcodeBitmap::new();
        for i in 0..30 {
            let mut f = frames(DIGITS);
            f[i % 12] = f[i % 12].flipped(3);
            builder = builder.row(f);
        }
        let img = builder.build().unwrap();
        let seq = BarcodeDecoder::with_config(DecodeConfig::sequential())
            .decode(&img)
            .unwrap();
        let par = BarcodeDecoder::with_config(DecodeConfig::parallel())
            .decode(&img)
            .unwrap();
        assert_eq!(seq, par);
        assert_eq!(seq, DecodeResult::Digits(DIGITS));
    }
}
