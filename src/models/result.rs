use std::fmt;

use super::frame::FRAMES_PER_ROW;

/// Outcome of decoding one barcode image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeResult {
    /// One decoded digit (0-9) per frame column, in column order
    Digits([u8; FRAMES_PER_ROW]),
    /// Columns for which no row holds a parity-valid frame, ascending, never empty
    UnreadableColumns(Vec<usize>),
}

impl DecodeResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Digits(_))
    }

    /// Decoded digits, if every column was readable
    pub fn digits(&self) -> Option<&[u8; FRAMES_PER_ROW]> {
        match self {
            Self::Digits(digits) => Some(digits),
            Self::UnreadableColumns(_) => None,
        }
    }
}

impl fmt::Display for DecodeResult {
    /// `1 2 3 ...` on success, otherwise `Unable to read frame(s): ...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, values): (&str, Vec<String>) = match self {
            Self::Digits(digits) => ("", digits.iter().map(u8::to_string).collect()),
            Self::UnreadableColumns(columns) if columns.len() == 1 => {
                ("Unable to read frame: ", vec![columns[0].to_string()])
            }
            Self::UnreadableColumns(columns) => (
                "Unable to read frames: ",
                columns.iter().map(usize::to_string).collect(),
            ),
        };
        write!(f, "{}{}", prefix, values.join(" "))
    }
}
