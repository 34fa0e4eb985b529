//! Barcode decoding
//!
//! This module turns a scanned frame grid into digits:
//! - Per-frame even-parity validation
//! - Digit extraction from valid frames
//! - Cross-row selection of a valid frame for every column

/// Column-wise decode across all scanned rows
pub mod barcode;
/// Frame parity check and digit value
pub mod parity;

pub use barcode::{BarcodeDecoder, resolve, validity_table};
pub use parity::{decode_digit, is_valid};
