/// Frame parity check and digit value
use crate::models::BitFrame;

/// Even parity over both two-bit value groups.
///
/// `(b1 + b2) % 2 == b3` and `(b4 + b5) % 2 == b6`; bits 0 and 7 are not checked.
pub fn is_valid(frame: &BitFrame) -> bool {
    let b = frame.bits();
    (b[1] + b[2]) % 2 == b[3] && (b[4] + b[5]) % 2 == b[6]
}

/// Digit carried by a frame: `(8*b1 + 4*b2 + 2*b4 + b5) % 10`.
///
/// Defined for every frame, but only meaningful once [`is_valid`] holds.
pub fn decode_digit(frame: &BitFrame) -> u8 {
    let b = frame.bits();
    (8 * b[1] + 4 * b[2] + 2 * b[4] + b[5]) % 10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_frames() -> impl Iterator<Item = BitFrame> {
        (0u16..256).map(|v| BitFrame::new(std::array::from_fn(|i| ((v >> i) & 1) as u8)))
    }

    #[test]
    fn test_parity_rule_over_all_frames() {
        for f in all_frames() {
            let b = f.bits();
            let expected = (b[1] + b[2]) % 2 == b[3] && (b[4] + b[5]) % 2 == b[6];
            assert_eq!(is_valid(&f), expected, "frame {:?}", b);
        }
    }

    #[test]
    fn test_guard_bits_ignored() {
        for f in all_frames() {
            assert_eq!(is_valid(&f), is_valid(&f.flipped(0)));
            assert_eq!(is_valid(&f), is_valid(&f.flipped(7)));
        }
    }

    #[test]
    fn test_single_flips_break_parity() {
        let f = BitFrame::new([0, 1, 0, 1, 1, 1, 0, 1]);
        assert!(is_valid(&f));
        for i in 1..=6 {
            assert!(!is_valid(&f.flipped(i)), "flip of bit {}", i);
        }
    }

    #[test]
    fn test_decode_digit_values() {
        // b1 b2 | b4 b5
        assert_eq!(decode_digit(&BitFrame::new([0, 0, 0, 0, 0, 0, 0, 0])), 0);
        assert_eq!(decode_digit(&BitFrame::new([0, 0, 0, 0, 0, 1, 1, 0])), 1);
        assert_eq!(decode_digit(&BitFrame::new([0, 0, 1, 1, 1, 1, 0, 0])), 7);
        assert_eq!(decode_digit(&BitFrame::new([0, 1, 0, 1, 0, 1, 1, 0])), 9);
        // 12 and 15 wrap modulo 10
        assert_eq!(decode_digit(&BitFrame::new([0, 1, 1, 0, 0, 0, 0, 0])), 2);
        assert_eq!(decode_digit(&BitFrame::new([0, 1, 1, 0, 1, 1, 0, 0])), 5);
    }

    #[test]
    fn test_decode_digit_on_invalid_frame_is_defined() {
        let f = BitFrame::new([1, 1, 1, 1, 1, 1, 1, 1]);
        assert!(!is_valid(&f));
        assert_eq!(decode_digit(&f), 5);
    }
}
