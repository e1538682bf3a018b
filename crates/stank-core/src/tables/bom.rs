//! Known byte order mark sequences.
//!
//! See <https://en.wikipedia.org/wiki/Byte_order_mark>.

/// Longest known BOM, in bytes.
pub const MAX_BOM_LEN: usize = 5;

/// Shortest known BOM, in bytes.
pub const MIN_BOM_LEN: usize = 2;

pub(crate) const BOMS: &[&[u8]] = &[
    // UTF-32 BE
    &[0x00, 0x00, 0xFE, 0xFF],
    // UTF-7
    &[0x2B, 0x2F, 0x76, 0x2B],
    &[0x2B, 0x2F, 0x76, 0x2F],
    &[0x2B, 0x2F, 0x76, 0x38],
    &[0x2B, 0x2F, 0x76, 0x39],
    &[0x2B, 0x2F, 0x76, 0x38, 0x3D],
    // UTF-16 BE
    &[0xFE, 0xFF],
    // UTF-8
    &[0xEF, 0xBB, 0xBF],
    // UTF-16 LE
    &[0xFF, 0xFE],
    // UTF-32 LE
    &[0xFF, 0xFE, 0x00, 0x00],
    // SCSU
    &[0x0E, 0xFE, 0xFF],
    // GB-18030
    &[0x84, 0x31, 0x95, 0x33],
    // UTF-EBCDIC
    &[0xDD, 0x73, 0x66, 0x73],
    // UTF-1
    &[0xF7, 0x64, 0x4C],
    // BOCU-1
    &[0xFB, 0xEE, 0x28],
];

/// Reports whether `bytes` is exactly one of the known BOM sequences.
pub fn is_bom(bytes: &[u8]) -> bool {
    BOMS.iter().any(|bom| *bom == bytes)
}

/// Length of the shortest known BOM that prefixes `bytes`, trying
/// prefixes in ascending length order.
pub fn leading_bom_len(bytes: &[u8]) -> Option<usize> {
    (MIN_BOM_LEN..=MAX_BOM_LEN.min(bytes.len())).find(|&n| is_bom(&bytes[..n]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_lengths_are_within_bounds() {
        for bom in BOMS {
            assert!((MIN_BOM_LEN..=MAX_BOM_LEN).contains(&bom.len()), "{bom:x?}");
        }
    }

    #[test]
    fn recognizes_utf8_bom() {
        assert!(is_bom(&[0xEF, 0xBB, 0xBF]));
        assert_eq!(leading_bom_len(&[0xEF, 0xBB, 0xBF, b'#', b'!']), Some(3));
    }

    #[test]
    fn shorter_bom_wins_over_longer_one() {
        // FF FE is a prefix of the UTF-32 LE mark.
        assert_eq!(leading_bom_len(&[0xFF, 0xFE, 0x00, 0x00]), Some(2));
    }

    #[test]
    fn five_byte_bom_is_found_when_no_shorter_prefix_matches() {
        assert_eq!(leading_bom_len(&[0x2B, 0x2F, 0x76, 0x38, 0x3D]), Some(4));
        assert!(is_bom(&[0x2B, 0x2F, 0x76, 0x38, 0x3D]));
    }

    #[test]
    fn plain_ascii_has_no_bom() {
        assert_eq!(leading_bom_len(b"#!/bin/sh\n"), None);
        assert_eq!(leading_bom_len(b"#"), None);
        assert_eq!(leading_bom_len(b""), None);
    }
}
