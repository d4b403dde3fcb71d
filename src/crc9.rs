//! Bit-weighted 9-bit CRC.
//!
//! Used on confirmed data blocks, where bits `7..=15` carry the CRC itself
//! and therefore do not take part in the calculation.

use std::ops::RangeInclusive;

use bitvec::order::Msb0;
use bitvec::view::BitView;

use crate::tables::{CRC9, CRC9_LEN};
use crate::Error;

/// Bit positions holding the embedded CRC field.
pub const RESERVED: RangeInclusive<usize> = 7..=15;

/// Maximum number of bits covered by the lookup table.
pub const MAX_BITS: usize = CRC9_LEN + 9;

const MASK: u16 = 0x1FF;

/// Computes the 9-bit CRC over the first `bit_length` bits of `buffer`.
///
/// # Errors
///
/// Returns an [`Error`] if `buffer` is empty, holds fewer than `bit_length` bits,
/// or if `bit_length` exceeds [`MAX_BITS`].
pub fn compute(buffer: &[u8], bit_length: usize) -> Result<u16, Error> {
    if buffer.is_empty() {
        return Err(Error::MissingInput);
    }

    if bit_length > MAX_BITS {
        return Err(Error::BitLengthOutOfRange {
            max: MAX_BITS,
            found: bit_length,
        });
    }

    let bits = buffer
        .view_bits::<Msb0>()
        .get(..bit_length)
        .ok_or(Error::BufferTooSmall {
            expected: bit_length,
            found: buffer.len() * 8,
        })?;

    let crc = bits.iter_ones().fold(0, |crc, index| {
        if index < *RESERVED.start() {
            crc ^ CRC9[index]
        } else if index > *RESERVED.end() {
            crc ^ CRC9[index - 9]
        } else {
            crc
        }
    });

    Ok((crc & MASK) ^ MASK)
}

#[cfg(test)]
mod tests {
    use super::{compute, MAX_BITS, RESERVED};
    use crate::frame_check::testing::payload;
    use crate::tables::CRC9;
    use crate::Error;

    const BLOCK_BITS: usize = MAX_BITS;

    #[test]
    fn test_no_bits() {
        assert_eq!(compute(&[0xFF], 0), Ok(0x1FF));
    }

    #[test]
    fn test_single_bits() {
        let mut block = [0; 18];
        block[0] = 0x80;
        assert_eq!(compute(&block, BLOCK_BITS), Ok(CRC9[0] ^ 0x1FF));
        assert_eq!(compute(&block, BLOCK_BITS), Ok(0x018));

        let mut block = [0; 18];
        block[17] = 0x01;
        assert_eq!(compute(&block, BLOCK_BITS), Ok(CRC9[134] ^ 0x1FF));
    }

    #[test]
    fn test_reserved_window_is_skipped() {
        let bytes = payload(18);
        let reference = compute(&bytes, BLOCK_BITS);

        for index in RESERVED {
            let mut tampered = bytes.clone();
            tampered[index / 8] ^= 0x80 >> (index % 8);
            assert_eq!(compute(&tampered, BLOCK_BITS), reference, "bit {index}");
        }
    }

    #[test]
    fn test_single_bit_flip() {
        let bytes = payload(18);
        let reference = compute(&bytes, BLOCK_BITS);

        for index in (0..BLOCK_BITS).filter(|index| !RESERVED.contains(index)) {
            let mut tampered = bytes.clone();
            tampered[index / 8] ^= 0x80 >> (index % 8);
            assert_ne!(compute(&tampered, BLOCK_BITS), reference, "bit {index}");
        }
    }

    #[test]
    fn test_linearity() {
        let first = payload(18);
        let second: Vec<u8> = first.iter().rev().map(|byte| byte.rotate_left(3)).collect();
        let combined: Vec<u8> = first.iter().zip(&second).map(|(a, b)| a ^ b).collect();

        let first = compute(&first, BLOCK_BITS).expect("Block should suffice.");
        let second = compute(&second, BLOCK_BITS).expect("Block should suffice.");
        assert_eq!(compute(&combined, BLOCK_BITS), Ok(first ^ second ^ 0x1FF));
    }

    #[test]
    fn test_fits_nine_bits() {
        for size in 1..=18 {
            let bytes = payload(size);
            let crc = compute(&bytes, size * 8).expect("Block should suffice.");
            assert!(crc <= 0x1FF);
        }
    }

    #[test]
    fn test_errors() {
        assert_eq!(compute(&[], 0), Err(Error::MissingInput));
        assert_eq!(
            compute(&[0; 32], MAX_BITS + 1),
            Err(Error::BitLengthOutOfRange {
                max: MAX_BITS,
                found: MAX_BITS + 1
            })
        );
        assert_eq!(
            compute(&[0; 2], 17),
            Err(Error::BufferTooSmall {
                expected: 17,
                found: 16
            })
        );
    }
}
