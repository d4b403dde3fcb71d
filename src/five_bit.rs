//! Five-bit modular checksum.
//!
//! This is not a polynomial CRC. The first 72 bits are packed MSB-first into
//! nine bytes, which are summed and reduced modulo 31.

use bitvec::order::Msb0;
use bitvec::view::BitView;
use log::trace;

use crate::Error;

/// Number of bits covered by the checksum.
pub const BITS: usize = 72;

const MODULUS: u16 = 31;

/// Computes the five-bit checksum over the first 72 bits.
///
/// # Errors
///
/// Returns an [`Error`] if `bits` is empty or shorter than 72 bits.
pub fn compute(bits: &[bool]) -> Result<u8, Error> {
    if bits.is_empty() {
        return Err(Error::MissingInput);
    }

    let bits = bits.get(..BITS).ok_or(Error::BufferTooSmall {
        expected: BITS,
        found: bits.len(),
    })?;
    let total: u16 = bits.chunks_exact(8).map(|chunk| u16::from(pack(chunk))).sum();
    Ok((total % MODULUS) as u8)
}

/// Checks the five-bit checksum against an expected value.
///
/// # Errors
///
/// Returns an [`Error`] if `bits` is empty or shorter than 72 bits.
pub fn verify(bits: &[bool], expected: u8) -> Result<bool, Error> {
    let calculated = compute(bits)?;

    if calculated == expected {
        Ok(true)
    } else {
        trace!("Five-bit checksum mismatch. Calculated {calculated}, expected {expected}.");
        Ok(false)
    }
}

/// Packs up to eight bits into a byte, first bit in the MSB.
fn pack(bits: &[bool]) -> u8 {
    let mut byte = 0u8;
    let view = byte.view_bits_mut::<Msb0>();

    for (index, bit) in bits.iter().take(8).enumerate() {
        view.set(index, *bit);
    }

    byte
}

#[cfg(test)]
mod tests {
    use bitvec::order::Msb0;
    use bitvec::view::BitView;

    use super::{compute, pack, verify, BITS};
    use crate::Error;

    fn to_bits(bytes: &[u8]) -> Vec<bool> {
        bytes.view_bits::<Msb0>().iter().by_vals().collect()
    }

    #[test]
    fn test_pack() {
        assert_eq!(pack(&[true, false, false, false, false, false, false, false]), 0x80);
        assert_eq!(pack(&[false, false, false, false, false, false, false, true]), 0x01);
        assert_eq!(pack(&[true, false, true, false, false, true, false, true]), 0xA5);
    }

    #[test]
    fn test_compute() {
        let bits = to_bits(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09]);
        assert_eq!(compute(&bits), Ok(45 % 31));
        assert_eq!(compute(&to_bits(&[0xFF; 9])), Ok((9 * 255 % 31) as u8));
        assert_eq!(compute(&to_bits(&[0x00; 9])), Ok(0));
    }

    #[test]
    fn test_compute_ignores_trailing_bits() {
        let mut bytes = [0x5A; 12];
        let reference = compute(&to_bits(&bytes[..9]));
        bytes[9..].fill(0xFF);
        assert_eq!(compute(&to_bits(&bytes)), reference);
    }

    #[test]
    fn test_verify() {
        let bits = to_bits(&[0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70, 0x80, 0x90]);
        let checksum = compute(&bits).expect("Bits should suffice.");
        assert!(checksum < 31);
        assert_eq!(verify(&bits, checksum), Ok(true));
        assert_eq!(verify(&bits, (checksum + 1) % 31), Ok(false));
    }

    #[test]
    fn test_detects_single_byte_change() {
        let bytes = [0x21, 0x43, 0x65, 0x87, 0xA9, 0xCB, 0xED, 0x0F, 0x11];
        let checksum = compute(&to_bits(&bytes)).expect("Bits should suffice.");

        for index in 0..bytes.len() {
            for value in u8::MIN..=u8::MAX {
                let mut tampered = bytes;
                tampered[index] = value;
                let delta = (i16::from(value) - i16::from(bytes[index])).rem_euclid(31);
                assert_eq!(
                    verify(&to_bits(&tampered), checksum),
                    Ok(delta == 0),
                    "byte {index} set to {value:#04X}"
                );
            }
        }
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(compute(&[]), Err(Error::MissingInput));
        assert_eq!(verify(&[], 0), Err(Error::MissingInput));
    }

    #[test]
    fn test_too_few_bits() {
        assert_eq!(
            compute(&[true; BITS - 1]),
            Err(Error::BufferTooSmall {
                expected: BITS,
                found: BITS - 1
            })
        );
    }
}
