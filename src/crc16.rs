//! Bit-serial CCITT-16 generator.

use bitvec::order::Msb0;
use bitvec::view::BitView;

use crate::Error;

/// Generator polynomial `x^16 + x^12 + x^5 + 1`.
pub const POLYNOMIAL: u16 = 0x1021;

const INIT: u16 = 0xFFFF;
const MSB: u16 = 0x8000;

/// Computes the CCITT-16 over the first `bit_length` bits of `buffer`, MSB first.
///
/// The raw register is returned without a final complement.
///
/// # Errors
///
/// Returns an [`Error`] if `buffer` is empty or holds fewer than `bit_length` bits.
pub fn compute(buffer: &[u8], bit_length: usize) -> Result<u16, Error> {
    if buffer.is_empty() {
        return Err(Error::MissingInput);
    }

    let bits = buffer
        .view_bits::<Msb0>()
        .get(..bit_length)
        .ok_or(Error::BufferTooSmall {
            expected: bit_length,
            found: buffer.len() * 8,
        })?;

    Ok(bits.iter().by_vals().fold(INIT, |crc, bit| {
        let msb = crc & MSB != 0;
        let crc = crc << 1;

        if bit ^ msb {
            crc ^ POLYNOMIAL
        } else {
            crc
        }
    }))
}
