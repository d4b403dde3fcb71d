//! Table-driven 8-bit CRC.

use crate::frame_check::frame;
use crate::tables::CRC8;
use crate::Error;

/// Computes the CRC-8 over the first `length` bytes of `buffer`.
///
/// There is no footer convention. The caller places or compares the value.
///
/// # Errors
///
/// Returns an [`Error`] if `buffer` is empty or shorter than `length`.
pub fn compute(buffer: &[u8], length: usize) -> Result<u8, Error> {
    Ok(frame(buffer, length)?
        .iter()
        .fold(0, |crc, &byte| CRC8[usize::from(crc ^ byte)]))
}
