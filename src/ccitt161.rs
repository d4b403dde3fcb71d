//! CCITT-16, variant 1.
//!
//! Reflected CCITT-16 (CRC-16/IBM-SDLC), starting at `0xFFFF` and complemented
//! at the end. The footer carries the low-order byte first.

use crate::frame_check::FrameCheck;
use crate::tables::CCITT16_REFLECTED;

const INIT: u16 = 0xFFFF;

/// Frame check for CCITT-16 variant 1.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Ccitt161;

impl FrameCheck for Ccitt161 {
    const FOOTER_SIZE: usize = 2;
    type Value = u16;
    type Footer = [u8; 2];

    fn calculate(payload: &[u8]) -> u16 {
        !payload.iter().fold(INIT, |crc, &byte| {
            (crc >> 8) ^ CCITT16_REFLECTED[usize::from(crc as u8 ^ byte)]
        })
    }

    fn footer(value: u16) -> [u8; 2] {
        value.to_le_bytes()
    }
}
