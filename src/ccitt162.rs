//! CCITT-16, variant 2.
//!
//! MSB-first CCITT-16 (CRC-16/GSM), starting at `0x0000` and complemented at
//! the end. The footer carries the high-order byte first, mirroring variant 1.

use crate::frame_check::FrameCheck;
use crate::tables::CCITT16;

const INIT: u16 = 0x0000;

/// Frame check for CCITT-16 variant 2.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Ccitt162;

impl FrameCheck for Ccitt162 {
    const FOOTER_SIZE: usize = 2;
    type Value = u16;
    type Footer = [u8; 2];

    fn calculate(payload: &[u8]) -> u16 {
        !payload.iter().fold(INIT, |crc, &byte| {
            (crc << 8) ^ CCITT16[usize::from((crc >> 8) as u8 ^ byte)]
        })
    }

    fn footer(value: u16) -> [u8; 2] {
        value.to_be_bytes()
    }
}
