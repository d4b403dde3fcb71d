//! 32-bit CRC with a four byte footer.
//!
//! MSB-first CRC over polynomial 0x04C11DB7, starting at zero and complemented
//! at the end (CRC-32/CKSUM without the length suffix). The footer carries the
//! most significant byte first.

use crate::frame_check::FrameCheck;
use crate::tables::CRC32;

const INIT: u32 = 0x0000_0000;

/// Frame check for the 32-bit CRC.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Crc32;

impl FrameCheck for Crc32 {
    const FOOTER_SIZE: usize = 4;
    type Value = u32;
    type Footer = [u8; 4];

    fn calculate(payload: &[u8]) -> u32 {
        !payload.iter().fold(INIT, |crc, &byte| {
            CRC32[usize::from((crc >> 24) as u8 ^ byte)] ^ (crc << 8)
        })
    }

    fn footer(value: u32) -> [u8; 4] {
        value.to_be_bytes()
    }
}
