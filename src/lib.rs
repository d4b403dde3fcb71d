//! Error detection for DMR and P25 digital voice frames.
//!
//! This library computes and verifies the checksums carried by frames of the
//! Digital Voice Modem network protocol:
//!
//! * [`five_bit`]: modular 5-bit checksum over 72 bits.
//! * [`crc8`]: table-driven CRC-8.
//! * [`crc9`]: bit-weighted CRC-9 that skips its own embedded field.
//! * [`crc16`]: bit-serial CCITT-16 generator.
//! * [`Ccitt161`], [`Ccitt162`]: CCITT-16 frame checks with mirrored footers.
//! * [`Crc32`]: CRC-32 frame check with a four byte footer.
//!
//! Bits are addressed MSB first within each byte. All lookup tables are
//! constants, so every function may be called concurrently without locking.
//!
//! ```
//! use dvm_edac::{Crc32, FrameCheck};
//!
//! let mut frame = *b"payload\0\0\0\0";
//! Crc32::embed(&mut frame, 11).expect("Frame should hold the footer.");
//! assert_eq!(Crc32::verify(&frame, 11), Ok(true));
//! ```

pub use algorithm::Algorithm;
pub use ccitt161::Ccitt161;
pub use ccitt162::Ccitt162;
pub use crc32::Crc32;
pub use error::Error;
pub use frame_check::FrameCheck;
pub use utils::HexSlice;

mod algorithm;
mod ccitt161;
mod ccitt162;
pub mod crc16;
mod crc32;
pub mod crc8;
pub mod crc9;
mod error;
pub mod five_bit;
mod frame_check;
pub mod tables;
mod utils;
