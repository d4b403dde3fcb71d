use std::fmt::{Display, Formatter};

use crate::frame_check::FrameCheck;
use crate::{Ccitt161, Ccitt162, Crc32, Error};

/// Available checksum algorithms.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Algorithm {
    /// Five-bit modular checksum over 72 bits.
    FiveBit,
    /// Table-driven CRC-8.
    Crc8,
    /// Bit-weighted CRC-9 with the reserved window.
    Crc9,
    /// Bit-serial CCITT-16, not complemented.
    Crc16,
    /// CCITT-16 variant 1 with a two byte footer, low-order byte first.
    Ccitt161,
    /// CCITT-16 variant 2 with a two byte footer, high-order byte first.
    Ccitt162,
    /// CRC-32 with a four byte footer, most significant byte first.
    Crc32,
}

impl Algorithm {
    /// All algorithms in declaration order.
    pub const ALL: [Self; 7] = [
        Self::FiveBit,
        Self::Crc8,
        Self::Crc9,
        Self::Crc16,
        Self::Ccitt161,
        Self::Ccitt162,
        Self::Crc32,
    ];

    /// Returns the footer size in bytes if the algorithm carries its checksum in a footer.
    #[must_use]
    pub const fn footer_size(self) -> Option<usize> {
        match self {
            Self::Ccitt161 => Some(Ccitt161::FOOTER_SIZE),
            Self::Ccitt162 => Some(Ccitt162::FOOTER_SIZE),
            Self::Crc32 => Some(Crc32::FOOTER_SIZE),
            Self::FiveBit | Self::Crc8 | Self::Crc9 | Self::Crc16 => None,
        }
    }

    /// Verifies the footer of the frame held in `buffer[..length]`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the algorithm has no footer or the frame is out of range.
    pub fn verify(self, buffer: &[u8], length: usize) -> Result<bool, Error> {
        match self {
            Self::Ccitt161 => Ccitt161::verify(buffer, length),
            Self::Ccitt162 => Ccitt162::verify(buffer, length),
            Self::Crc32 => Crc32::verify(buffer, length),
            Self::FiveBit | Self::Crc8 | Self::Crc9 | Self::Crc16 => Err(Error::NoFooter(self)),
        }
    }

    /// Writes the footer of the frame held in `buffer[..length]`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the algorithm has no footer or the frame is out of range.
    pub fn embed(self, buffer: &mut [u8], length: usize) -> Result<(), Error> {
        match self {
            Self::Ccitt161 => Ccitt161::embed(buffer, length),
            Self::Ccitt162 => Ccitt162::embed(buffer, length),
            Self::Crc32 => Crc32::embed(buffer, length),
            Self::FiveBit | Self::Crc8 | Self::Crc9 | Self::Crc16 => Err(Error::NoFooter(self)),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FiveBit => write!(f, "5-bit"),
            Self::Crc8 => write!(f, "CRC-8"),
            Self::Crc9 => write!(f, "CRC-9"),
            Self::Crc16 => write!(f, "CRC-16"),
            Self::Ccitt161 => write!(f, "CCITT-16/1"),
            Self::Ccitt162 => write!(f, "CCITT-16/2"),
            Self::Crc32 => write!(f, "CRC-32"),
        }
    }
}

#[cfg(feature = "clap")]
impl clap::ValueEnum for Algorithm {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::FiveBit => clap::builder::PossibleValue::new("five-bit").alias("5-bit"),
            Self::Crc8 => clap::builder::PossibleValue::new("crc8").alias("CRC-8"),
            Self::Crc9 => clap::builder::PossibleValue::new("crc9").alias("CRC-9"),
            Self::Crc16 => clap::builder::PossibleValue::new("crc16").alias("CRC-16"),
            Self::Ccitt161 => clap::builder::PossibleValue::new("ccitt161").alias("CCITT-16/1"),
            Self::Ccitt162 => clap::builder::PossibleValue::new("ccitt162").alias("CCITT-16/2"),
            Self::Crc32 => clap::builder::PossibleValue::new("crc32").alias("CRC-32"),
        })
    }
}
