use std::fmt::{Display, Formatter};

use crate::Algorithm;

/// Errors raised before a checksum is calculated.
///
/// A checksum mismatch is not an error. Verification reports it as `Ok(false)`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The buffer or bit sequence is empty.
    MissingInput,
    /// The requested length exceeds the buffer.
    BufferTooSmall { expected: usize, found: usize },
    /// The frame length cannot hold the checksum footer.
    FooterOutOfRange { footer: usize, length: usize },
    /// The bit length exceeds what the lookup table covers.
    BitLengthOutOfRange { max: usize, found: usize },
    /// The algorithm does not carry its checksum in a footer.
    NoFooter(Algorithm),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput => write!(f, "Missing input."),
            Self::BufferTooSmall { expected, found } => write!(
                f,
                "Buffer too small. Expected at least {expected} but found {found}."
            ),
            Self::FooterOutOfRange { footer, length } => write!(
                f,
                "Frame of {length} bytes cannot hold a {footer} byte footer."
            ),
            Self::BitLengthOutOfRange { max, found } => {
                write!(f, "Bit length out of range: {found} > {max}")
            }
            Self::NoFooter(algorithm) => write!(f, "{algorithm} has no footer."),
        }
    }
}
