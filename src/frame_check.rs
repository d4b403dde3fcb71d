//! Footer based frame check sequences.

use log::trace;

use crate::utils::HexSlice;
use crate::Error;

#[cfg(test)]
pub(crate) mod testing;

/// A checksum carried in a fixed-width footer at the end of a frame.
///
/// The frame is the first `length` bytes of a buffer. Its last
/// [`FOOTER_SIZE`](Self::FOOTER_SIZE) bytes hold the checksum over the bytes before them.
pub trait FrameCheck {
    /// Size of the footer in bytes.
    const FOOTER_SIZE: usize;

    /// The checksum value type.
    type Value: Copy + Eq;

    /// The footer bytes in wire order.
    type Footer: AsRef<[u8]>;

    /// Calculates the checksum over the payload.
    fn calculate(payload: &[u8]) -> Self::Value;

    /// Lays out the checksum value as footer bytes.
    fn footer(value: Self::Value) -> Self::Footer;

    /// Verifies the footer of the frame held in `buffer[..length]`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if `buffer` is empty, shorter than `length`,
    /// or if `length` cannot hold the footer.
    fn verify(buffer: &[u8], length: usize) -> Result<bool, Error> {
        let (payload, received) = split(buffer, length, Self::FOOTER_SIZE)?;
        let calculated = Self::footer(Self::calculate(payload));

        if calculated.as_ref() == received {
            Ok(true)
        } else {
            trace!(
                "Checksum mismatch. Calculated {:#04X}, received {:#04X}.",
                HexSlice::new(calculated.as_ref()),
                HexSlice::new(received)
            );
            Ok(false)
        }
    }

    /// Writes the footer of the frame held in `buffer[..length]`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if `buffer` is empty, shorter than `length`,
    /// or if `length` cannot hold the footer.
    fn embed(buffer: &mut [u8], length: usize) -> Result<(), Error> {
        let (payload, footer) = split_mut(buffer, length, Self::FOOTER_SIZE)?;
        footer.copy_from_slice(Self::footer(Self::calculate(payload)).as_ref());
        Ok(())
    }
}

/// Returns the first `length` bytes of a non-empty buffer.
pub(crate) fn frame(buffer: &[u8], length: usize) -> Result<&[u8], Error> {
    if buffer.is_empty() {
        return Err(Error::MissingInput);
    }

    buffer.get(..length).ok_or(Error::BufferTooSmall {
        expected: length,
        found: buffer.len(),
    })
}

fn payload_size(length: usize, footer_size: usize) -> Result<usize, Error> {
    length
        .checked_sub(footer_size)
        .ok_or(Error::FooterOutOfRange {
            footer: footer_size,
            length,
        })
}

fn split(buffer: &[u8], length: usize, footer_size: usize) -> Result<(&[u8], &[u8]), Error> {
    let frame = frame(buffer, length)?;
    Ok(frame.split_at(payload_size(length, footer_size)?))
}

fn split_mut(
    buffer: &mut [u8],
    length: usize,
    footer_size: usize,
) -> Result<(&[u8], &mut [u8]), Error> {
    if buffer.is_empty() {
        return Err(Error::MissingInput);
    }

    let found = buffer.len();
    let frame = buffer.get_mut(..length).ok_or(Error::BufferTooSmall {
        expected: length,
        found,
    })?;
    let (payload, footer) = frame.split_at_mut(payload_size(length, footer_size)?);
    Ok((&*payload, footer))
}
