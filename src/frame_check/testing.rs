//! Shared assertions for [`FrameCheck`] implementations.

use super::FrameCheck;
use crate::Error;

/// Deterministic, non-repeating payload bytes.
pub fn payload(size: usize) -> Vec<u8> {
    (0..size).map(|index| (index * 37 + 11) as u8).collect()
}

/// Embeds and verifies frames with payloads of `0..max_payload` bytes.
pub fn assert_round_trip<T>(max_payload: usize)
where
    T: FrameCheck,
{
    for size in 0..max_payload {
        let mut buffer = payload(size);
        buffer.resize(size + T::FOOTER_SIZE, 0);
        let length = buffer.len();
        T::embed(&mut buffer, length).expect("Frame should hold the footer.");
        assert_eq!(T::verify(&buffer, length), Ok(true), "payload size {size}");
    }
}

/// Flips every payload bit of a valid frame and expects verification to fail.
pub fn assert_tamper_detected<T>(payload_size: usize)
where
    T: FrameCheck,
{
    let mut buffer = payload(payload_size);
    buffer.resize(payload_size + T::FOOTER_SIZE, 0);
    let length = buffer.len();
    T::embed(&mut buffer, length).expect("Frame should hold the footer.");

    for index in 0..payload_size * 8 {
        let mut tampered = buffer.clone();
        tampered[index / 8] ^= 0x80 >> (index % 8);
        assert_eq!(T::verify(&tampered, length), Ok(false), "bit {index}");
    }
}

/// Embeds into the first `length` bytes and leaves the rest untouched.
pub fn assert_embed_within_larger_buffer<T>()
where
    T: FrameCheck,
{
    let mut buffer = [0xEE; 32];
    let length = 16;
    T::embed(&mut buffer, length).expect("Frame should hold the footer.");
    assert!(buffer[length..].iter().all(|&byte| byte == 0xEE));
    assert_eq!(T::verify(&buffer, length), Ok(true));
}

/// Rejects buffers that are empty, too short or cannot hold a footer.
pub fn assert_range_errors<T>()
where
    T: FrameCheck,
{
    assert_eq!(T::verify(&[], 0), Err(Error::MissingInput));
    assert_eq!(T::embed(&mut [], 0), Err(Error::MissingInput));

    let mut buffer = vec![0; T::FOOTER_SIZE];
    let short = T::FOOTER_SIZE - 1;
    let footer_error = Err(Error::FooterOutOfRange {
        footer: T::FOOTER_SIZE,
        length: short,
    });
    assert_eq!(T::verify(&buffer, short), footer_error);
    assert_eq!(T::embed(&mut buffer, short), footer_error.map(|_| ()));

    let long = T::FOOTER_SIZE + 1;
    let size_error = Err(Error::BufferTooSmall {
        expected: long,
        found: T::FOOTER_SIZE,
    });
    assert_eq!(T::verify(&buffer, long), size_error);
    assert_eq!(T::embed(&mut buffer, long), size_error.map(|_| ()));
    assert!(buffer.iter().all(|&byte| byte == 0));
}
