//! Lookup tables for the table-driven checksums.
//!
//! All tables are generated at compile time from their generator polynomials
//! and are never written afterwards.


/// CRC-8 lookup table, polynomial `x^8 + x^2 + x + 1` (0x07), MSB first.
pub const CRC8: [u8; 256] = msb_first_u8(0x07);

/// Number of entries in the partial CRC-9 table.
pub const CRC9_LEN: usize = 135;

/// Complemented CRC-9 bit weights, polynomial `x^9 + x^6 + x^4 + x^3 + 1` (0x259).
///
/// Entry `k` is the complemented remainder contributed by a single set bit
/// at position `k` of a 135 bit message.
pub const CRC9: [u16; CRC9_LEN] = bit_weights_u9(0x259);

/// CCITT-16 lookup table for the reflected polynomial 0x8408 (LSB first).
pub const CCITT16_REFLECTED: [u16; 256] = lsb_first_u16(0x8408);

/// CCITT-16 lookup table for the polynomial 0x1021 (MSB first).
pub const CCITT16: [u16; 256] = msb_first_u16(0x1021);

/// CRC-32 lookup table for the polynomial 0x04C11DB7 (MSB first).
pub const CRC32: [u32; 256] = msb_first_u32(0x04C1_1DB7);

const fn msb_first_u8(poly: u8) -> [u8; 256] {
    let mut table = [0; 256];
    let mut index = 0;

    while index < 256 {
        let mut crc = index as u8;
        let mut bit = 0;

        while bit < 8 {
            crc = if crc & 0x80 == 0 {
                crc << 1
            } else {
                (crc << 1) ^ poly
            };
            bit += 1;
        }

        table[index] = crc;
        index += 1;
    }

    table
}

const fn msb_first_u16(poly: u16) -> [u16; 256] {
    let mut table = [0; 256];
    let mut index = 0;

    while index < 256 {
        let mut crc = (index as u16) << 8;
        let mut bit = 0;

        while bit < 8 {
            crc = if crc & 0x8000 == 0 {
                crc << 1
            } else {
                (crc << 1) ^ poly
            };
            bit += 1;
        }

        table[index] = crc;
        index += 1;
    }

    table
}

const fn lsb_first_u16(poly: u16) -> [u16; 256] {
    let mut table = [0; 256];
    let mut index = 0;

    while index < 256 {
        let mut crc = index as u16;
        let mut bit = 0;

        while bit < 8 {
            crc = if crc & 0x0001 == 0 {
                crc >> 1
            } else {
                (crc >> 1) ^ poly
            };
            bit += 1;
        }

        table[index] = crc;
        index += 1;
    }

    table
}

const fn msb_first_u32(poly: u32) -> [u32; 256] {
    let mut table = [0; 256];
    let mut index = 0;

    while index < 256 {
        let mut crc = (index as u32) << 24;
        let mut bit = 0;

        while bit < 8 {
            crc = if crc & 0x8000_0000 == 0 {
                crc << 1
            } else {
                (crc << 1) ^ poly
            };
            bit += 1;
        }

        table[index] = crc;
        index += 1;
    }

    table
}

/// The last entry holds `x^9 mod poly`; every earlier entry is one power of `x` higher.
const fn bit_weights_u9(poly: u16) -> [u16; CRC9_LEN] {
    let mut table = [0; CRC9_LEN];
    let mut weight: u16 = 0x100;
    let mut index = CRC9_LEN;

    while index > 0 {
        index -= 1;
        weight <<= 1;

        if weight & 0x200 != 0 {
            weight ^= poly;
        }

        table[index] = weight ^ 0x1FF;
    }

    table
}
