//! Compute, embed and verify DMR/P25 frame checksums from the command line.

use std::io::{self, ErrorKind};
use std::process::ExitCode;

use bitvec::order::Msb0;
use bitvec::view::BitView;
use clap::{Parser, Subcommand};
use dvm_edac::{
    crc16, crc8, crc9, five_bit, Algorithm, Ccitt161, Ccitt162, Crc32, Error, FrameCheck,
    HexSlice,
};
use log::{debug, error};

/// Largest frame accepted on the command line, footer included.
const MAX_FRAME_SIZE: usize = 512;

/// A stack-allocated buffer holding a frame decoded from hex.
type RawFrame = heapless::Vec<u8, MAX_FRAME_SIZE>;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute a checksum over the given bytes.
    Compute {
        #[arg(index = 1)]
        algorithm: Algorithm,
        /// Frame bytes as hex.
        #[arg(index = 2)]
        hex: String,
        /// Number of leading bits to cover. Defaults to all bits.
        #[arg(long)]
        bits: Option<usize>,
    },
    /// Append the checksum footer to the given payload.
    Embed {
        #[arg(index = 1)]
        algorithm: Algorithm,
        /// Payload bytes as hex.
        #[arg(index = 2)]
        hex: String,
    },
    /// Verify the footer of a frame, or compare against an expected checksum.
    Verify {
        #[arg(index = 1)]
        algorithm: Algorithm,
        /// Frame bytes as hex.
        #[arg(index = 2)]
        hex: String,
        /// Expected checksum for algorithms without a footer.
        #[arg(long, value_parser = parse_u32)]
        expected: Option<u32>,
        /// Number of leading bits to cover. Defaults to all bits.
        #[arg(long)]
        bits: Option<usize>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args.command) {
        Ok(code) => code,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> io::Result<ExitCode> {
    match command {
        Command::Compute {
            algorithm,
            hex,
            bits,
        } => {
            let frame = decode(&hex, 0)?;
            let value = compute(algorithm, &frame, bits)?;
            println!("{value:#X}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Embed { algorithm, hex } => {
            let footer_size = algorithm
                .footer_size()
                .ok_or_else(|| invalid_input(Error::NoFooter(algorithm)))?;
            let mut frame = decode(&hex, footer_size)?;
            let length = frame.len();
            algorithm
                .embed(&mut frame, length)
                .map_err(invalid_input)?;
            println!("{}", HexSlice::new(&frame));
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify {
            algorithm,
            hex,
            expected,
            bits,
        } => {
            let frame = decode(&hex, 0)?;
            let valid = if algorithm.footer_size().is_some() {
                algorithm
                    .verify(&frame, frame.len())
                    .map_err(invalid_input)?
            } else {
                let expected = expected.ok_or_else(|| {
                    invalid_input(format!("{algorithm} requires an expected checksum."))
                })?;
                compute(algorithm, &frame, bits)? == expected
            };

            if valid {
                println!("valid");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("invalid");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

/// Decodes hex into a frame, reserving `footer_size` zero bytes at its end.
fn decode(input: &str, footer_size: usize) -> io::Result<RawFrame> {
    let size = input.len() / 2;
    let mut frame = RawFrame::new();
    frame
        .resize_default(size + footer_size)
        .map_err(|()| invalid_input(format!("Frame exceeds {MAX_FRAME_SIZE} bytes.")))?;
    hex::decode_to_slice(input, &mut frame[..size]).map_err(invalid_input)?;
    debug!("Decoded frame: {:#04X}", HexSlice::new(&frame));
    Ok(frame)
}

fn compute(algorithm: Algorithm, frame: &[u8], bits: Option<usize>) -> io::Result<u32> {
    let bit_length = bits.unwrap_or(frame.len() * 8);

    let value = match algorithm {
        Algorithm::FiveBit => {
            let bits: Vec<bool> = frame
                .view_bits::<Msb0>()
                .iter()
                .by_vals()
                .take(bit_length)
                .collect();
            five_bit::compute(&bits).map(u32::from)
        }
        Algorithm::Crc8 => crc8::compute(frame, byte_length(bit_length)?).map(u32::from),
        Algorithm::Crc9 => crc9::compute(frame, bit_length).map(u32::from),
        Algorithm::Crc16 => crc16::compute(frame, bit_length).map(u32::from),
        Algorithm::Ccitt161 => payload(frame, byte_length(bit_length)?)
            .map(Ccitt161::calculate)
            .map(u32::from),
        Algorithm::Ccitt162 => payload(frame, byte_length(bit_length)?)
            .map(Ccitt162::calculate)
            .map(u32::from),
        Algorithm::Crc32 => payload(frame, byte_length(bit_length)?).map(Crc32::calculate),
    };

    value.map_err(invalid_input)
}

fn payload(frame: &[u8], length: usize) -> Result<&[u8], Error> {
    frame.get(..length).ok_or(Error::BufferTooSmall {
        expected: length,
        found: frame.len(),
    })
}

fn byte_length(bit_length: usize) -> io::Result<usize> {
    if bit_length % 8 == 0 {
        Ok(bit_length / 8)
    } else {
        Err(invalid_input(format!(
            "Bit length {bit_length} is not a whole number of bytes."
        )))
    }
}

fn parse_u32(value: &str) -> Result<u32, std::num::ParseIntError> {
    value.strip_prefix("0x").map_or_else(
        || value.parse(),
        |hex| u32::from_str_radix(hex, 16),
    )
}

fn invalid_input<E>(error: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(ErrorKind::InvalidInput, error)
}
