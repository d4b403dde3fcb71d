use std::fmt::{Display, Formatter, LowerHex, UpperHex};

/// Formats frame bytes as hexadecimal.
///
/// The `UpperHex` and `LowerHex` forms render a list such as `[0x6E, 0x90]`
/// and honour the formatter's flags for every byte. `Display` renders the
/// bytes as one contiguous upper case string such as `6E90`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HexSlice<'a>(&'a [u8]);

impl<'a> HexSlice<'a> {
    /// Creates a new `HexSlice` from frame bytes.
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    fn fmt_list(
        &self,
        f: &mut Formatter<'_>,
        fmt_byte: fn(&u8, &mut Formatter<'_>) -> std::fmt::Result,
    ) -> std::fmt::Result {
        write!(f, "[")?;

        for (index, byte) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            fmt_byte(byte, f)?;
        }

        write!(f, "]")
    }
}

impl<'a> From<&'a [u8]> for HexSlice<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl UpperHex for HexSlice<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_list(f, <u8 as UpperHex>::fmt)
    }
}

impl LowerHex for HexSlice<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_list(f, <u8 as LowerHex>::fmt)
    }
}

impl Display for HexSlice<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02X}"))
    }
}
