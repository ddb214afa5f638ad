use crate::{Error, FormatSpec, Result};

/// Byte order of a raw byte sequence produced by native float-to-bytes
/// conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endianness {
    /// Byte order of the host, resolved at compile time by checking where
    /// the low byte of `1u32` lands.
    pub const NATIVE: Endianness = if u32::from_ne_bytes([1, 0, 0, 0]) == 1 {
        Endianness::Little
    } else {
        Endianness::Big
    };
}

/// Converts between hex text, bit strings, and raw native bytes.
///
/// Hex output always reads most-significant byte first regardless of the
/// byte order the codec was configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexCodec {
    endianness: Endianness,
}

impl Default for HexCodec {
    fn default() -> Self { Self::NATIVE }
}

impl HexCodec {
    pub const NATIVE: HexCodec = HexCodec::new(Endianness::NATIVE);

    pub const fn new(endianness: Endianness) -> Self { Self { endianness } }

    pub fn endianness(&self) -> Endianness { self.endianness }

    /// Expands 8 or 16 hex digits into a bit string, four bits per digit,
    /// in input order.
    ///
    /// Length is counted in characters and checked before the alphabet.
    /// A rejected digit is reported with its character position.
    pub fn hex_to_bits(&self, text: &str) -> Result<String> {
        let len = text.chars().count();
        FormatSpec::from_hex_len(len)?;
        if let Some((index, c)) =
            text.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(Error::InvalidHexDigit { c, index });
        }
        let bytes = hex::decode(text).map_err(|err| match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                Error::InvalidHexDigit { c, index }
            }
            hex::FromHexError::OddLength
            | hex::FromHexError::InvalidStringLength => {
                Error::InvalidHexLength(len)
            }
        })?;

        Ok(bytes.iter().map(|byte| format!("{byte:08b}")).collect())
    }

    /// Reorders native bytes so the most significant byte comes first.
    pub fn to_big_endian<const N: usize>(&self, mut bytes: [u8; N]) -> [u8; N] {
        if self.endianness == Endianness::Little {
            bytes.reverse();
        }
        bytes
    }

    /// Renders native bytes as uppercase big‑endian hex, two digits per byte.
    pub fn bytes_to_hex(&self, bytes: &[u8]) -> String {
        match self.endianness {
            Endianness::Big => hex::encode_upper(bytes),
            Endianness::Little => {
                let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
                hex::encode_upper(reversed)
            }
        }
    }
}
