use core::fmt;

use crate::{Error, HexCodec, Result, format_decimal, validate_decimal};

/// Canonical binary32 and binary64 bit patterns of one decimal input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EncodedValue {
    /// The parsed input, rounded to the nearest double.
    pub value: f64,
    /// binary32 bit pattern, most significant byte first.
    pub binary32: [u8; 4],
    /// binary64 bit pattern, most significant byte first.
    pub binary64: [u8; 8],
    pub hex32: String,
    pub hex64: String,
}

impl fmt::Display for EncodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "input: {}", format_decimal(self.value))?;
        writeln!(f, "binary32: {}", self.hex32)?;
        write!(f, "binary64: {}", self.hex64)
    }
}

/// Encodes unsigned decimal text using the host byte order.
pub fn encode(text: &str) -> Result<EncodedValue> {
    encode_with(&HexCodec::NATIVE, text)
}

/// Encodes unsigned decimal text into binary32 and binary64 bit patterns,
/// rounding to nearest, ties to even.
///
/// The binary32 pattern is narrowed from the parsed double, so out of range
/// values saturate to infinity and tiny ones underflow to a subnormal or
/// zero.
pub fn encode_with(codec: &HexCodec, text: &str) -> Result<EncodedValue> {
    let value = parse_decimal(text).inspect_err(|err| {
        tracing::debug!(input = text, %err, "rejected decimal input");
    })?;

    let single = (value as f32).to_ne_bytes();
    let double = value.to_ne_bytes();
    let encoded = EncodedValue {
        value,
        binary32: codec.to_big_endian(single),
        binary64: codec.to_big_endian(double),
        hex32: codec.bytes_to_hex(&single),
        hex64: codec.bytes_to_hex(&double),
    };
    tracing::trace!(
        input = text,
        hex32 = %encoded.hex32,
        hex64 = %encoded.hex64,
        "encoded decimal"
    );
    Ok(encoded)
}

fn parse_decimal(text: &str) -> Result<f64> {
    validate_decimal(text)?;
    text.parse::<f64>()
        .map_err(|_| Error::InvalidDecimalSyntax(text.to_owned()))
}
