use crate::{Error, Result};

/// Static description of an IEEE‑754 binary interchange layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormatSpec {
    /// Short name used in rendered output.
    pub name: &'static str,
    pub total_bits: u32,
    pub exponent_bits: u32,
    pub mantissa_bits: u32,
    /// Subtracted from the stored exponent field: `2^(exponent_bits - 1) - 1`.
    pub bias: i32,
}

impl FormatSpec {
    /// 4-octet IEEE‑754 binary32 (aka single, f32)
    pub const BINARY32: FormatSpec = FormatSpec::new("binary32", 32, 8);
    /// 8-octet IEEE‑754 binary64 (aka double, f64)
    pub const BINARY64: FormatSpec = FormatSpec::new("binary64", 64, 11);

    const fn new(
        name: &'static str,
        total_bits: u32,
        exponent_bits: u32,
    ) -> Self {
        let mantissa_bits = total_bits - exponent_bits - 1;
        let bias = (1 << (exponent_bits - 1)) - 1;
        Self { name, total_bits, exponent_bits, mantissa_bits, bias }
    }

    /// Returns the format whose bit pattern is written with `len` hex digits.
    pub fn from_hex_len(len: usize) -> Result<&'static FormatSpec> {
        match len {
            8 => Ok(&Self::BINARY32),
            16 => Ok(&Self::BINARY64),
            _ => Err(Error::InvalidHexLength(len)),
        }
    }

    /// Number of hex digits in a full bit pattern.
    pub const fn hex_len(&self) -> usize { self.total_bits as usize / 4 }

    /// Number of octets in a full bit pattern.
    pub const fn byte_len(&self) -> usize { self.total_bits as usize / 8 }

    /// Exponent of the least significant mantissa bit of a subnormal:
    /// `1 - bias - mantissa_bits`.
    pub const fn min_exponent(&self) -> i32 {
        1 - self.bias - self.mantissa_bits as i32
    }
}
