use crate::FormatSpec;

/// The sign, exponent and mantissa substrings of one bit pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BitFields {
    /// `'0'` or `'1'`.
    pub sign: char,
    pub exponent: String,
    pub mantissa: String,
}

impl BitFields {
    /// Slices a bit string of exactly `spec.total_bits` `'0'`/`'1'`
    /// characters: bit 0 is the sign, the next `exponent_bits` are the
    /// exponent, the rest is the mantissa.
    ///
    /// # Panics
    ///
    /// Panics if `bits` holds fewer than `spec.exponent_bits + 1` ASCII
    /// characters. Bit strings from
    /// [`HexCodec::hex_to_bits`](crate::HexCodec::hex_to_bits) always have
    /// the full width.
    pub fn extract(bits: &str, spec: &FormatSpec) -> Self {
        debug_assert_eq!(bits.len(), spec.total_bits as usize);
        debug_assert!(bits.bytes().all(|b| b == b'0' || b == b'1'));

        let (sign, rest) = bits.split_at(1);
        let (exponent, mantissa) = rest.split_at(spec.exponent_bits as usize);
        Self {
            sign: if sign == "1" { '1' } else { '0' },
            exponent: exponent.to_owned(),
            mantissa: mantissa.to_owned(),
        }
    }

    pub fn is_negative(&self) -> bool { self.sign == '1' }
}

pub(crate) fn all_zeros(bits: &str) -> bool {
    bits.bytes().all(|b| b == b'0')
}

pub(crate) fn all_ones(bits: &str) -> bool {
    bits.bytes().all(|b| b == b'1')
}

/// Unsigned value of a bit string of at most 64 bits.
pub(crate) fn bits_to_u64(bits: &str) -> u64 {
    bits.bytes().fold(0, |acc, b| (acc << 1) | u64::from(b == b'1'))
}
