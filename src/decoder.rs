use core::fmt;

use crate::{
    BitFields, FormatSpec, HexCodec, Result, all_ones, all_zeros, bits_to_u64,
    format_decimal,
};

/// IEEE‑754 category of a decoded bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Classification {
    Zero,
    Subnormal,
    Normal,
    Infinity,
    NaN,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Zero => "zero",
            Self::Subnormal => "subnormal",
            Self::Normal => "normal",
            Self::Infinity => "infinity",
            Self::NaN => "nan",
        })
    }
}

/// A classified bit pattern with its exact and approximate values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedValue {
    pub format: &'static FormatSpec,
    /// The input hex, uppercased.
    pub hex: String,
    /// The full bit pattern, most significant bit first.
    pub bits: String,
    pub fields: BitFields,
    pub classification: Classification,
    /// Unsigned algebraic form, e.g. `(1.01)×2^-3`, or `Zero`, `∞`, `NaN`.
    pub exact_value_text: String,
    /// The value with the sign bit applied.
    pub decimal_value: f64,
}

impl DecodedValue {
    /// The exact form with its sign, e.g. `-(1.0)×2^0` or `+ Zero`. NaN is
    /// shown unsigned whatever its sign bit.
    pub fn description(&self) -> String {
        let sign = if self.fields.is_negative() { '-' } else { '+' };
        match self.classification {
            Classification::NaN => self.exact_value_text.clone(),
            Classification::Zero => format!("{sign} {}", self.exact_value_text),
            _ => format!("{sign}{}", self.exact_value_text),
        }
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "format: {}", self.format.name)?;
        writeln!(f, "sign: {}", self.fields.sign)?;
        writeln!(f, "exponent: {}", self.fields.exponent)?;
        writeln!(f, "mantissa: {}", self.fields.mantissa)?;
        writeln!(f, "class: {}", self.classification)?;
        writeln!(f, "value: {}", self.description())?;
        write!(f, "decimal: {}", format_decimal(self.decimal_value))
    }
}

/// Decodes an 8- or 16-digit hex bit pattern using the host byte order.
pub fn decode(hex: &str) -> Result<DecodedValue> {
    decode_with(&HexCodec::NATIVE, hex)
}

/// Decodes an 8- or 16-digit hex bit pattern (binary32 or binary64).
pub fn decode_with(codec: &HexCodec, hex: &str) -> Result<DecodedValue> {
    let bits = codec.hex_to_bits(hex).inspect_err(|err| {
        tracing::debug!(input = hex, %err, "rejected hex bit pattern");
    })?;
    let format = FormatSpec::from_hex_len(hex.len())?;
    let fields = BitFields::extract(&bits, format);
    let (classification, exact_value_text, magnitude) =
        classify(&fields, format);

    let decimal_value =
        if fields.is_negative() { -magnitude } else { magnitude };
    tracing::trace!(
        format = format.name,
        %classification,
        exact = %exact_value_text,
        "decoded bit pattern"
    );
    Ok(DecodedValue {
        format,
        hex: hex.to_ascii_uppercase(),
        bits,
        fields,
        classification,
        exact_value_text,
        decimal_value,
    })
}

// ────────────────────────────── Internals ───────────────────────────────────

fn classify(
    fields: &BitFields,
    format: &FormatSpec,
) -> (Classification, String, f64) {
    let BitFields { exponent, mantissa, .. } = fields;

    if all_zeros(exponent) {
        if all_zeros(mantissa) {
            return (Classification::Zero, "Zero".to_owned(), 0.0);
        }
        // Renormalize around the first set bit; the magnitude comes
        // straight from the whole mantissa.
        let first_one = mantissa.find('1').unwrap_or_default();
        let exponent = -format.bias - first_one as i32;
        let text = exact_value_text(&mantissa[first_one + 1..], exponent);
        let value =
            bits_to_u64(mantissa) as f64 * pow2(format.min_exponent());
        (Classification::Subnormal, text, value)
    } else if all_ones(exponent) {
        if all_zeros(mantissa) {
            (Classification::Infinity, "∞".to_owned(), f64::INFINITY)
        } else {
            (Classification::NaN, "NaN".to_owned(), f64::NAN)
        }
    } else {
        let exponent = bits_to_u64(exponent) as i32 - format.bias;
        let fraction = bits_to_u64(mantissa) as f64
            * pow2(-(format.mantissa_bits as i32));
        let text = exact_value_text(mantissa, exponent);
        (Classification::Normal, text, (1.0 + fraction) * pow2(exponent))
    }
}

/// `(1.f)×2^e` with trailing zeros dropped from `f` (an empty fraction
/// renders as `0`).
fn exact_value_text(fraction: &str, exponent: i32) -> String {
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    format!("(1.{fraction})×2^{exponent}")
}

/// Exact `2^exp` for `exp` in `-1074..=1023`, built from its bit pattern.
fn pow2(exp: i32) -> f64 {
    const BIAS: i32 = 1023;
    const MANTISSA_BITS: i32 = 52;
    if exp >= 1 - BIAS {
        f64::from_bits(((exp + BIAS) as u64) << MANTISSA_BITS)
    } else {
        f64::from_bits(1u64 << (exp + BIAS - 1 + MANTISSA_BITS))
    }
}
