use crate::{Error, Result};

/// Checks `text` against the accepted decimal grammar:
///
/// ```text
/// decimal  = digits ( "." digits? exponent? )?
/// exponent = ( "e" | "E" ) ( "+" | "-" )? digits
/// ```
///
/// There is no sign, so negative values are rejected, and an exponent is
/// only accepted after a decimal point (`"1.e5"` but not `"1e5"`).
pub fn validate_decimal(text: &str) -> Result<()> {
    let invalid = || Error::InvalidDecimalSyntax(text.to_owned());
    let bytes = text.as_bytes();

    let mut pos = skip_digits(bytes, 0);
    if pos == 0 {
        return Err(invalid());
    }
    if pos == bytes.len() {
        return Ok(());
    }
    if bytes[pos] != b'.' {
        return Err(invalid());
    }
    pos = skip_digits(bytes, pos + 1);
    if pos == bytes.len() {
        return Ok(());
    }
    if !matches!(bytes[pos], b'e' | b'E') {
        return Err(invalid());
    }
    pos += 1;
    if matches!(bytes.get(pos), Some(b'+' | b'-')) {
        pos += 1;
    }
    let end = skip_digits(bytes, pos);
    if end == pos || end != bytes.len() {
        return Err(invalid());
    }
    Ok(())
}

fn skip_digits(bytes: &[u8], from: usize) -> usize {
    from + bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Renders a double the way a script number echo reads: `NaN`,
/// `Infinity`, `-Infinity`, `0` for either zero, plain notation for
/// magnitudes in `[1e-6, 1e21)`, and scientific notation with an explicit
/// exponent sign (`1e+21`, `1.5e-7`) otherwise.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return format!("{value}");
    }
    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((digits, exp)) if !exp.starts_with('-') => {
            format!("{digits}e+{exp}")
        }
        _ => scientific,
    }
}
