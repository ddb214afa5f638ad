use ieee754_codec::{
    BitFields, Endianness, Error, FormatSpec, HexCodec, format_decimal,
};

#[test]
fn native_endianness_matches_target() {
    let expected = if cfg!(target_endian = "little") {
        Endianness::Little
    } else {
        Endianness::Big
    };
    assert_eq!(Endianness::NATIVE, expected);
    assert_eq!(HexCodec::default(), HexCodec::NATIVE);
    assert_eq!(HexCodec::NATIVE.endianness(), expected);
}

#[test]
fn bytes_to_hex_reads_big_endian() {
    let little = HexCodec::new(Endianness::Little);
    let big = HexCodec::new(Endianness::Big);
    assert_eq!(little.bytes_to_hex(&[0x00, 0x00, 0x80, 0x3F]), "3F800000");
    assert_eq!(big.bytes_to_hex(&[0x3F, 0x80, 0x00, 0x00]), "3F800000");
    assert_eq!(little.bytes_to_hex(&1.0f32.to_le_bytes()), "3F800000");
    assert_eq!(big.bytes_to_hex(&1.0f64.to_be_bytes()), "3FF0000000000000");
    assert_eq!(big.bytes_to_hex(&[0x0A]), "0A");
}

#[test]
fn to_big_endian_reorders_only_little_endian() {
    let bytes = [1, 2, 3, 4];
    let little = HexCodec::new(Endianness::Little);
    let big = HexCodec::new(Endianness::Big);
    assert_eq!(little.to_big_endian(bytes), [4, 3, 2, 1]);
    assert_eq!(big.to_big_endian(bytes), [1, 2, 3, 4]);
}

#[test]
fn hex_to_bits_keeps_digit_order() {
    let codec = HexCodec::NATIVE;
    assert_eq!(
        codec.hex_to_bits("3F800000").unwrap(),
        "00111111100000000000000000000000"
    );
    assert_eq!(
        codec.hex_to_bits("0123456789abcdef").unwrap(),
        "0000000100100011010001010110011110001001101010111100110111101111"
    );
}

#[test]
fn hex_to_bits_checks_length_before_alphabet() {
    let codec = HexCodec::NATIVE;
    assert_eq!(codec.hex_to_bits("XYZ"), Err(Error::InvalidHexLength(3)));
    assert_eq!(
        codec.hex_to_bits("0000000x"),
        Err(Error::InvalidHexDigit { c: 'x', index: 7 })
    );
}

#[test]
fn format_registry() {
    assert_eq!(FormatSpec::from_hex_len(8), Ok(&FormatSpec::BINARY32));
    assert_eq!(FormatSpec::from_hex_len(16), Ok(&FormatSpec::BINARY64));
    assert_eq!(FormatSpec::from_hex_len(4), Err(Error::InvalidHexLength(4)));

    for spec in [FormatSpec::BINARY32, FormatSpec::BINARY64] {
        assert_eq!(
            spec.total_bits,
            1 + spec.exponent_bits + spec.mantissa_bits
        );
        assert_eq!(spec.hex_len() * 4, spec.total_bits as usize);
        assert_eq!(spec.byte_len() * 8, spec.total_bits as usize);
    }
    assert_eq!(FormatSpec::BINARY32.mantissa_bits, 23);
    assert_eq!(FormatSpec::BINARY32.bias, 127);
    assert_eq!(FormatSpec::BINARY32.min_exponent(), -149);
    assert_eq!(FormatSpec::BINARY64.mantissa_bits, 52);
    assert_eq!(FormatSpec::BINARY64.bias, 1023);
    assert_eq!(FormatSpec::BINARY64.min_exponent(), -1074);
}

#[test]
fn bit_fields_slice_by_position() {
    let fields = BitFields::extract(
        "11000000010010010000000000000000",
        &FormatSpec::BINARY32,
    );
    assert!(fields.is_negative());
    assert_eq!(fields.exponent, "10000000");
    assert_eq!(fields.mantissa, "10010010000000000000000");
}

#[test]
#[should_panic]
fn bit_fields_reject_short_input() {
    BitFields::extract("0101", &FormatSpec::BINARY32);
}

#[test]
fn decimal_rendering() {
    assert_eq!(format_decimal(1.0), "1");
    assert_eq!(format_decimal(-123.5), "-123.5");
    assert_eq!(format_decimal(0.0), "0");
    assert_eq!(format_decimal(-0.0), "0");
    assert_eq!(format_decimal(0.000001), "0.000001");
    assert_eq!(format_decimal(1.5e-7), "1.5e-7");
    assert_eq!(format_decimal(1e21), "1e+21");
    assert_eq!(format_decimal(-1.25e300), "-1.25e+300");
    assert_eq!(format_decimal(2f64.powi(-149)), "1.401298464324817e-45");
    assert_eq!(format_decimal(f64::NAN), "NaN");
    assert_eq!(format_decimal(f64::INFINITY), "Infinity");
    assert_eq!(format_decimal(f64::NEG_INFINITY), "-Infinity");
}
