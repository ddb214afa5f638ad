//! Bit-exact Codec for IEEE‑754 Single and Double Precision
//!
//! Decodes a hexadecimal bit pattern (8 digits for binary32, 16 digits for
//! binary64) into its sign/exponent/mantissa fields, classifies it, and
//! produces both an exact power-of-two form and an approximate decimal
//! value. Encodes decimal text into the canonical bit patterns of both
//! widths, rendered as big‑endian hex.
//!
//! ```
//! use ieee754_codec::{Classification, decode, encode};
//!
//! let decoded = decode("BF800000").unwrap();
//! assert_eq!(decoded.classification, Classification::Normal);
//! assert_eq!(decoded.exact_value_text, "(1.0)×2^0");
//! assert_eq!(decoded.decimal_value, -1.0);
//!
//! let encoded = encode("1").unwrap();
//! assert_eq!(encoded.hex32, "3F800000");
//! assert_eq!(encoded.hex64, "3FF0000000000000");
//! ```

mod format_spec;
pub use format_spec::*;
mod bit_fields;
pub use bit_fields::*;
mod hex_codec;
pub use hex_codec::*;
mod decimal;
pub use decimal::*;
mod decoder;
pub use decoder::*;
mod encoder;
pub use encoder::*;
mod error;
pub use error::*;
