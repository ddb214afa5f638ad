#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid hex length: expected 8 or 16 digits, got {0}")]
    InvalidHexLength(usize),

    #[error("invalid hex digit {c:?} at position {index}")]
    InvalidHexDigit { c: char, index: usize },

    #[error("invalid decimal syntax: {0:?}")]
    InvalidDecimalSyntax(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}
