use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Alphabet size mismatch: expected {expected} symbols, got {actual}")]
    AlphabetSizeMismatch { expected: usize, actual: usize },

    #[error("Duplicate symbol {0:?} in alphabet")]
    DuplicateSymbol(char),

    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Unknown sequence {sequence:?} at position {position}")]
    InvalidSequence { sequence: String, position: usize },

    #[error("Malformed length: {0}")]
    MalformedLength(String),

    #[error("Scalar value out of range: {0:#X}")]
    OutOfRange(u32),

    #[error("Unsupported radix: {0}")]
    UnsupportedRadix(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Decoded payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, GlyphError>;
