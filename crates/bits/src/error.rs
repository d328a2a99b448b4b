use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitStringError {
    /// Malformed length, bit value or integer encoding.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("index {index} out of range for bit string of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, BitStringError>;
