pub mod bitstring;
pub mod error;

pub use bitstring::{BitString, MAX_LEN};
pub use error::{BitStringError, Result};
