use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BitStringError, Result};

/// Longest bit string whose integer encoding fits a `u64`.
pub const MAX_LEN: usize = u64::BITS as usize;

/// Fixed-length binary configuration.
///
/// Index 0 is the most significant bit of the integer encoding. The length is
/// chosen at construction and never changes; every mutator validates its input
/// before touching the bits, so a rejected call leaves the value as it was.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitString {
    bits: Vec<u8>,
}

impl BitString {
    /// All-zero bit string of length `len`.
    pub fn new(len: usize) -> Result<Self> {
        if len > MAX_LEN {
            return Err(BitStringError::InvalidArgument(format!(
                "length {} exceeds the maximum of {}",
                len, MAX_LEN
            )));
        }
        Ok(Self { bits: vec![0; len] })
    }

    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        let mut out = Self::new(bits.len())?;
        out.set_bits(bits)?;
        Ok(out)
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn bit(&self, index: usize) -> Option<u8> {
        self.bits.get(index).copied()
    }

    /// Number of positions equal to 1.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// Number of positions equal to 0.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    pub fn flip(&mut self, index: usize) -> Result<()> {
        let len = self.len();
        let bit = self
            .bits
            .get_mut(index)
            .ok_or(BitStringError::IndexOutOfRange { index, len })?;
        *bit ^= 1;
        Ok(())
    }

    /// Big-endian integer value of the bits.
    pub fn to_integer(&self) -> u64 {
        self.bits
            .iter()
            .fold(0u64, |acc, &b| (acc << 1) | u64::from(b))
    }

    /// Replaces the bits wholesale. The sequence must have the same length and
    /// contain only 0 and 1.
    pub fn set_bits(&mut self, bits: &[u8]) -> Result<()> {
        if bits.len() != self.len() {
            return Err(BitStringError::InvalidArgument(format!(
                "expected {} bits, got {}",
                self.len(),
                bits.len()
            )));
        }
        if let Some(pos) = bits.iter().position(|&b| b > 1) {
            return Err(BitStringError::InvalidArgument(format!(
                "bit {} has value {}, expected 0 or 1",
                pos, bits[pos]
            )));
        }
        self.bits.copy_from_slice(bits);
        Ok(())
    }

    /// Decodes `value` big-endian, zero padded on the left.
    ///
    /// Values that need more than `len` bits are rejected.
    pub fn set_from_integer(&mut self, value: u64) -> Result<()> {
        let len = self.len();
        if value.checked_shr(len as u32).unwrap_or(0) != 0 {
            return Err(BitStringError::InvalidArgument(format!(
                "value {} does not fit in {} bits",
                value, len
            )));
        }
        for (i, bit) in self.bits.iter_mut().rev().enumerate() {
            *bit = ((value >> i) & 1) as u8;
        }
        Ok(())
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = BitStringError;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(BitStringError::InvalidArgument(format!(
                    "unexpected character {:?} in bit string",
                    other
                ))),
            })
            .collect::<Result<Vec<u8>>>()?;
        Self::from_bits(&bits)
    }
}

impl TryFrom<String> for BitString {
    type Error = BitStringError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<BitString> for String {
    fn from(b: BitString) -> Self {
        b.to_string()
    }
}
