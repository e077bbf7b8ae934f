#[cfg(test)]
extern crate proptest;

use std::fmt;
use std::str::FromStr;

pub mod add;
pub mod karatsuba;
pub mod low_level;
pub mod schoolbook_mul;
#[cfg(test)]
pub mod test_utils;

pub use add::add_digit_sequences;
pub use karatsuba::{karatsuba_mul, multiply};
pub use low_level::{add_digits, mul_digits};
pub use schoolbook_mul::schoolbook_mul;

/// A single decimal digit, always in `0..=9`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Default)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    pub fn new(value: u8) -> Result<Self, KaratsubaError> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(KaratsubaError::DigitOutOfRange(value))
        }
    }
    // Callers guarantee value <= 9.
    pub(crate) fn from_u8_unchecked(value: u8) -> Self {
        debug_assert!(value <= 9);
        Digit(value)
    }
    pub fn value(self) -> u8 {
        self.0
    }
    fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_digit() {
            Some(Digit(c as u8 - b'0'))
        } else {
            None
        }
    }
    fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative integer as decimal digits, least-significant first.
///
/// High-index zero digits are allowed and never change the value, so two
/// sequences that differ only by padding compare unequal but have the same
/// [`DigitSequence::trimmed`] form.
#[derive(PartialEq, Eq, Clone, Default)]
pub struct DigitSequence {
    digits: Vec<Digit>,
}

impl fmt::Debug for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitSequence")
            .field("digits", &self.to_decimal_string())
            .field("len", &self.digits.len())
            .finish()
    }
}

impl DigitSequence {
    pub fn from_digits(digits: Vec<Digit>) -> Self {
        DigitSequence { digits }
    }

    /// Parses a most-significant-first decimal string. Leading zeros are kept.
    pub fn from_decimal_str(s: &str) -> Result<Self, KaratsubaError> {
        let mut digits = Vec::with_capacity(s.len());
        for (position, c) in s.char_indices().rev() {
            match Digit::from_char(c) {
                Some(digit) => digits.push(digit),
                None => return Err(KaratsubaError::InvalidDigit { position, found: c }),
            }
        }
        Ok(DigitSequence { digits })
    }

    pub fn to_decimal_string(&self) -> String {
        self.digits.iter().rev().map(|d| d.to_char()).collect()
    }

    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }
    pub fn len(&self) -> usize {
        self.digits.len()
    }
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
    /// The digit at `position`, reading missing high digits as zero.
    pub fn digit_or_zero(&self, position: usize) -> Digit {
        self.digits.get(position).copied().unwrap_or(Digit::ZERO)
    }

    /// Multiplies by `10^places` by prepending zero digits.
    pub fn shifted(&self, places: usize) -> Self {
        let mut digits = vec![Digit::ZERO; places];
        digits.extend_from_slice(&self.digits);
        DigitSequence { digits }
    }

    /// Extends with high zero digits up to `len`. Never shortens.
    pub fn padded(&self, len: usize) -> Self {
        let mut digits = self.digits.clone();
        if digits.len() < len {
            digits.resize(len, Digit::ZERO);
        }
        DigitSequence { digits }
    }

    /// Drops high zero digits, keeping at least one digit for non-empty input.
    pub fn trimmed(&self) -> Self {
        let mut out = self.clone();
        out.trim_in_place();
        out
    }
    fn trim_in_place(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&Digit::ZERO) {
            self.digits.pop();
        }
    }

    pub(crate) fn split_at(&self, mid: usize) -> (Self, Self) {
        let (low, high) = self.digits.split_at(mid);
        (
            DigitSequence::from_digits(low.to_vec()),
            DigitSequence::from_digits(high.to_vec()),
        )
    }
}

impl From<(Digit, Option<Digit>)> for DigitSequence {
    fn from((low, carry): (Digit, Option<Digit>)) -> Self {
        let mut digits = vec![low];
        digits.extend(carry);
        DigitSequence { digits }
    }
}

impl FromStr for DigitSequence {
    type Err = KaratsubaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DigitSequence::from_decimal_str(s)
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

/// Precondition violations reported by the public API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KaratsubaError {
    InvalidDigit { position: usize, found: char },
    DigitOutOfRange(u8),
    LengthMismatch { left: usize, right: usize },
    EmptyOperand,
    LengthNotPowerOfTwo(usize),
}

impl fmt::Display for KaratsubaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KaratsubaError::InvalidDigit { position, found } => {
                write!(f, "invalid decimal digit {:?} at byte {}", found, position)
            }
            KaratsubaError::DigitOutOfRange(value) => {
                write!(f, "digit value {} is out of range 0..=9", value)
            }
            KaratsubaError::LengthMismatch { left, right } => write!(
                f,
                "operand lengths differ: {} digits vs {} digits",
                left, right
            ),
            KaratsubaError::EmptyOperand => write!(f, "operand has no digits"),
            KaratsubaError::LengthNotPowerOfTwo(len) => {
                write!(f, "operand length {} is not a power of two", len)
            }
        }
    }
}

impl std::error::Error for KaratsubaError {}
