extern crate num_bigint;
extern crate proptest;
use crate::{Digit, DigitSequence};
use num_bigint::BigUint;
use proptest::prelude::*;

pub fn any_digit() -> impl Strategy<Value = Digit> {
    (0u8..10).prop_map(|x| Digit::new(x).unwrap())
}
pub fn digit_sequence(range: std::ops::Range<usize>) -> impl Strategy<Value = DigitSequence> {
    proptest::collection::vec(any_digit(), range).prop_map(DigitSequence::from_digits)
}
pub fn decimal_string(range: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    digit_sequence(range).prop_map(|seq| seq.to_decimal_string())
}
// Both operands share a length of 2^exponent for some exponent in range.
pub fn power_of_two_pair(
    exponents: std::ops::Range<u32>,
) -> impl Strategy<Value = (DigitSequence, DigitSequence)> {
    exponents.prop_flat_map(|exp| {
        let len = 1usize << exp;
        (digit_sequence(len..len + 1), digit_sequence(len..len + 1))
    })
}

pub fn to_biguint(seq: &DigitSequence) -> BigUint {
    if seq.is_empty() {
        return BigUint::from(0u32);
    }
    BigUint::parse_bytes(seq.to_decimal_string().as_bytes(), 10).unwrap()
}
