use crate::low_level::add_digits;
use crate::{Digit, DigitSequence};
use std::ops::Add;

/// Grade-school addition. Missing high digits read as zero; the result is not
/// trimmed, so its length is the longer operand's length plus an optional
/// final carry digit.
pub fn add_digit_sequences(x: &DigitSequence, y: &DigitSequence) -> DigitSequence {
    let len = std::cmp::max(x.len(), y.len());
    let mut digits = Vec::with_capacity(len + 1);
    let mut carry = Digit::ZERO;
    for i in 0..len {
        let (low, next_carry) = add_digits(x.digit_or_zero(i), y.digit_or_zero(i), carry);
        digits.push(low);
        carry = next_carry.unwrap_or(Digit::ZERO);
    }
    if carry != Digit::ZERO {
        digits.push(carry);
    }
    DigitSequence::from_digits(digits)
}

impl Add for DigitSequence {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        add_digit_sequences(&self, &other)
    }
}

impl<'a> Add<&'a DigitSequence> for DigitSequence {
    type Output = Self;

    fn add(self, other: &'a Self) -> Self {
        add_digit_sequences(&self, other)
    }
}

impl<'a> Add<DigitSequence> for &'a DigitSequence {
    type Output = DigitSequence;

    fn add(self, other: DigitSequence) -> DigitSequence {
        add_digit_sequences(self, &other)
    }
}

impl<'a, 'b> Add<&'b DigitSequence> for &'a DigitSequence {
    type Output = DigitSequence;

    fn add(self, other: &'b DigitSequence) -> DigitSequence {
        add_digit_sequences(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;

    fn seq(s: &str) -> DigitSequence {
        DigitSequence::from_decimal_str(s).unwrap()
    }

    proptest! {
        #[test]
        fn test_addition_matches_biguint(a in digit_sequence(0..40), b in digit_sequence(0..40)) {
            let sum = add_digit_sequences(&a, &b);
            assert_eq!(to_biguint(&sum), to_biguint(&a) + to_biguint(&b));
        }
    }
    proptest! {
        #[test]
        fn test_addition_methods_match(a in digit_sequence(0..20), b in digit_sequence(0..20)) {
            let reference_sum = &a + &b;
            assert_eq!(reference_sum, &b + &a);
            assert_eq!(reference_sum, a.clone() + &b);
            assert_eq!(reference_sum, &a + b.clone());
            assert_eq!(reference_sum, a.clone() + b.clone());
        }
    }
    proptest! {
        #[test]
        fn test_sum_length(a in digit_sequence(0..20), b in digit_sequence(0..20)) {
            let longest = std::cmp::max(a.len(), b.len());
            let len = add_digit_sequences(&a, &b).len();
            assert!(len == longest || len == longest + 1);
        }
    }
    proptest! {
        #[test]
        fn test_additive_associativity(
            a in digit_sequence(0..20),
            b in digit_sequence(0..20),
            c in digit_sequence(0..20),
            ) {
            assert_eq!(&a + (&b + &c), (&a + &b) + &c);
        }
    }

    #[test]
    fn test_add_hardcoded() {
        assert_eq!(add_digit_sequences(&seq("1234"), &seq("5678")), seq("6912"));
        assert_eq!(add_digit_sequences(&seq("999"), &seq("1")), seq("1000"));
        assert_eq!(add_digit_sequences(&seq("5"), &seq("0000")), seq("0005"));
        assert_eq!(add_digit_sequences(&seq(""), &seq("")), seq(""));
    }
}
