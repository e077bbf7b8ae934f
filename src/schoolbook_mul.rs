use crate::{Digit, DigitSequence};

/// Digit-by-digit long multiplication for operands of any length.
///
/// Independent of the single-digit primitives; the product is trimmed.
pub fn schoolbook_mul(l: &DigitSequence, r: &DigitSequence) -> DigitSequence {
    let mut acc = vec![0u32; l.len() + r.len() + 1];
    for (i, l_digit) in l.digits().iter().enumerate() {
        let mut carry = 0u32;
        for (j, r_digit) in r.digits().iter().enumerate() {
            let cell = &mut acc[i + j];
            let total = *cell + u32::from(l_digit.value()) * u32::from(r_digit.value()) + carry;
            *cell = total % 10;
            carry = total / 10;
        }
        let mut k = i + r.len();
        while carry != 0 {
            let total = acc[k] + carry;
            acc[k] = total % 10;
            carry = total / 10;
            k += 1;
        }
    }
    let digits = acc
        .into_iter()
        .map(|x| Digit::from_u8_unchecked(x as u8))
        .collect();
    DigitSequence::from_digits(digits).trimmed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_schoolbook_mul(a in digit_sequence(0..30), b in digit_sequence(0..30)) {
            let actual = schoolbook_mul(&a, &b);
            assert_eq!(to_biguint(&actual), to_biguint(&a) * to_biguint(&b));
        }
    }

    #[test]
    fn test_schoolbook_mul_hardcoded() {
        let a = DigitSequence::from_decimal_str("1234").unwrap();
        let b = DigitSequence::from_decimal_str("5678").unwrap();
        assert_eq!(schoolbook_mul(&a, &b).to_decimal_string(), "7006652");
        let zero = DigitSequence::from_decimal_str("000").unwrap();
        assert_eq!(schoolbook_mul(&zero, &b).to_decimal_string(), "0");
    }
}
