use crate::add::add_digit_sequences;
use crate::low_level::mul_digits;
use crate::{DigitSequence, KaratsubaError};
use log::{debug, trace};

fn check_operands(l: &DigitSequence, r: &DigitSequence) -> Result<usize, KaratsubaError> {
    if l.len() != r.len() {
        return Err(KaratsubaError::LengthMismatch {
            left: l.len(),
            right: r.len(),
        });
    }
    let len = l.len();
    if len == 0 {
        return Err(KaratsubaError::EmptyOperand);
    }
    if !len.is_power_of_two() {
        return Err(KaratsubaError::LengthNotPowerOfTwo(len));
    }
    Ok(len)
}

/// Multiplies two equal-length digit sequences with the four-product
/// Karatsuba split.
///
/// The length must be a power of two so that every split is even. The
/// product is not trimmed: zero high halves leave leading zero digits.
pub fn karatsuba_mul(
    l: &DigitSequence,
    r: &DigitSequence,
) -> Result<DigitSequence, KaratsubaError> {
    let len = check_operands(l, r)?;
    debug!("karatsuba_mul on {} digit operands", len);
    Ok(karatsuba_mul_unchecked(l, r))
}

// Precondition: l and r have the same power-of-two length.
fn karatsuba_mul_unchecked(l: &DigitSequence, r: &DigitSequence) -> DigitSequence {
    let len = l.len();
    if len == 1 {
        return mul_digits(l.digits()[0], r.digits()[0]).into();
    }
    let split_len = len / 2;
    trace!("splitting {} digits at {}", len, split_len);
    let (l0, l1) = l.split_at(split_len);
    let (r0, r1) = r.split_at(split_len);
    let prod_high = karatsuba_mul_unchecked(&l1, &r1);
    let prod_low = karatsuba_mul_unchecked(&l0, &r0);
    // No subtraction, so both cross products are computed.
    let cross_a = karatsuba_mul_unchecked(&l1, &r0);
    let cross_b = karatsuba_mul_unchecked(&l0, &r1);
    let cross = add_digit_sequences(&cross_a, &cross_b);
    let high_and_cross = add_digit_sequences(&prod_high.shifted(len), &cross.shifted(split_len));
    add_digit_sequences(&high_and_cross, &prod_low)
}

/// Multiplies operands of any non-zero lengths by padding both to the next
/// power of two, then drops the padding zeros from the product.
pub fn multiply(l: &DigitSequence, r: &DigitSequence) -> Result<DigitSequence, KaratsubaError> {
    if l.is_empty() || r.is_empty() {
        return Err(KaratsubaError::EmptyOperand);
    }
    let len = std::cmp::max(l.len(), r.len()).next_power_of_two();
    debug!(
        "multiply pads {} and {} digit operands to {}",
        l.len(),
        r.len(),
        len
    );
    let product = karatsuba_mul(&l.padded(len), &r.padded(len))?;
    Ok(product.trimmed())
}
