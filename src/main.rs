use decimal_karatsuba::{karatsuba_mul, DigitSequence, KaratsubaError};

const PI_DIGITS: &str = "3141592653589793238462643383279502884197169399375105820974944592";
const E_DIGITS: &str = "2718281828459045235360287471352662497757247093699959574966967627";

fn main() -> Result<(), KaratsubaError> {
    let x = DigitSequence::from_decimal_str(PI_DIGITS)?;
    let y = DigitSequence::from_decimal_str(E_DIGITS)?;
    println!("{}", karatsuba_mul(&x, &y)?);
    Ok(())
}
