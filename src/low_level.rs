use crate::Digit;

fn split_tens(x: u8) -> (Digit, Option<Digit>) {
    let tens = x / 10;
    let carry = if tens != 0 {
        Some(Digit::from_u8_unchecked(tens))
    } else {
        None
    };
    (Digit::from_u8_unchecked(x % 10), carry)
}

/// Adds three digits. The carry is only returned when the sum is at least 10.
pub fn add_digits(x: Digit, y: Digit, carry: Digit) -> (Digit, Option<Digit>) {
    // At most 27.
    split_tens(x.value() + y.value() + carry.value())
}

/// Multiplies two digits. The carry is only returned when the product is at least 10.
pub fn mul_digits(x: Digit, y: Digit) -> (Digit, Option<Digit>) {
    // At most 81.
    split_tens(x.value() * y.value())
}
