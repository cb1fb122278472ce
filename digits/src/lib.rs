use num_bigint::BigInt;
use num_bigint::BigUint;
use num_bigint::ParseBigIntError;
use num_bigint::Sign;
use num_traits::Num;
use num_traits::Zero;
use std::fmt;
use tracing::trace;
pub const BASE: u32 = 256;
#[derive(Debug)]
pub enum Error {
    Empty,
    Sign,
    Parse(ParseBigIntError),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "empty integer"),
            Error::Sign => write!(f, "misplaced sign"),
            Error::Parse(e) => write!(f, "invalid integer: {}", e),
        }
    }
}
impl std::error::Error for Error {}
impl From<ParseBigIntError> for Error {
    fn from(e: ParseBigIntError) -> Error {
        Error::Parse(e)
    }
}
/// Base-256 digits of `n`, least significant first.
///
/// Zero has no digits.
pub fn to_digits(n: &BigUint) -> Vec<u8> {
    if n.is_zero() {
        return vec![];
    }
    n.to_bytes_le()
}
pub fn to_be_digits(n: &BigUint) -> Vec<u8> {
    let mut digits = to_digits(n);
    digits.reverse();
    digits
}
/// Inverse of [`to_digits`]. Trailing zero digits are accepted and add nothing.
pub fn from_digits(digits: &[u8]) -> BigUint {
    digits
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &digit| acc * BASE + u32::from(digit))
}
pub fn from_be_digits(digits: &[u8]) -> BigUint {
    digits
        .iter()
        .fold(BigUint::zero(), |acc, &digit| acc * BASE + u32::from(digit))
}
/// Same as `to_digits(n).len()`, without building the digits.
pub fn digit_count(n: &BigUint) -> usize {
    n.bits().div_ceil(8) as usize
}
/// Concatenates the decimal form of each digit with no separator and no padding.
///
/// Different digit sequences can render to the same string, `[1, 23]` and
/// `[12, 3]` both give `"123"`, so the result is not decodable on its own.
pub fn render(digits: &[u8]) -> String {
    let mut output = String::new();
    for digit in digits {
        output.push_str(&digit.to_string());
    }
    output
}
pub fn encode(n: &BigUint) -> String {
    let digits = to_be_digits(n);
    trace!(%n, ?digits);
    render(&digits)
}
/// Same as [`encode`] for positive `n`. Zero and negative values yield an empty string.
pub fn encode_signed(n: &BigInt) -> String {
    match n.to_biguint() {
        Some(magnitude) => encode(&magnitude),
        None => String::new(),
    }
}
pub fn from_str(s: &str) -> Result<BigInt, Error> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::Empty);
    }
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(x) => (Sign::Minus, x),
        None => (Sign::Plus, s.strip_prefix('+').unwrap_or(s)),
    };
    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(x) => (16, x),
        None => (10, unsigned),
    };
    if digits.starts_with(|c: char| c == '+' || c == '-') {
        return Err(Error::Sign);
    }
    let magnitude = BigUint::from_str_radix(digits, radix)?;
    Ok(BigInt::from_biguint(sign, magnitude))
}
