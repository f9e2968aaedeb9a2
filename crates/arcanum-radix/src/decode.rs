//! Digit-string decoding in an arbitrary positional base.

use dashu::integer::UBig;
use thiserror::Error;

/// The largest supported base: the alphabet `0-9` plus `A-Z`.
pub const MAX_BASE: u32 = 36;

/// Errors raised while decoding or encoding a digit string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RadixError {
    /// The base is outside the supported range.
    #[error("base {0} is out of range (supported: 2..=36)")]
    InvalidBase(u32),

    /// The digit string was empty.
    #[error("empty digit string")]
    EmptyInput,

    /// A character is not a valid digit in the given base.
    #[error("invalid digit {digit:?} for base {base}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The base it was decoded against.
        base: u32,
    },
}

/// Decodes a digit string in the given base into a non-negative integer.
///
/// Each character maps to a digit value by its position in the alphabet
/// `0-9A-Z` (letters are case-insensitive); the result is the weighted sum
/// `Σ digit_i * base^(len-1-i)`, computed over `UBig` so values of any
/// magnitude decode exactly.
///
/// # Errors
///
/// Returns [`RadixError::InvalidBase`] if `base` is outside `2..=36`,
/// [`RadixError::EmptyInput`] for an empty string, and
/// [`RadixError::InvalidDigit`] for any character whose digit value is not
/// below `base`.
///
/// # Examples
///
/// ```
/// use arcanum_radix::decode;
/// use dashu::integer::UBig;
///
/// assert_eq!(decode("111", 2).unwrap(), UBig::from(7u8));
/// assert_eq!(decode("A", 16).unwrap(), UBig::from(10u8));
/// ```
pub fn decode(digits: &str, base: u32) -> Result<UBig, RadixError> {
    if !(2..=MAX_BASE).contains(&base) {
        return Err(RadixError::InvalidBase(base));
    }
    if digits.is_empty() {
        return Err(RadixError::EmptyInput);
    }

    let radix = UBig::from(base);
    let mut value = UBig::ZERO;
    for ch in digits.chars() {
        let d = ch
            .to_digit(MAX_BASE)
            .filter(|&d| d < base)
            .ok_or(RadixError::InvalidDigit { digit: ch, base })?;
        value = value * &radix + UBig::from(d);
    }
    Ok(value)
}
