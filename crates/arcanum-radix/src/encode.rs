//! Canonical encoding into a positional base.

use dashu::integer::UBig;

use crate::decode::{RadixError, MAX_BASE};

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Encodes a non-negative integer as a digit string in the given base.
///
/// The output is canonical: uppercase letters for digit values above 9 and
/// no leading zeros (zero encodes as `"0"`). For any valid base,
/// `decode(&encode(&v, b)?, b)` returns `v` again.
///
/// # Errors
///
/// Returns [`RadixError::InvalidBase`] if `base` is outside `2..=36`.
pub fn encode(value: &UBig, base: u32) -> Result<String, RadixError> {
    if !(2..=MAX_BASE).contains(&base) {
        return Err(RadixError::InvalidBase(base));
    }
    if *value == UBig::ZERO {
        return Ok("0".to_string());
    }

    let radix = UBig::from(base);
    let mut rest = value.clone();
    let mut digits = Vec::new();
    while rest != UBig::ZERO {
        let d = u32::try_from(&rest % &radix).expect("remainder below base fits in u32");
        digits.push(ALPHABET[d as usize]);
        rest = rest / &radix;
    }
    digits.reverse();
    Ok(String::from_utf8(digits).expect("alphabet is ASCII"))
}
