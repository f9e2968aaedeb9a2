//! Property-based tests for radix decoding.

#[cfg(test)]
mod tests {
    use dashu::integer::IBig;
    use proptest::prelude::*;

    use crate::{decode, encode, RadixError};

    // Strategy for a supported base
    fn any_base() -> impl Strategy<Value = u32> {
        2u32..=36
    }

    // Non-empty digit string valid in `base`
    fn digit_string(base: u32) -> impl Strategy<Value = String> {
        let alphabet: Vec<char> = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ"
            .chars()
            .take(base as usize)
            .collect();
        proptest::collection::vec(proptest::sample::select(alphabet), 1..60)
            .prop_map(|chars| chars.into_iter().collect::<String>())
    }

    fn base_and_digits() -> impl Strategy<Value = (u32, String)> {
        any_base().prop_flat_map(|b| (Just(b), digit_string(b)))
    }

    proptest! {
        #[test]
        fn valid_digits_never_fail((base, digits) in base_and_digits()) {
            prop_assert!(decode(&digits, base).is_ok());
        }

        #[test]
        fn agrees_with_dashu_parser((base, digits) in base_and_digits()) {
            let ours = decode(&digits, base).unwrap();
            let oracle = IBig::from_str_radix(&digits.to_lowercase(), base).unwrap();
            prop_assert_eq!(IBig::from(ours), oracle);
        }

        #[test]
        fn encode_inverts_decode((base, digits) in base_and_digits()) {
            let value = decode(&digits, base).unwrap();
            let canonical = encode(&value, base).unwrap();

            // canonical form of the input: leading zeros stripped
            let trimmed = digits.trim_start_matches('0');
            let expected = if trimmed.is_empty() { "0" } else { trimmed };
            prop_assert_eq!(canonical, expected);
        }

        #[test]
        fn digit_at_or_above_base_fails((base, digits) in (2u32..36).prop_flat_map(|b| (Just(b), digit_string(b)))) {
            // the first digit NOT valid in `base`, appended to a valid prefix
            let bad = char::from_digit(base, 36).unwrap();
            let input = format!("{digits}{bad}");
            prop_assert_eq!(
                decode(&input, base),
                Err(RadixError::InvalidDigit { digit: bad, base })
            );
        }
    }
}
