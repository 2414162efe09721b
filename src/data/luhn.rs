//! Luhn (mod 10) checksum over a normalized card number.

use crate::domain::DigitString;

/// Checks the Luhn checksum of `digits`.
///
/// Walks the payload right to left starting next to the check digit. Positions
/// where `i % 2 == (len - 1) % 2` are added unchanged; the others are doubled,
/// with 9 subtracted when the doubled value exceeds 9.
///
/// The check digit is compared against `10 - (sum % 10)` without reducing that
/// value mod 10 again. A payload whose sum is a multiple of 10 therefore needs
/// a check digit of `10`, which no digit can be, and such numbers are reported
/// invalid even though standard Luhn accepts them with a check digit of `0`.
/// This matches the behaviour the service has always had; see DESIGN.md.
pub fn is_valid_luhn(digits: &DigitString) -> bool {
    let values: Vec<u32> = digits.digits().collect();
    let Some((&check_digit, payload)) = values.split_last() else {
        return false;
    };

    let parity = (values.len() - 1) % 2;
    let sum: u32 = payload
        .iter()
        .enumerate()
        .rev()
        .map(|(i, &digit)| {
            if i % 2 == parity {
                digit
            } else if digit > 4 {
                2 * digit - 9
            } else {
                2 * digit
            }
        })
        .sum();

    check_digit == 10 - (sum % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luhn(raw: &str) -> bool {
        is_valid_luhn(&DigitString::normalize(raw).unwrap())
    }

    #[test]
    fn test_known_valid_numbers() {
        assert!(luhn("4532015112830366"));
        assert!(luhn("4111111111111111"));
        assert!(luhn("5555555555554444"));
        assert!(luhn("378282246310005"));
        assert!(luhn("6011111111111117"));
        // Odd length flips which positions are doubled
        assert!(luhn("79927398713"));
    }

    #[test]
    fn test_known_invalid_numbers() {
        assert!(!luhn("4532015112830367"));
        assert!(!luhn("4111111111111112"));
        assert!(!luhn("79927398710"));
    }

    #[test]
    fn test_separators_do_not_change_result() {
        assert!(luhn("4532 0151 1283 0366"));
        assert!(luhn("4532-0151-1283-0366"));
    }

    #[test]
    fn test_sum_multiple_of_ten_is_rejected() {
        // Both pass standard Luhn with a check digit of 0
        assert!(!luhn("1800000000000000"));
        assert!(!luhn("0000000000000000"));
    }
}
