use crate::checksum::{sum_all_digits, Validator};

/// Swedish personal identity number (personnummer), `YYMMDD-NNNC`. The check digit is the
/// Luhn digit of the nine digits before it.
pub struct SwedenPINChecksum;

const BODY_DIGITS: usize = 9;

impl Validator for SwedenPINChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        let digits: Vec<u32> = candidate.chars().filter_map(|c| c.to_digit(10)).collect();
        let Some(&check_digit) = digits.get(BODY_DIGITS) else {
            return false;
        };
        // weights alternate 2, 1, 2, ...
        let total: u32 = digits[..BODY_DIGITS]
            .iter()
            .enumerate()
            .map(|(index, digit)| sum_all_digits(digit * (2 - index as u32 % 2)))
            .sum();
        (10 - total % 10) % 10 == check_digit
    }
}
