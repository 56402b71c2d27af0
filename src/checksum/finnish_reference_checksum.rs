use crate::checksum::Validator;

/// Finnish domestic payment reference ("viitenumero"), weights 7, 3, 1 from the right.
pub struct FinnishReferenceChecksum;

const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Check digit for the reference body. `None` if the body contains a non-digit.
pub fn fi_reference_check_digit(body: &str) -> Option<u32> {
    // only the last digit of the sum matters, keeping it below 10 lets any body length work
    let mut weighted_sum = 0;
    for (index, c) in body.chars().rev().enumerate() {
        weighted_sum = (weighted_sum + c.to_digit(10)? * WEIGHTS[index % WEIGHTS.len()]) % 10;
    }
    Some((10 - weighted_sum) % 10)
}

impl Validator for FinnishReferenceChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        let digits: String = candidate.chars().filter(|c| !c.is_whitespace()).collect();
        let Some(last) = digits.chars().last() else {
            return false;
        };
        let body = &digits[..digits.len() - last.len_utf8()];
        match (fi_reference_check_digit(body), last.to_digit(10)) {
            (Some(expected), Some(actual)) => !body.is_empty() && expected == actual,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    #[test]
    fn test_check_digit() {
        assert_eq!(fi_reference_check_digit("100"), Some(9));
        assert_eq!(fi_reference_check_digit("30230"), Some(0));
        assert_eq!(fi_reference_check_digit("20219"), Some(6));
        assert_eq!(fi_reference_check_digit("12a"), None);
    }

    #[test]
    fn long_reference_bodies() {
        assert_eq!(fi_reference_check_digit(&"9".repeat(10_000)), Some(0));
        assert_eq!(fi_reference_check_digit(&"1234567890".repeat(1_000)), Some(2));
        let reference = format!("{}2", "1234567890".repeat(1_000));
        assert!(FinnishReferenceChecksum.is_valid_match(&reference));
    }

    #[test]
    fn validate_finnish_references() {
        for reference in ["1009", "302300", "202196", "302290", "30 2290"] {
            assert!(
                FinnishReferenceChecksum.is_valid_match(reference),
                "{}",
                reference
            );
        }
        for reference in ["302301", "202195", "302291", "", "9", "10a9"] {
            assert!(
                !FinnishReferenceChecksum.is_valid_match(reference),
                "{}",
                reference
            );
        }
    }
}
