use crate::checksum::Validator;

/// Finnish business ID (Y-tunnus), `NNNNNNN-C`.
pub struct FinnishBusinessIdChecksum;

const MULTIPLIERS: [u32; 7] = [7, 9, 10, 5, 8, 4, 2];
const BUSINESS_ID_DIGITS: usize = 8;

/// Weighted sum of the first seven digits modulo 11. `None` unless `digits` has at least
/// seven leading ASCII digits.
pub fn business_id_remainder(digits: &str) -> Option<u32> {
    let mut chars = digits.chars();
    let mut total = 0;
    for multiplier in MULTIPLIERS {
        total += chars.next()?.to_digit(10)? * multiplier;
    }
    Some(total % 11)
}

impl Validator for FinnishBusinessIdChecksum {
    fn is_valid_match(&self, candidate: &str) -> bool {
        let digits: Vec<u32> = candidate.chars().filter_map(|c| c.to_digit(10)).collect();
        if digits.len() != BUSINESS_ID_DIGITS {
            return false;
        }
        let body: String = candidate.chars().filter(char::is_ascii_digit).collect();
        match business_id_remainder(&body) {
            None | Some(1) => false,
            // remainder 0 leaves the check digit unchecked
            Some(0) => true,
            Some(remainder) => digits[BUSINESS_ID_DIGITS - 1] == 11 - remainder,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    #[test]
    fn test_remainder() {
        assert_eq!(business_id_remainder("2084069"), Some(2));
        assert_eq!(business_id_remainder("0109823"), Some(0));
        assert_eq!(business_id_remainder("208406"), None);
        assert_eq!(business_id_remainder("20840x9"), None);
    }

    #[test]
    fn validate_business_ids() {
        for business_id in ["2084069-9", "0109823-0", "01098230", "1572860-0"] {
            assert!(
                FinnishBusinessIdChecksum.is_valid_match(business_id),
                "{}",
                business_id
            );
        }
        for business_id in ["2084069-8", "2084069-1", "208406-9", "20840699-1"] {
            assert!(
                !FinnishBusinessIdChecksum.is_valid_match(business_id),
                "{}",
                business_id
            );
        }
    }

    #[test]
    fn remainder_zero_accepts_any_check_digit() {
        assert!(FinnishBusinessIdChecksum.is_valid_match("0109823-7"));
    }

    #[test]
    fn remainder_one_is_never_valid() {
        // 3 * 4 = 12
        assert_eq!(business_id_remainder("0000030"), Some(1));
        for check in 0..10 {
            assert!(!FinnishBusinessIdChecksum.is_valid_match(&format!("0000030-{}", check)));
        }
    }
}
